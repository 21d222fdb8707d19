//! Fixed width code I/O for the LZW stream, built on the shared bit packer and reader.
//!
//! There is no code count in the stream. The unpacker stops as soon as fewer than a
//! full code's worth of bits remain, which also skips the zero padding in the last byte.

use crate::bitstream::bitpacker::BitPacker;
use crate::bitstream::bitreader::BitReader;

#[derive(Debug)]
pub struct CodePacker {
    packer: BitPacker,
    width: u8,
}

impl CodePacker {
    pub fn new(width: u8, capacity: usize) -> Self {
        Self {
            packer: BitPacker::new(capacity),
            width,
        }
    }

    #[inline]
    pub fn push(&mut self, code: u16) {
        self.packer.out_bits(code as u32, self.width);
    }

    /// Left-justify any partial last byte and return the packed stream.
    pub fn finish(mut self) -> Vec<u8> {
        self.packer.flush();
        self.packer.output
    }
}

/// Iterator over the codes of a packed stream.
#[derive(Debug)]
pub struct CodeUnpacker<'a> {
    reader: BitReader<'a>,
    width: u8,
}

impl<'a> CodeUnpacker<'a> {
    pub fn new(data: &'a [u8], width: u8) -> Self {
        Self {
            reader: BitReader::new(data),
            width,
        }
    }

    /// Bits left over after the last whole code.
    pub fn remaining_bits(&self) -> usize {
        self.reader.remaining()
    }
}

impl Iterator for CodeUnpacker<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        self.reader.bint(self.width as usize).map(|code| code as u16)
    }
}

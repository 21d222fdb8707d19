//! BitReader: reads a packed MSB-first bitstream from a byte slice.
//!
//! The reader carries an explicit bit limit so that padding in the final byte is
//! never handed out as data.

const BIT_MASK: u8 = 0xff;

#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    /// Total number of readable bits in the buffer.
    bit_len: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a reader over every bit of `buffer`.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_bit_len(buffer, buffer.len() * 8)
    }

    /// Creates a reader that stops after `bit_len` bits (clamped to the buffer size).
    pub fn with_bit_len(buffer: &'a [u8], bit_len: usize) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
            bit_len: bit_len.min(buffer.len() * 8),
        }
    }

    fn position(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }

    /// Number of bits not yet consumed.
    pub fn remaining(&self) -> usize {
        self.bit_len - self.position()
    }

    /// Return the next bit (1 or 0), or None if there is no more data to read
    #[inline]
    pub fn bit(&mut self) -> Option<u8> {
        if self.remaining() == 0 {
            return None;
        }
        let bit = (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        if self.bit_index == 8 {
            self.bit_index = 0;
            self.cursor += 1;
        }
        Some(bit)
    }

    /// Return Some(true) if the next bit is 1, Some(false) if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Return the next n bits (n <= 32) as an integer. If fewer than n bits remain,
    /// nothing is consumed and None is returned.
    pub fn bint(&mut self, mut n: usize) -> Option<u32> {
        debug_assert!(n <= 32);
        if self.remaining() < n {
            return None;
        }
        let mut result = 0_u32;

        // Finish a partial byte first
        if self.bit_index > 0 && n > 0 {
            let needed = n.min(8 - self.bit_index);
            let byte = self.buffer[self.cursor] & BIT_MASK >> self.bit_index;
            result = (byte >> (8 - self.bit_index - needed)) as u32;
            self.bit_index += needed;
            if self.bit_index == 8 {
                self.bit_index = 0;
                self.cursor += 1;
            }
            n -= needed;
        }
        // Whole bytes
        while n >= 8 {
            result = result << 8 | self.buffer[self.cursor] as u32;
            self.cursor += 1;
            n -= 8;
        }
        // Leading bits of the next byte
        if n > 0 {
            result = result << n | (self.buffer[self.cursor] >> (8 - n)) as u32;
            self.bit_index = n;
        }
        Some(result)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

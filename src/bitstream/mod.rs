//! The bitstream module forms the bit level I/O subsystem shared by both codecs.
//!
//! Bits are always packed most significant bit first. The Huffman coder pushes its
//! variable length codes through the BitPacker one bit at a time and records how many
//! bits of the last byte are valid. The LZW coder wraps the same packer and reader with
//! fixed width code helpers (see `lzw_coding::code_io`).
//!
pub mod bitpacker;
pub mod bitreader;

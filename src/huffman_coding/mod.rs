//! The huffman module provides the static-frequency Huffman codec.
//!
//! Compression counts every byte value, builds a prefix-code tree by repeatedly merging
//! the two lightest nodes, derives the code for each byte from its path in the tree,
//! and packs the codes MSB-first behind a fixed 2048-byte frequency header. A final byte
//! records how many bits of the last code byte are meaningful.
//!
//! Decompression reads the header, rebuilds the identical tree, and walks it one bit at
//! a time. The tree shape depends only on the counts, so no code table is stored.
//!
//! Container layout:
//! - 2048 bytes: 256 little-endian u64 counts, index = byte value
//! - packed code bits
//! - 1 byte: valid bits (1-8) in the preceding byte, present whenever input was not empty
//!

pub mod codes;
pub mod header;
pub mod huffman;
pub mod tree;

//! Lossless whole-file compression with two independent codecs.
//!
//! - Huffman: a static prefix code built from the byte counts of the input. The
//!   counts travel in a fixed 2048-byte header so the decoder can rebuild the same
//!   code.
//! - LZW: an adaptive dictionary of byte sequences, emitted as fixed 12-bit codes.
//!   Nothing but the codes is stored.
//!
//! Both work on whole buffers in memory. The `huff` and `lzw` binaries wrap them:
//!
//! `$> huff compress notes.txt notes.huff`
//!
//! `$> lzw decompress notes.lzw notes.txt`
//!
#![warn(rust_2018_idioms)]

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod lzw_coding;
pub mod tools;

pub use error::{Codec, Error, Result};

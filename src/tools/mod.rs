//! The tools module provides the helpers around the two codecs.
//!
//! The tools are:
//! - cli: Command line interface, run options and logging setup.
//! - data_io: Whole-file reads and writes, including standard streams.
//! - freq_count: Byte frequency count used by the Huffman coder.
//!
pub mod cli;
pub mod data_io;
pub mod freq_count;

//! The lzw module provides the dictionary based LZW codec.
//!
//! Codes are a fixed 12 bits wide. Both sides start with codes 0-255 mapped to the
//! single bytes, hand out new codes from 256, and stop adding entries once code 4095
//! is taken. Compression and decompression then carry on with the frozen dictionary.
//!
//! The stream is nothing but the packed codes: no header, no count, no terminator.
//! Nothing about the dictionary is transmitted; the decoder grows its own copy from
//! the codes it reads, including the case where a code names the entry that is being
//! defined at that very step.
//!

pub mod code_io;
pub mod dictionary;
pub mod lzw;

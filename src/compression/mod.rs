//! The compression module holds the file level drivers for both codecs.
//!
//! Each run reads the whole input into memory, hands it to the selected codec, and
//! writes the result only after the codec has finished. A decode that fails part way
//! never leaves a partial output file.
//!
//! Compression:
//! - Huffman: count bytes, build the code tree, pack codes behind the frequency header.
//! - LZW: grow the dictionary while emitting 12-bit codes.
//!
//! Decompression is the inverse: rebuild the tree from the header (Huffman) or grow the
//! dictionary from the codes (LZW), then emit bytes.
//!

pub mod compress;
pub mod decompress;

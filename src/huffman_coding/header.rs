//! The frequency header at the front of every Huffman container: 256 little-endian
//! u64 counts, index = byte value. The decoder rebuilds the tree from it.

use crate::error::{Codec, Error, Result};
use crate::tools::freq_count::Freqs;

/// Size in bytes of the serialized header.
pub const HEADER_SIZE: usize = 256 * 8;

/// Append the header for `freqs` to `out`.
pub fn write_header(out: &mut Vec<u8>, freqs: &Freqs) {
    out.reserve(HEADER_SIZE);
    freqs
        .iter()
        .for_each(|count| out.extend_from_slice(&count.to_le_bytes()));
}

/// Parse the header from the front of `data`, returning the table and the rest of
/// the container.
pub fn read_header(data: &[u8]) -> Result<(Freqs, &[u8])> {
    if data.len() < HEADER_SIZE {
        return Err(Error::corrupt(
            Codec::Huffman,
            format!(
                "frequency header truncated: {} of {} bytes",
                data.len(),
                HEADER_SIZE
            ),
        ));
    }
    let (header, body) = data.split_at(HEADER_SIZE);
    let mut freqs = [0_u64; 256];
    for (count, chunk) in freqs.iter_mut().zip(header.chunks_exact(8)) {
        let mut bytes = [0_u8; 8];
        bytes.copy_from_slice(chunk);
        *count = u64::from_le_bytes(bytes);
    }
    Ok((freqs, body))
}

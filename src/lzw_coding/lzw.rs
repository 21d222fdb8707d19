use log::{debug, info};

use super::code_io::{CodePacker, CodeUnpacker};
use super::dictionary::{DecodeDictionary, EncodeDictionary, CODE_BITS};
use crate::error::{Codec, Error, Result};

/// Compress `data` into a stream of 12-bit codes.
pub fn lzw_encode(data: &[u8]) -> Vec<u8> {
    let codes = encode_codes(data);
    let mut cp = CodePacker::new(CODE_BITS, codes.len() * CODE_BITS as usize / 8 + 1);
    codes.iter().for_each(|&code| cp.push(code));
    let out = cp.finish();
    info!(
        "LZW: {} bytes in, {} codes, {} bytes out",
        data.len(),
        codes.len(),
        out.len()
    );
    out
}

/// Decompress a stream produced by `lzw_encode`.
pub fn lzw_decode(data: &[u8]) -> Result<Vec<u8>> {
    let out = decode_codes(CodeUnpacker::new(data, CODE_BITS))?;
    info!("LZW: {} bytes in, {} bytes out", data.len(), out.len());
    Ok(out)
}

/// The code sequence for `data`. The current match is carried as its code; None
/// means nothing has been read yet.
pub fn encode_codes(data: &[u8]) -> Vec<u16> {
    let mut dict = EncodeDictionary::new();
    let mut codes = Vec::new();
    let mut current: Option<u16> = None;
    let mut reported_full = false;

    for &byte in data {
        let Some(prefix) = current else {
            current = Some(byte as u16);
            continue;
        };
        match dict.find(prefix, byte) {
            Some(code) => current = Some(code),
            None => {
                codes.push(prefix);
                if dict.insert(prefix, byte).is_none() && !reported_full {
                    debug!(
                        "Dictionary full after {} codes, continuing without new entries",
                        codes.len()
                    );
                    reported_full = true;
                }
                current = Some(byte as u16);
            }
        }
    }
    if let Some(prefix) = current {
        codes.push(prefix);
    }
    codes
}

/// Rebuild the input from a code sequence, growing the dictionary as the encoder did.
pub fn decode_codes(codes: impl IntoIterator<Item = u16>) -> Result<Vec<u8>> {
    let corrupt = |message: String| Error::corrupt(Codec::Lzw, message);

    let mut codes = codes.into_iter();
    let mut dict = DecodeDictionary::new();
    let mut out = Vec::new();

    let Some(first) = codes.next() else {
        return Ok(out);
    };
    let mut prev = dict
        .get(first)
        .ok_or_else(|| corrupt(format!("first code {} is not a single byte", first)))?
        .to_vec();
    out.extend_from_slice(&prev);

    for (i, code) in codes.enumerate() {
        let entry = match dict.get(code) {
            Some(seq) => seq.to_vec(),
            // The code being defined by this very step
            None if dict.next_code() == Some(code) => {
                let mut seq = prev.clone();
                seq.push(prev[0]);
                seq
            }
            None => {
                return Err(corrupt(format!(
                    "code {} at position {} is beyond the dictionary ({} entries)",
                    code,
                    i + 1,
                    dict.len()
                )))
            }
        };
        out.extend_from_slice(&entry);
        if !dict.is_full() {
            let mut grown = std::mem::take(&mut prev);
            grown.push(entry[0]);
            dict.push(grown);
        }
        prev = entry;
    }
    Ok(out)
}

use log::{debug, info, trace, warn};

use super::codes::CodeTable;
use super::header::{read_header, write_header, HEADER_SIZE};
use super::tree::HuffmanTree;
use crate::bitstream::bitpacker::BitPacker;
use crate::bitstream::bitreader::BitReader;
use crate::error::{Codec, Error, Result};
use crate::tools::freq_count::freqs;

/// Encode `data` into a Huffman container: frequency header, packed codes, and one
/// trailing byte giving the number of valid bits (1-8) in the last code byte.
/// Empty input produces only the all-zero header.
pub fn huf_encode(data: &[u8]) -> Vec<u8> {
    let freqs = freqs(data);
    let tree = HuffmanTree::from_freqs(&freqs);
    let table = CodeTable::from_tree(&tree);

    let code_bits = table.encoded_bits(&freqs);
    let mut out = Vec::with_capacity(HEADER_SIZE + (code_bits / 8) as usize + 2);
    write_header(&mut out, &freqs);

    if tree.is_empty() {
        info!("Empty input, wrote header only.");
        return out;
    }
    debug!(
        "{} distinct symbols, {} code bits for {} input bytes",
        table.iter().count(),
        code_bits,
        data.len()
    );
    for (sym, code) in table.iter() {
        trace!("  {:3} -> {}", sym, code);
    }

    let mut bp = BitPacker::new((code_bits / 8) as usize + 1);
    for byte in data {
        // Every byte of data has a code, since the table was built from data.
        if let Some(code) = table.get(*byte) {
            code.bits().iter().for_each(|&bit| bp.push_bit(bit));
        }
    }
    let last_bits = bp.flush();
    out.extend_from_slice(&bp.output);
    out.push(last_bits);

    info!(
        "Huffman: {} bytes in, {} bytes out ({} valid bits in last byte)",
        data.len(),
        out.len(),
        last_bits
    );
    out
}

/// Decode a Huffman container produced by `huf_encode`.
pub fn huf_decode(data: &[u8]) -> Result<Vec<u8>> {
    let corrupt = |message: String| Error::corrupt(Codec::Huffman, message);

    let (freqs, body) = read_header(data)?;
    let total = freqs
        .iter()
        .try_fold(0_u64, |sum, &f| sum.checked_add(f))
        .ok_or_else(|| corrupt("frequency header total overflows".into()))?;

    if total == 0 {
        if !body.is_empty() {
            warn!(
                "Ignoring {} bytes after an empty-input header.",
                body.len()
            );
        }
        info!("Header is all zero, output is empty.");
        return Ok(Vec::new());
    }

    let (&last_bits, packed) = body
        .split_last()
        .ok_or_else(|| corrupt("no bitstream after frequency header".into()))?;
    if packed.is_empty() {
        return Err(corrupt("no encoded bytes before the valid-bit count".into()));
    }
    if !(1..=8).contains(&last_bits) {
        return Err(corrupt(format!(
            "valid-bit count {} is outside 1-8",
            last_bits
        )));
    }
    let bit_len = (packed.len() - 1) * 8 + last_bits as usize;
    debug!(
        "Decoding {} bits for {} symbols ({} packed bytes)",
        bit_len,
        total,
        packed.len()
    );

    let tree = HuffmanTree::from_freqs(&freqs);
    let root = tree
        .root()
        .ok_or_else(|| corrupt("frequency header builds no tree".into()))?;

    // Every symbol takes at least one bit.
    let mut out = Vec::with_capacity((total as usize).min(bit_len));
    let mut br = BitReader::with_bit_len(packed, bit_len);

    if let Some(sym) = tree.symbol(root) {
        // Single symbol input: every code is the one bit "0".
        while let Some(bit) = br.bit() {
            if bit != 0 {
                return Err(corrupt(format!(
                    "unexpected 1 bit at {} in single-symbol stream",
                    br.loc()
                )));
            }
            out.push(sym);
        }
    } else {
        let mut node = root;
        while let Some(bit) = br.bit() {
            // The root has kids and we reset to it after each leaf, so the walk
            // always starts from a node with kids.
            node = match tree.child(node, bit) {
                Some(next) => next,
                None => return Err(corrupt("walked past a leaf".into())),
            };
            if let Some(sym) = tree.symbol(node) {
                out.push(sym);
                node = root;
            }
        }
        if node != root {
            return Err(corrupt(format!(
                "bitstream ends inside a code after {} bytes",
                out.len()
            )));
        }
    }

    if out.len() as u64 != total {
        return Err(corrupt(format!(
            "decoded {} bytes but header counts {}",
            out.len(),
            total
        )));
    }
    info!("Huffman: {} bytes in, {} bytes out", data.len(), out.len());
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    fn roundtrip(data: &[u8]) {
        let encoded = huf_encode(data);
        let decoded = huf_decode(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn aaabbc_exact_bytes_test() {
        let encoded = huf_encode(b"AAABBC");
        // A=0 B=11 C=10 gives 000 11 11 10, nine bits
        assert_eq!(encoded.len(), HEADER_SIZE + 3);
        assert_eq!(&encoded[HEADER_SIZE..], &[0b0001_1111, 0b0000_0000, 1]);
        assert_eq!(huf_decode(&encoded).unwrap(), b"AAABBC");
    }

    #[test]
    fn empty_input_test() {
        let encoded = huf_encode(&[]);
        assert_eq!(encoded.len(), HEADER_SIZE);
        assert!(encoded.iter().all(|&b| b == 0));
        assert_eq!(huf_decode(&encoded).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn single_symbol_test() {
        let data = vec![b'q'; 13];
        let encoded = huf_encode(&data);
        // 13 zero bits: two bytes, 5 valid bits in the last one
        assert_eq!(&encoded[HEADER_SIZE..], &[0, 0, 5]);
        roundtrip(&data);
        roundtrip(&[0xff]);
    }

    #[test]
    fn full_last_byte_test() {
        let encoded = huf_encode(&[3_u8; 16]);
        assert_eq!(&encoded[HEADER_SIZE..], &[0, 0, 8]);
        roundtrip(&[3_u8; 16]);
    }

    #[test]
    fn all_byte_values_test() {
        let data: Vec<u8> = (0..=255_u8).cycle().take(4096).collect();
        roundtrip(&data);
    }

    #[test]
    fn text_roundtrip_test() {
        roundtrip(b"It was the best of times, it was the worst of times.");
        roundtrip(b"ab");
    }

    #[test]
    fn missing_trailer_test() {
        let mut encoded = huf_encode(b"AAABBC");
        encoded.pop();
        assert!(huf_decode(&encoded).unwrap_err().is_corrupt());

        let text = b"the quick brown fox jumps over the lazy dog, again and again";
        let mut encoded = huf_encode(text);
        encoded.pop();
        assert!(huf_decode(&encoded).unwrap_err().is_corrupt());
    }

    #[test]
    fn empty_body_test() {
        let mut encoded = huf_encode(b"AAABBC");
        encoded.truncate(HEADER_SIZE);
        assert!(huf_decode(&encoded).unwrap_err().is_corrupt());
        encoded.push(3);
        assert!(huf_decode(&encoded).unwrap_err().is_corrupt());
    }

    #[test]
    fn bad_trailer_value_test() {
        let mut encoded = huf_encode(b"AAABBC");
        *encoded.last_mut().unwrap() = 0;
        assert!(huf_decode(&encoded).unwrap_err().is_corrupt());
        *encoded.last_mut().unwrap() = 9;
        assert!(huf_decode(&encoded).unwrap_err().is_corrupt());
    }

    #[test]
    fn dangling_code_test() {
        // One valid bit "1" is half of B or C
        let mut encoded = huf_encode(b"AAABBC");
        encoded.truncate(HEADER_SIZE);
        encoded.extend_from_slice(&[0b1000_0000, 1]);
        assert!(huf_decode(&encoded).unwrap_err().is_corrupt());
    }

    #[test]
    fn extra_data_test() {
        let mut encoded = huf_encode(b"AAABBC");
        let n = encoded.len();
        // Claim all 8 bits of the last byte: seven extra A codes
        encoded[n - 1] = 8;
        assert!(huf_decode(&encoded).unwrap_err().is_corrupt());
    }

    #[test]
    fn single_symbol_one_bit_test() {
        let mut encoded = huf_encode(&[1_u8; 4]);
        let n = encoded.len();
        encoded[n - 2] = 0b0100_0000;
        assert!(huf_decode(&encoded).unwrap_err().is_corrupt());
    }

    #[test]
    fn truncated_header_test() {
        assert!(huf_decode(&[0_u8; 10]).unwrap_err().is_corrupt());
    }
}

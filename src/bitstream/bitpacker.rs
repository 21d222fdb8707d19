/// Packs bits MSB-first into a byte buffer. Used directly by the Huffman encoder for
/// its variable length codes, and through `CodePacker` for fixed width LZW codes.
#[derive(Debug)]
pub struct BitPacker {
    pub output: Vec<u8>,
    /// Count of valid bits in the last byte of output (1-8). Set by flush().
    pub last_bits: u8,
    queue: u64,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the capacity specified. Call
    /// flush() to push the bit queue to the buffer before reading the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            last_bits: 0,
            queue: 0,
            q_bits: 0,
        }
    }

    /// Move every full byte from the queue to the output buffer.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
    }

    /// Puts a single bit on the stream.
    #[inline]
    pub fn push_bit(&mut self, bit: bool) {
        self.queue = (self.queue << 1) | bit as u64;
        self.q_bits += 1;
        if self.q_bits > 7 {
            self.write_stream();
        }
    }

    /// Puts the low `depth` bits of `data` on the stream, most significant first.
    /// Depth may be 0-32.
    pub fn out_bits(&mut self, data: u32, depth: u8) {
        debug_assert!(depth <= 32);
        if depth == 0 {
            return;
        }
        self.queue <<= depth;
        self.queue |= (data as u64) & (u64::MAX >> (64 - depth as u32));
        self.q_bits += depth;
        self.write_stream();
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// significant bits, and records how many bits of the last byte are meaningful.
    /// Returns that count, or 0 if nothing was ever written.
    pub fn flush(&mut self) -> u8 {
        if self.q_bits > 0 {
            self.last_bits = self.q_bits;
            self.queue <<= 8 - self.q_bits;
            self.q_bits = 8;
            self.write_stream();
        } else if !self.output.is_empty() && self.last_bits == 0 {
            self.last_bits = 8;
        }
        self.last_bits
    }

    /// Number of bits put on the stream so far, including those still queued.
    pub fn bit_len(&self) -> usize {
        self.output.len() * 8 + self.q_bits as usize
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.bit_len() / 8, self.bit_len() % 8)
    }
}

#[cfg(test)]
mod test {
    use super::BitPacker;

    #[test]
    fn push_bit_test() {
        let mut bp = BitPacker::new(4);
        for bit in [false, false, true, false, false, false, false, true] {
            bp.push_bit(bit);
        }
        assert_eq!(bp.flush(), 8);
        assert_eq!(bp.output, "!".as_bytes());
    }

    #[test]
    fn partial_byte_test() {
        let mut bp = BitPacker::new(4);
        bp.out_bits(0b1111_1111, 8);
        bp.out_bits(0b101, 3);
        assert_eq!("[1.3]", &bp.loc());
        assert_eq!(bp.flush(), 3);
        assert_eq!(bp.output, vec![0xff, 0b1010_0000]);
    }

    #[test]
    fn out_bits_masks_high_bits_test() {
        let mut bp = BitPacker::new(4);
        bp.out_bits(0xffff_f041, 12);
        bp.out_bits(0x042, 12);
        assert_eq!(bp.flush(), 8);
        assert_eq!(bp.output, vec![0x04, 0x10, 0x42]);
    }

    #[test]
    fn empty_flush_test() {
        let mut bp = BitPacker::new(0);
        assert_eq!(bp.flush(), 0);
        assert!(bp.output.is_empty());
    }
}

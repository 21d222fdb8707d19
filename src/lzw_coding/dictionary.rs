//! LZW dictionaries. Both sides start from the 256 single-byte sequences and grow by
//! one entry per code until the 12-bit code space is used up, after which they are
//! frozen for the rest of the run.

use rustc_hash::FxHashMap;

/// Width of every code in the stream.
pub const CODE_BITS: u8 = 12;
/// Size of the code space, and so the largest dictionary.
pub const MAX_CODES: usize = 1 << CODE_BITS;
/// First code handed out to a new sequence.
pub const FIRST_CODE: u16 = 256;

/// Sequence to code. A known sequence is represented by its code, so an entry is
/// keyed by the code of everything but its last byte plus that last byte.
#[derive(Debug)]
pub struct EncodeDictionary {
    entries: FxHashMap<(u16, u8), u16>,
    next_code: u16,
}

impl EncodeDictionary {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            next_code: FIRST_CODE,
        }
    }

    /// Code of the sequence `prefix` + `byte`, if it is in the dictionary.
    #[inline]
    pub fn find(&self, prefix: u16, byte: u8) -> Option<u16> {
        self.entries.get(&(prefix, byte)).copied()
    }

    /// Add `prefix` + `byte` under the next free code. Returns the code, or None when
    /// the dictionary is full and nothing was added.
    pub fn insert(&mut self, prefix: u16, byte: u8) -> Option<u16> {
        if self.is_full() {
            return None;
        }
        let code = self.next_code;
        self.entries.insert((prefix, byte), code);
        self.next_code += 1;
        Some(code)
    }

    /// Number of entries, including the 256 single bytes.
    pub fn len(&self) -> usize {
        self.next_code as usize
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_full(&self) -> bool {
        self.len() >= MAX_CODES
    }
}

impl Default for EncodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Code to sequence, rebuilt by the decoder from the code stream alone.
#[derive(Debug)]
pub struct DecodeDictionary {
    entries: Vec<Vec<u8>>,
}

impl DecodeDictionary {
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(MAX_CODES);
        entries.extend((0..=255_u8).map(|b| vec![b]));
        Self { entries }
    }

    pub fn get(&self, code: u16) -> Option<&[u8]> {
        self.entries.get(code as usize).map(Vec::as_slice)
    }

    /// The code the next pushed sequence will get, or None once the dictionary is full.
    pub fn next_code(&self) -> Option<u16> {
        (!self.is_full()).then(|| self.entries.len() as u16)
    }

    /// Add a sequence under the next code. Returns false (and drops it) when full.
    pub fn push(&mut self, sequence: Vec<u8>) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries.push(sequence);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= MAX_CODES
    }
}

impl Default for DecodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

use std::fmt::{Display, Formatter};

use super::tree::{HuffmanTree, NodeData, NodeId};

/// A Huffman code: the bits on the path from the root to a leaf, first bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.bits
            .iter()
            .try_for_each(|&b| write!(f, "{}", if b { '1' } else { '0' }))
    }
}

impl From<&str> for Code {
    fn from(s: &str) -> Self {
        Code {
            bits: s.chars().map(|c| c == '1').collect(),
        }
    }
}

/// Byte value to code, for every leaf of a tree.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    /// Walk the tree depth first, 0 for a left edge and 1 for a right edge. A tree
    /// that is a single leaf gives that symbol the code "0".
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = vec![None; 256];
        if let Some(root) = tree.root() {
            if let Some(sym) = tree.symbol(root) {
                codes[sym as usize] = Some(Code::from("0"));
            } else {
                let mut path = Vec::new();
                return_leaves(tree, root, &mut path, &mut codes);
            }
        }
        Self { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }

    /// All assigned codes with their symbols, in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(sym, code)| code.as_ref().map(|c| (sym as u8, c)))
    }

    /// Total encoded length in bits of a message with these symbol counts.
    pub fn encoded_bits(&self, freqs: &[u64; 256]) -> u64 {
        self.iter()
            .map(|(sym, code)| freqs[sym as usize] * code.len() as u64)
            .sum()
    }
}

/// Recursively walk the tree, recording the path to each leaf.
fn return_leaves(
    tree: &HuffmanTree,
    id: NodeId,
    path: &mut Vec<bool>,
    codes: &mut [Option<Code>],
) {
    match tree.node(id).node_data {
        NodeData::Kids(left, right) => {
            path.push(false);
            return_leaves(tree, left, path, codes);
            path.pop();
            path.push(true);
            return_leaves(tree, right, path, codes);
            path.pop();
        }
        NodeData::Leaf(sym) => {
            codes[sym as usize] = Some(Code { bits: path.clone() });
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::freq_count::freqs;

    fn table_for(data: &[u8]) -> CodeTable {
        CodeTable::from_tree(&HuffmanTree::from_freqs(&freqs(data)))
    }

    #[test]
    fn aaabbc_test() {
        let table = table_for(b"AAABBC");
        let a = table.get(b'A').unwrap();
        let b = table.get(b'B').unwrap();
        let c = table.get(b'C').unwrap();
        assert_eq!(a.to_string(), "0");
        assert_eq!(c.to_string(), "10");
        assert_eq!(b.to_string(), "11");
        assert!(a.len() < c.len());
        assert!(table.get(b'D').is_none());
        assert_eq!(table.encoded_bits(&freqs(b"AAABBC")), 9);
    }

    #[test]
    fn single_symbol_code_test() {
        let table = table_for(&[7_u8; 40]);
        assert_eq!(table.get(7), Some(&Code::from("0")));
        assert_eq!(table.iter().count(), 1);
    }

    #[test]
    fn empty_table_test() {
        let table = table_for(&[]);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn prefix_free_test() {
        let data: Vec<u8> = (0..5000_u32).map(|i| ((i * i) % 97) as u8).collect();
        let table = table_for(&data);
        let codes: Vec<&Code> = table.iter().map(|(_, c)| c).collect();
        assert!(codes.len() > 2);
        for (i, a) in codes.iter().enumerate() {
            assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!a.is_prefix_of(b), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn skewed_weights_give_long_codes_test() {
        // Fibonacci counts build a maximally deep tree
        let mut f = [0_u64; 256];
        let (mut x, mut y) = (1_u64, 1_u64);
        for count in f.iter_mut().take(40) {
            *count = x;
            (x, y) = (y, x + y);
        }
        let table = CodeTable::from_tree(&HuffmanTree::from_freqs(&f));
        let longest = table.iter().map(|(_, c)| c.len()).max().unwrap();
        assert_eq!(longest, 39);
    }
}

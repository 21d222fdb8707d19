//! Huffman tree construction from a dense byte histogram.
//!
//! Nodes live in an arena (`Vec<Node>`) and refer to their children by index. The
//! whole tree is dropped at once when the encode or decode run that built it ends.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::trace;

use crate::tools::freq_count::Freqs;

/// Index of a node in the tree arena.
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeData {
    Kids(NodeId, NodeId),
    Leaf(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub weight: u64,
    pub node_data: NodeData,
}

#[derive(Debug, Default)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl HuffmanTree {
    /// Build the tree for `freqs`. Symbols with a zero count get no leaf; an all-zero
    /// table gives an empty tree (no root).
    ///
    /// The two lightest pending nodes are merged until one is left, the first one
    /// removed becoming the left child. Ties on weight go to the node created first.
    /// Leaves are created in byte order and merged nodes after them, so the shape is a
    /// pure function of the table and encoder and decoder always agree.
    pub fn from_freqs(freqs: &Freqs) -> Self {
        let mut nodes: Vec<Node> = freqs
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f > 0)
            .map(|(sym, &f)| Node {
                weight: f,
                node_data: NodeData::Leaf(sym as u8),
            })
            .collect();

        if nodes.is_empty() {
            return Self::default();
        }

        // Min-heap on (weight, creation index)
        let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = nodes
            .iter()
            .enumerate()
            .map(|(id, node)| Reverse((node.weight, id)))
            .collect();

        while heap.len() > 1 {
            let (Some(Reverse((lw, left))), Some(Reverse((rw, right)))) = (heap.pop(), heap.pop())
            else {
                break;
            };
            let id = nodes.len();
            nodes.push(Node {
                weight: lw + rw,
                node_data: NodeData::Kids(left, right),
            });
            heap.push(Reverse((lw + rw, id)));
        }

        let root = heap.pop().map(|Reverse((_, id))| id);
        trace!(
            "Built huffman tree with {} nodes, root weight {}",
            nodes.len(),
            root.map_or(0, |r| nodes[r].weight)
        );
        Self { nodes, root }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Total number of nodes, leaves plus merged nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Follow one edge down from `id`: bit 0 goes left, bit 1 goes right. Returns None
    /// when `id` is a leaf.
    #[inline]
    pub fn child(&self, id: NodeId, bit: u8) -> Option<NodeId> {
        match self.nodes[id].node_data {
            NodeData::Kids(left, right) => Some(if bit == 0 { left } else { right }),
            NodeData::Leaf(_) => None,
        }
    }

    /// The symbol held by `id`, if it is a leaf.
    #[inline]
    pub fn symbol(&self, id: NodeId) -> Option<u8> {
        match self.nodes[id].node_data {
            NodeData::Leaf(sym) => Some(sym),
            NodeData::Kids(..) => None,
        }
    }
}

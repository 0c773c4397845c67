// huffman_coding/src/tree.rs

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use contracts::debug_ensures;
use tracing::{debug, trace};

use crate::frequency::{count_frequencies, total_count, Frequency, FrequencyMap};

/// A node of a Huffman tree.
///
/// Leaves carry an input symbol; internal nodes carry the summed frequency
/// of exactly two children. Each parent owns its children outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode<S> {
    Leaf {
        symbol: S,
        frequency: Frequency,
    },
    Internal {
        frequency: Frequency,
        left: Box<HuffmanNode<S>>,
        right: Box<HuffmanNode<S>>,
    },
}

impl<S> HuffmanNode<S> {
    /// Merges two subtrees under a new internal node, `left` taking the `0` branch.
    fn merge(left: Self, right: Self) -> Self {
        HuffmanNode::Internal {
            frequency: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn frequency(&self) -> Frequency {
        match self {
            HuffmanNode::Leaf { frequency, .. } => *frequency,
            HuffmanNode::Internal { frequency, .. } => *frequency,
        }
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<&S> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => Some(symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    /// The `(left, right)` children of an internal node, `None` for leaves.
    pub fn children(&self) -> Option<(&HuffmanNode<S>, &HuffmanNode<S>)> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { left, right, .. } => Some((left, right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }
}

/// A complete Huffman tree over a non-empty alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S = char> {
    root: HuffmanNode<S>,
}

impl<S: Ord + Clone> HuffmanTree<S> {
    /// Counts `symbols` and builds the tree in one step.
    ///
    /// Returns `None` for an empty sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use huffman_coding::HuffmanTree;
    ///
    /// let tree = HuffmanTree::from_symbols("abbccc".chars()).unwrap();
    /// assert_eq!(tree.total_frequency(), 6);
    /// assert_eq!(tree.leaf_count(), 3);
    /// ```
    pub fn from_symbols<I>(symbols: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
    {
        build_tree(&count_frequencies(symbols))
    }
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &HuffmanNode<S> {
        &self.root
    }

    /// Frequency of the root, equal to the length of the counted input.
    pub fn total_frequency(&self) -> Frequency {
        self.root.frequency()
    }

    /// Number of leaves, i.e. distinct symbols.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node.children() {
                Some((left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
                None => count += 1,
            }
        }
        count
    }

    /// Length of the longest root-to-leaf path. A single-leaf tree has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, level)) = stack.pop() {
            match node.children() {
                Some((left, right)) => {
                    stack.push((right, level + 1));
                    stack.push((left, level + 1));
                }
                None => deepest = deepest.max(level),
            }
        }
        deepest
    }
}

impl<S: fmt::Debug> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(&self.root, 0usize, "root")];
        while let Some((node, level, label)) = stack.pop() {
            let indent = "  ".repeat(level);
            match node {
                HuffmanNode::Leaf { symbol, frequency } => {
                    writeln!(
                        f,
                        "{}{} -> Leaf {:?} [frequency: {}]",
                        indent, label, symbol, frequency
                    )?;
                }
                HuffmanNode::Internal {
                    frequency,
                    left,
                    right,
                } => {
                    writeln!(f, "{}{} -> Internal [frequency: {}]", indent, label, frequency)?;
                    stack.push((right, level + 1, "1"));
                    stack.push((left, level + 1, "0"));
                }
            }
        }
        Ok(())
    }
}

/// Entry in the min-priority queue used while merging.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the lowest frequency first,
/// and among equal frequencies the entry inserted earliest.
struct QueueEntry<S> {
    frequency: Frequency,
    sequence: usize,
    node: HuffmanNode<S>,
}

impl<S> PartialEq for QueueEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.frequency == other.frequency && self.sequence == other.sequence
    }
}

impl<S> Eq for QueueEntry<S> {}

impl<S> PartialOrd for QueueEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for QueueEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: smaller frequency, then smaller sequence, is "greater"
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Builds a Huffman tree from a frequency map.
///
/// Leaves are queued in ascending symbol order. The two lowest-frequency
/// nodes are repeatedly removed (first removed becomes the left child) and
/// replaced by their merge until one node remains. Ties on frequency are
/// broken by insertion order, so the result is deterministic.
///
/// # Arguments
///
/// * `frequencies` - Symbol counts, as produced by [`count_frequencies`].
///
/// # Returns
///
/// * `Option<HuffmanTree<S>>` - `None` for an empty map; a single-leaf tree
///   for a one-symbol alphabet.
///
/// # Examples
///
/// ```
/// use huffman_coding::{build_tree, count_frequencies};
///
/// let tree = build_tree(&count_frequencies("aaaa".chars())).unwrap();
/// assert!(tree.root().is_leaf());
/// assert!(build_tree(&count_frequencies("".chars())).is_none());
/// ```
#[debug_ensures(ret.is_some() == !frequencies.is_empty())]
#[debug_ensures(
    ret.as_ref()
        .map_or(true, |tree| tree.total_frequency() == total_count(frequencies))
)]
pub fn build_tree<S: Ord + Clone>(frequencies: &FrequencyMap<S>) -> Option<HuffmanTree<S>> {
    debug!(symbols = frequencies.len(), "building huffman tree");

    let mut queue: BinaryHeap<QueueEntry<S>> = frequencies
        .iter()
        .enumerate()
        .map(|(sequence, (symbol, &frequency))| QueueEntry {
            frequency,
            sequence,
            node: HuffmanNode::Leaf {
                symbol: symbol.clone(),
                frequency,
            },
        })
        .collect();
    let mut next_sequence = queue.len();

    while queue.len() > 1 {
        let (Some(first), Some(second)) = (queue.pop(), queue.pop()) else {
            break;
        };
        trace!(
            left = first.frequency,
            right = second.frequency,
            "merging nodes"
        );

        let node = HuffmanNode::merge(first.node, second.node);
        queue.push(QueueEntry {
            frequency: node.frequency(),
            sequence: next_sequence,
            node,
        });
        next_sequence += 1;
    }

    let tree = queue.pop().map(|entry| HuffmanTree { root: entry.node });
    if let Some(tree) = &tree {
        debug!(
            total_frequency = tree.total_frequency(),
            depth = tree.depth(),
            "huffman tree built"
        );
    }
    tree
}

// huffman_coding/src/codes.rs

use std::collections::BTreeMap;

use contracts::debug_ensures;

use crate::frequency::{Frequency, FrequencyMap};
use crate::tree::{HuffmanNode, HuffmanTree};

/// Mapping from symbol to its code, a non-empty string of `'0'` and `'1'`.
pub type CodeMap<S = char> = BTreeMap<S, String>;

/// Code given to the only symbol of a one-symbol alphabet, whose tree is a bare leaf.
const SINGLE_SYMBOL_CODE: &str = "0";

/// Derives the code of every symbol by walking the tree from the root.
///
/// Descending left appends `'0'`, descending right appends `'1'`; each
/// pending branch carries its own copy of the path, so nothing is shared
/// between branches. A tree that is a single leaf yields `"0"` for its symbol.
///
/// # Arguments
///
/// * `tree` - The tree to walk, or `None` for an empty input.
///
/// # Returns
///
/// * `CodeMap<S>` - One prefix-free code per leaf; empty when `tree` is `None`.
///
/// # Examples
///
/// ```
/// use huffman_coding::{build_tree, count_frequencies, extract_codes};
///
/// let tree = build_tree(&count_frequencies("abbccc".chars()));
/// let codes = extract_codes(tree.as_ref());
/// assert_eq!(codes[&'c'], "0");
/// assert_eq!(codes[&'a'], "10");
/// assert_eq!(codes[&'b'], "11");
/// ```
#[debug_ensures(ret.len() == tree.map_or(0, |tree| tree.leaf_count()))]
pub fn extract_codes<S: Ord + Clone>(tree: Option<&HuffmanTree<S>>) -> CodeMap<S> {
    let mut codes = CodeMap::new();
    let Some(tree) = tree else {
        return codes;
    };

    if let HuffmanNode::Leaf { symbol, .. } = tree.root() {
        codes.insert(symbol.clone(), SINGLE_SYMBOL_CODE.to_string());
        return codes;
    }

    let mut stack = vec![(tree.root(), String::new())];
    while let Some((node, path)) = stack.pop() {
        match node {
            HuffmanNode::Leaf { symbol, .. } => {
                codes.insert(symbol.clone(), path);
            }
            HuffmanNode::Internal { left, right, .. } => {
                let mut right_path = path.clone();
                right_path.push('1');
                stack.push((right, right_path));

                let mut left_path = path;
                left_path.push('0');
                stack.push((left, left_path));
            }
        }
    }
    codes
}

impl<S: Ord + Clone> HuffmanTree<S> {
    /// Shorthand for [`extract_codes`] on this tree.
    pub fn codes(&self) -> CodeMap<S> {
        extract_codes(Some(self))
    }
}

/// Total number of bits needed to write the counted input with `codes`.
///
/// Symbols missing from `codes` contribute nothing.
pub fn encoded_bit_length<S: Ord>(
    frequencies: &FrequencyMap<S>,
    codes: &CodeMap<S>,
) -> Frequency {
    frequencies
        .iter()
        .filter_map(|(symbol, &count)| {
            codes
                .get(symbol)
                .map(|code| count * code.len() as Frequency)
        })
        .sum()
}

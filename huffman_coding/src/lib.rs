// huffman_coding/src/lib.rs

//! Huffman Coding Library
//!
//! This library counts symbol frequencies, builds a Huffman tree from them
//! and derives a prefix-free bit code for every symbol.

pub mod codes;
pub mod frequency;
pub mod tree;

pub use codes::{encoded_bit_length, extract_codes, CodeMap};
pub use frequency::{count_frequencies, total_count, Frequency, FrequencyMap};
pub use tree::{build_tree, HuffmanNode, HuffmanTree};

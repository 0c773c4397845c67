// huffman_coding/src/frequency.rs

use std::collections::BTreeMap;

/// Occurrence count of a single symbol.
pub type Frequency = u64;

/// Mapping from symbol to the number of times it occurs in the input.
///
/// Ordered by symbol so that iteration (and therefore tree construction)
/// is deterministic.
pub type FrequencyMap<S = char> = BTreeMap<S, Frequency>;

/// Counts the occurrences of every distinct symbol in `symbols`.
///
/// # Arguments
///
/// * `symbols` - Any finite sequence of symbols, possibly empty.
///
/// # Returns
///
/// * `FrequencyMap<S>` - One entry per distinct symbol, each with a count of at least 1.
///
/// # Examples
///
/// ```
/// use huffman_coding::count_frequencies;
///
/// let frequencies = count_frequencies("abbccc".chars());
/// assert_eq!(frequencies[&'a'], 1);
/// assert_eq!(frequencies[&'c'], 3);
/// ```
pub fn count_frequencies<S, I>(symbols: I) -> FrequencyMap<S>
where
    S: Ord,
    I: IntoIterator<Item = S>,
{
    let mut frequencies = FrequencyMap::new();
    for symbol in symbols {
        *frequencies.entry(symbol).or_insert(0) += 1;
    }
    frequencies
}

/// Sum of all counts in `frequencies`, i.e. the length of the counted input.
pub fn total_count<S>(frequencies: &FrequencyMap<S>) -> Frequency {
    frequencies.values().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_count_empty() {
        let frequencies = count_frequencies("".chars());
        assert!(frequencies.is_empty());
        assert_eq!(total_count(&frequencies), 0);
    }

    #[test]
    fn test_count_single_symbol() {
        let frequencies = count_frequencies("aaaa".chars());
        assert_eq!(frequencies.len(), 1);
        assert_eq!(frequencies[&'a'], 4);
    }

    #[test]
    fn test_count_mixed() {
        let frequencies = count_frequencies("abbccc".chars());
        let expected: FrequencyMap = [('a', 1), ('b', 2), ('c', 3)].into_iter().collect();
        assert_eq!(frequencies, expected);
    }

    #[test]
    fn test_count_bytes() {
        let frequencies = count_frequencies(b"\x00\xFF\x00".iter().copied());
        assert_eq!(frequencies[&0x00u8], 2);
        assert_eq!(frequencies[&0xFFu8], 1);
    }

    #[test]
    fn test_count_multibyte_chars() {
        // Counted per char, not per UTF-8 byte
        let frequencies = count_frequencies("héé".chars());
        assert_eq!(frequencies[&'é'], 2);
        assert_eq!(total_count(&frequencies), 3);
    }

    proptest! {
        #[test]
        fn test_counts_sum_to_length(input in proptest::collection::vec(any::<u8>(), 0usize..=4096)) {
            let frequencies = count_frequencies(input.iter().copied());
            prop_assert_eq!(total_count(&frequencies), input.len() as u64);
            prop_assert!(frequencies.values().all(|&count| count >= 1));
            for symbol in &input {
                prop_assert!(frequencies.contains_key(symbol));
            }
        }
    }
}

// Candidate stem discovery from lexicographically adjacent words.
//
// Words sharing a long prefix sit next to each other once sorted, so comparing
// each word with its successor approximates an all-pairs comparison in linear
// time. A shared prefix hidden behind an intervening word with a longer shared
// prefix is missed; that approximation is intended.

use std::collections::BTreeSet;

use crate::vocabulary::Vocabulary;

/// Default minimum protostem length, in characters.
pub const DEFAULT_MIN_STEM_LENGTH: usize = 3;

/// Collect the longest common prefix of every adjacent word pair whose length
/// is at least `min_stem_length` characters.
pub fn find_protostems(vocabulary: &Vocabulary, min_stem_length: usize) -> BTreeSet<String> {
    vocabulary
        .words()
        .windows(2)
        .filter_map(|pair| {
            let prefix = common_prefix(&pair[0], &pair[1]);
            (prefix.chars().count() >= min_stem_length).then(|| prefix.to_string())
        })
        .collect()
}

/// Longest common prefix of two strings, on character boundaries.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map(|((i, _), _)| i)
        // No mismatch: the shorter string is the prefix. Identical characters
        // have identical encodings, so byte lengths line up.
        .unwrap_or_else(|| a.len().min(b.len()));
    &a[..end]
}

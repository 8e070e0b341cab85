// Suffix continuations: for each protostem, the remainders of the vocabulary
// words it prefixes.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::vocabulary::Vocabulary;

/// Protostem → continuations in word order. The empty string is the null
/// continuation (the protostem is itself a word).
pub type Continuations = BTreeMap<String, Vec<String>>;

/// List the continuations of every protostem. Protostems that prefix no word
/// are left out.
///
/// Each protostem is independent; with the `parallel` feature they are
/// indexed on the rayon pool. The result is the same either way.
pub fn index_continuations(vocabulary: &Vocabulary, protostems: &BTreeSet<String>) -> Continuations {
    let words = vocabulary.words();

    #[cfg(feature = "parallel")]
    let entries: Vec<(String, Vec<String>)> = protostems
        .par_iter()
        .map(|stem| (stem.clone(), continuations_of(words, stem)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let entries: Vec<(String, Vec<String>)> = protostems
        .iter()
        .map(|stem| (stem.clone(), continuations_of(words, stem)))
        .collect();

    entries
        .into_iter()
        .filter(|(_, suffixes)| !suffixes.is_empty())
        .collect()
}

/// Continuations of one protostem over a sorted word list.
///
/// Words starting with `stem` form one contiguous run beginning at the first
/// word not less than `stem`.
pub fn continuations_of(sorted_words: &[String], stem: &str) -> Vec<String> {
    let start = sorted_words.partition_point(|w| w.as_str() < stem);
    sorted_words[start..]
        .iter()
        .take_while(|w| w.starts_with(stem))
        .map(|w| w[stem.len()..].to_string())
        .collect()
}

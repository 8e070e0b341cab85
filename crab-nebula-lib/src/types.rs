use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Sorted sequence of continuations observed for one protostem. Compared as a
/// sequence, so it doubles as the clustering key.
pub type Shape = Vec<String>;

/// Ordered, deduplicated set of stems.
pub type StemSet = BTreeSet<String>;

/// Shape → stems that produced exactly that shape.
pub type SignatureMap = BTreeMap<Shape, StemSet>;

/// Provisional grouping of protostems by shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clusters {
    /// Shapes shared by two or more protostems (accepted at the first pass).
    pub signatures: SignatureMap,
    /// Shapes produced by a single protostem, eligible for rescue.
    pub parasignatures: BTreeMap<Shape, String>,
}

/// Final shape → stem mapping. Every entry has a non-empty shape and at least
/// two stems.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signatures {
    entries: SignatureMap,
}

impl Signatures {
    /// Keep only the entries that qualify as signatures.
    pub fn from_map(mut entries: SignatureMap) -> Self {
        entries.retain(|shape, stems| !shape.is_empty() && stems.len() >= 2);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the stems for an exact suffix shape.
    pub fn get(&self, shape: &[String]) -> Option<&StemSet> {
        self.entries.get(shape)
    }

    /// Iterate in shape order.
    pub fn iter(&self) -> impl Iterator<Item = (&Shape, &StemSet)> {
        self.entries.iter()
    }

    /// Every stem that appears in some signature.
    pub fn known_stems(&self) -> BTreeSet<&str> {
        self.entries
            .values()
            .flat_map(|stems| stems.iter().map(String::as_str))
            .collect()
    }

    /// Every suffix that appears in some signature ("" for the null suffix).
    pub fn known_suffixes(&self) -> BTreeSet<&str> {
        self.entries
            .keys()
            .flat_map(|shape| shape.iter().map(String::as_str))
            .collect()
    }
}

/// One signature in structured form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRecord {
    /// Sorted suffixes; the null suffix is the empty string.
    pub suffixes: Vec<String>,
    /// Sorted stems.
    pub stems: Vec<String>,
    /// Corpus occurrences of every vocabulary word the signature spells.
    pub corpus_count: u64,
}

/// Counts observed at each stage of one induction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InductionStats {
    /// Running word tokens in the input.
    pub tokens: usize,
    /// Distinct word forms.
    pub word_types: usize,
    pub protostems: usize,
    /// Signatures accepted directly from clustering.
    pub baseline_signatures: usize,
    pub parasignatures: usize,
    /// Filtered shapes that survived the known-suffix rescue.
    pub tentative_signatures: usize,
    /// Single stems absorbed into a larger signature.
    pub folded_stems: usize,
    /// Single stems no signature could absorb.
    pub dropped_stems: usize,
    pub signatures: usize,
}

/// Structured report: stage counts plus every signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureReport {
    pub stats: InductionStats,
    pub signatures: Vec<SignatureRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(suffixes: &[&str]) -> Shape {
        suffixes.iter().map(|s| s.to_string()).collect()
    }

    fn stems(names: &[&str]) -> StemSet {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_map_drops_single_stems_and_empty_shapes() {
        let mut map = SignatureMap::new();
        map.insert(shape(&["", "s"]), stems(&["cat", "dog"]));
        map.insert(shape(&["ed", "ing"]), stems(&["walk"]));
        map.insert(shape(&[]), stems(&["a", "b"]));
        let sigs = Signatures::from_map(map);
        assert_eq!(sigs.len(), 1);
        assert!(sigs.get(&shape(&["", "s"])).is_some());
    }

    #[test]
    fn test_known_stems_and_suffixes() {
        let mut map = SignatureMap::new();
        map.insert(shape(&["", "s"]), stems(&["cat", "dog"]));
        map.insert(shape(&["ed", "s"]), stems(&["jump", "walk"]));
        let sigs = Signatures::from_map(map);
        assert_eq!(
            sigs.known_stems().into_iter().collect::<Vec<_>>(),
            vec!["cat", "dog", "jump", "walk"]
        );
        assert_eq!(
            sigs.known_suffixes().into_iter().collect::<Vec<_>>(),
            vec!["", "ed", "s"]
        );
    }

    #[test]
    fn test_record_serializes_null_suffix_as_empty_string() {
        let record = SignatureRecord {
            suffixes: shape(&["", "s"]),
            stems: shape(&["cat", "dog"]),
            corpus_count: 7,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"suffixes":["","s"],"stems":["cat","dog"],"corpus_count":7}"#
        );
    }
}

// Signature promotion: rescue single-stem clusters using suffixes that
// accepted signatures have already validated.
//
// Pass 1 is the clusterer's output. Pass 2 filters each parasignature's shape
// down to known suffixes and accumulates stems per filtered shape. Pass 3
// merges filtered shapes with two or more stems into the accepted mapping and
// folds the remaining single stems into the largest accepted signature that
// covers their shape. Every pass returns a new mapping.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::types::{Clusters, Shape, SignatureMap, Signatures};

/// Result of the single-stem folding step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Folding {
    pub signatures: SignatureMap,
    /// Stems absorbed into an accepted signature.
    pub folded: usize,
    /// Stems with no covering signature, left out of the output.
    pub dropped: Vec<String>,
}

/// Outcome of all three passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Promotion {
    pub signatures: Signatures,
    pub tentative: usize,
    pub folded: usize,
    pub dropped: Vec<String>,
}

/// Union of the suffixes of every accepted signature.
pub fn known_suffixes(signatures: &SignatureMap) -> BTreeSet<String> {
    signatures.keys().flatten().cloned().collect()
}

/// Filter each parasignature's shape to known suffixes. Filtered shapes with
/// at least two suffixes are kept, and parasignatures that reduce to the same
/// shape pool their stems.
pub fn tentative_signatures(
    parasignatures: &BTreeMap<Shape, String>,
    known: &BTreeSet<String>,
) -> SignatureMap {
    let mut tentative = SignatureMap::new();
    for (shape, stem) in parasignatures {
        // Filtering keeps the input order, so the result stays sorted.
        let filtered: Shape = shape.iter().filter(|s| known.contains(*s)).cloned().collect();
        if filtered.len() >= 2 {
            tentative.entry(filtered).or_default().insert(stem.clone());
        }
    }
    tentative
}

/// Merge every tentative signature with two or more stems into the accepted
/// signature of the same shape.
pub fn promote_tentative(accepted: &SignatureMap, tentative: &SignatureMap) -> SignatureMap {
    let mut merged = accepted.clone();
    for (shape, stems) in tentative.iter().filter(|(_, stems)| stems.len() >= 2) {
        merged
            .entry(shape.clone())
            .or_default()
            .extend(stems.iter().cloned());
    }
    merged
}

/// Fold each single-stem tentative signature into an accepted signature whose
/// suffixes cover its shape.
///
/// Candidates are tried by descending suffix count, ties by ascending suffix
/// sequence; the first cover wins. Stems nothing covers are dropped.
pub fn fold_single_stems(accepted: &SignatureMap, tentative: &SignatureMap) -> Folding {
    let mut order: Vec<&Shape> = accepted.keys().collect();
    order.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut absorbed: Vec<(Shape, String)> = Vec::new();
    let mut dropped = Vec::new();
    for (shape, stems) in tentative.iter().filter(|(_, stems)| stems.len() == 1) {
        let Some(stem) = stems.iter().next() else {
            continue;
        };
        match order.iter().find(|candidate| covers(candidate, shape)) {
            Some(target) => absorbed.push(((*target).clone(), stem.clone())),
            None => dropped.push(stem.clone()),
        }
    }

    let mut signatures = accepted.clone();
    let folded = absorbed.len();
    for (target, stem) in absorbed {
        signatures.entry(target).or_default().insert(stem);
    }

    Folding {
        signatures,
        folded,
        dropped,
    }
}

/// Run the rescue passes over the clusterer's output.
pub fn promote(clusters: &Clusters) -> Promotion {
    let known = known_suffixes(&clusters.signatures);
    let tentative = tentative_signatures(&clusters.parasignatures, &known);
    debug!(
        known_suffixes = known.len(),
        tentative = tentative.len(),
        "filtered parasignatures against known suffixes"
    );

    let promoted = promote_tentative(&clusters.signatures, &tentative);
    let folding = fold_single_stems(&promoted, &tentative);
    debug!(
        folded = folding.folded,
        dropped = folding.dropped.len(),
        "folded single-stem signatures"
    );

    Promotion {
        signatures: Signatures::from_map(folding.signatures),
        tentative: tentative.len(),
        folded: folding.folded,
        dropped: folding.dropped,
    }
}

/// True if every suffix of `shape` appears in the sorted `candidate`.
fn covers(candidate: &[String], shape: &[String]) -> bool {
    shape.iter().all(|s| candidate.binary_search(s).is_ok())
}

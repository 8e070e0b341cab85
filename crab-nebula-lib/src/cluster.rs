// Shape clustering: protostems with identical continuation sequences.

use std::collections::BTreeMap;

use crate::continuation::Continuations;
use crate::types::{Clusters, SignatureMap};

/// Group protostems by the sorted form of their continuation list, then split
/// the groups into signatures (two or more stems) and parasignatures (one).
pub fn cluster_by_shape(continuations: &Continuations) -> Clusters {
    let mut groups = SignatureMap::new();
    for (stem, suffixes) in continuations {
        let mut shape = suffixes.clone();
        shape.sort();
        groups.entry(shape).or_default().insert(stem.clone());
    }
    Clusters::partition(groups)
}

impl Clusters {
    /// Split shape groups by stem count. Empty groups are discarded.
    pub fn partition(groups: SignatureMap) -> Self {
        let mut signatures = SignatureMap::new();
        let mut parasignatures = BTreeMap::new();
        for (shape, stems) in groups {
            match stems.len() {
                0 => {}
                1 => {
                    if let Some(stem) = stems.into_iter().next() {
                        parasignatures.insert(shape, stem);
                    }
                }
                _ => {
                    signatures.insert(shape, stems);
                }
            }
        }
        Self {
            signatures,
            parasignatures,
        }
    }
}

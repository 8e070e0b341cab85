// Induction driver: vocabulary → protostems → continuations → clusters →
// signatures.

use tracing::{debug, info};

use crate::cluster::cluster_by_shape;
use crate::config::InductionConfig;
use crate::continuation::index_continuations;
use crate::promotion::promote;
use crate::protostem::find_protostems;
use crate::types::{InductionStats, Signatures};
use crate::vocabulary::Vocabulary;

/// Signatures found in one vocabulary, with stage counts.
#[derive(Debug, Clone, Default)]
pub struct Induction {
    pub signatures: Signatures,
    pub stats: InductionStats,
}

/// Run the full induction over a vocabulary.
///
/// Degenerate input (empty vocabulary, no shared prefixes) yields an empty
/// result, never an error.
pub fn induce_signatures(vocabulary: &Vocabulary, config: &InductionConfig) -> Induction {
    let protostems = find_protostems(vocabulary, config.min_stem_length);
    debug!(
        words = vocabulary.len(),
        protostems = protostems.len(),
        min_stem_length = config.min_stem_length,
        "found protostems"
    );

    let continuations = index_continuations(vocabulary, &protostems);
    let clusters = cluster_by_shape(&continuations);
    debug!(
        signatures = clusters.signatures.len(),
        parasignatures = clusters.parasignatures.len(),
        "clustered protostems by shape"
    );

    let promotion = promote(&clusters);

    let stats = InductionStats {
        tokens: vocabulary.token_count(),
        word_types: vocabulary.len(),
        protostems: protostems.len(),
        baseline_signatures: clusters.signatures.len(),
        parasignatures: clusters.parasignatures.len(),
        tentative_signatures: promotion.tentative,
        folded_stems: promotion.folded,
        dropped_stems: promotion.dropped.len(),
        signatures: promotion.signatures.len(),
    };
    info!(
        signatures = stats.signatures,
        stems = promotion.signatures.known_stems().len(),
        "induced signatures"
    );

    Induction {
        signatures: promotion.signatures,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(suffixes: &[&str]) -> Vec<String> {
        suffixes.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_walk_talk() {
        let vocab = Vocabulary::from_text("walk walks walked talk talks talked");
        let induction = induce_signatures(&vocab, &InductionConfig::default());
        assert_eq!(induction.signatures.len(), 1);
        let stems = induction.signatures.get(&shape(&["", "ed", "s"])).unwrap();
        assert_eq!(stems.iter().collect::<Vec<_>>(), vec!["talk", "walk"]);
        assert_eq!(induction.stats.tokens, 6);
        assert_eq!(induction.stats.protostems, 2);
        assert_eq!(induction.stats.baseline_signatures, 1);
    }

    #[test]
    fn test_empty_vocabulary() {
        let induction = induce_signatures(&Vocabulary::default(), &InductionConfig::default());
        assert!(induction.signatures.is_empty());
        assert_eq!(induction.stats, InductionStats::default());
    }

    #[test]
    fn test_no_shared_prefixes() {
        let vocab = Vocabulary::from_text("apple banana cherry");
        let induction = induce_signatures(&vocab, &InductionConfig::default());
        assert!(induction.signatures.is_empty());
        assert_eq!(induction.stats.word_types, 3);
    }

    #[test]
    fn test_longer_min_length_suppresses_stems() {
        let vocab = Vocabulary::from_text("walk walks walked talk talks talked");
        let config = InductionConfig { min_stem_length: 5 };
        assert!(induce_signatures(&vocab, &config).signatures.is_empty());
    }
}

// Output formatting for induced signatures.

use crate::config::ReportConfig;
use crate::induction::Induction;
use crate::types::*;
use crate::vocabulary::Vocabulary;

/// Text-report stand-in for the empty suffix.
pub const NULL_SUFFIX: &str = "NULL";

/// Render signatures as numbered text blocks, in shape order.
///
/// Format (width 80):
///   `====...` rule
///   `Signature #1`
///   `----...` rule
///   `Stems: talk, walk` (wrapped)
///   `Suffixes: NULL, ed, s` (wrapped)
///   `====...` rule, then a blank line
pub fn serialize_signatures(signatures: &Signatures, config: &ReportConfig) -> String {
    let heavy = "=".repeat(config.width);
    let light = "-".repeat(config.width);
    let mut output = String::new();

    for (num, (shape, stems)) in signatures.iter().enumerate() {
        let stem_line = format!(
            "Stems: {}",
            stems.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
        );
        let suffix_line = format!(
            "Suffixes: {}",
            shape
                .iter()
                .map(|s| display_suffix(s))
                .collect::<Vec<_>>()
                .join(", ")
        );

        output.push_str(&heavy);
        output.push('\n');
        output.push_str(&format!("Signature #{}\n", num + 1));
        output.push_str(&light);
        output.push('\n');
        output.push_str(&wrap(&stem_line, config.width));
        output.push('\n');
        output.push_str(&wrap(&suffix_line, config.width));
        output.push('\n');
        output.push_str(&heavy);
        output.push_str("\n\n");
    }

    output
}

/// Suffix as shown in the text report.
pub fn display_suffix(suffix: &str) -> &str {
    if suffix.is_empty() {
        NULL_SUFFIX
    } else {
        suffix
    }
}

/// Structured form of every signature, in shape order.
pub fn to_records(signatures: &Signatures, vocabulary: &Vocabulary) -> Vec<SignatureRecord> {
    signatures
        .iter()
        .map(|(shape, stems)| SignatureRecord {
            suffixes: shape.clone(),
            stems: stems.iter().cloned().collect(),
            corpus_count: corpus_count(shape, stems, vocabulary),
        })
        .collect()
}

/// Stage counts plus records, ready for JSON.
pub fn to_report(induction: &Induction, vocabulary: &Vocabulary) -> SignatureReport {
    SignatureReport {
        stats: induction.stats,
        signatures: to_records(&induction.signatures, vocabulary),
    }
}

/// Summed counts of the stem + suffix words. Folded stems may spell words the
/// corpus never had; those count 0.
fn corpus_count(shape: &[String], stems: &StemSet, vocabulary: &Vocabulary) -> u64 {
    stems
        .iter()
        .flat_map(|stem| shape.iter().map(move |suffix| format!("{stem}{suffix}")))
        .map(|word| vocabulary.count(&word))
        .sum()
}

fn wrap(line: &str, width: usize) -> String {
    textwrap::wrap(line, width).join("\n")
}

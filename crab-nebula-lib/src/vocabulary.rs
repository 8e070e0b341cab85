// Tokenization and word-form counting.

use rustc_hash::FxHashMap;

/// Distinct, lowercased word forms with their corpus counts.
///
/// Words are kept in lexicographic (code point) order, which the protostem
/// and continuation stages rely on.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    counts: FxHashMap<String, u64>,
    words: Vec<String>,
    tokens: usize,
}

impl Vocabulary {
    /// Tokenize raw text and count every word form.
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(tokenize(text))
    }

    /// Count already-tokenized words. Empty tokens are ignored; tokens are
    /// taken as given (no case folding).
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: FxHashMap<String, u64> = FxHashMap::default();
        let mut total = 0;
        for token in tokens {
            let token = token.into();
            if token.is_empty() {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
            total += 1;
        }

        let mut words: Vec<String> = counts.keys().cloned().collect();
        words.sort_unstable();

        Self {
            counts,
            words,
            tokens: total,
        }
    }

    /// Distinct words in sorted order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct word forms.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// How often a word form occurred (0 if never seen).
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of running tokens counted.
    pub fn token_count(&self) -> usize {
        self.tokens
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

/// Split text into maximal runs of word characters, lowercased.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

use std::collections::{HashMap, HashSet};

/// Words never counted: common conjunctions, prepositions and pronouns, the
/// bare tokens `-` and `&`, and every single letter.
pub const STOP_WORDS: &[&str] = &[
    "and", "to", "the", "of", "in", "with", "you", "on", "that", "are", "will", "is", "your",
    "for", "we", "from", "an", "be", "have", "or", "just", "can", "also", "how", "at", "as", "do",
    "other", "should", "what", "us", "this", "it", "if", "get", "-", "&", "a", "b", "c", "d", "e",
    "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x",
    "y", "z",
];

/// Run-global word counter. Keys are always lowercase and never stop words;
/// counts only ever grow.
#[derive(Debug)]
pub struct FrequencyAggregator {
    counts: HashMap<String, u64>,
    stop_words: HashSet<&'static str>,
}

impl FrequencyAggregator {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    pub fn ingest<I>(&mut self, tokens: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in tokens {
            let word = token.as_ref().to_lowercase();
            if self.stop_words.contains(word.as_str()) {
                continue;
            }
            *self.counts.entry(word).or_insert(0) += 1;
        }
    }

    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn counts(&self) -> &HashMap<String, u64> {
        &self.counts
    }
}

impl Default for FrequencyAggregator {
    fn default() -> Self {
        Self::new()
    }
}

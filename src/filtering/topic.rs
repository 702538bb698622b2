//! topic word filtering
use super::Filter;
use crate::nlp::{Stopwords, TokenMap, Word};

/// Penn Treebank tags a topic word can bear: nouns, personal pronouns and verbs.
pub const TOPIC_TAGS: [&str; 10] = [
    "NN", "NNP", "NNS", "NNPS", "PRP", "VB", "VBG", "VBD", "VBN", "VBP",
];

/// Keeps words that are not stopwords and whose `xpos` is in [TOPIC_TAGS].
///
/// Stopword membership is checked on the surface text, not on the lemma.
#[derive(Debug, Clone, Default)]
pub struct TopicFilter {
    stopwords: Stopwords,
}

impl TopicFilter {
    pub fn new(stopwords: Stopwords) -> Self {
        Self { stopwords }
    }

    /// Lemmas of the kept words, in token map order.
    pub fn topics(&self, tokens: &TokenMap) -> Vec<String> {
        tokens
            .iter()
            .filter(|(_, word)| self.detect(*word))
            .map(|(lemma, _)| lemma.to_string())
            .collect()
    }
}

impl Filter<&Word> for TopicFilter {
    fn detect(&self, word: &Word) -> bool {
        TOPIC_TAGS.contains(&word.xpos.as_str()) && !self.stopwords.contains(&word.text)
    }
}

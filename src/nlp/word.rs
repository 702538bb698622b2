//! Tagger output.
use serde::{Deserialize, Serialize};

/// A tagged word.
///
/// `id` is the 1-based position of the word in its sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: usize,
    pub text: String,
    pub lemma: String,
    pub upos: String,
    pub xpos: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    pub words: Vec<Word>,
}

impl Sentence {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }
}

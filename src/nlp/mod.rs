/*! Tokenization and tagging.

Tokenization is done by a [Tokenize] implementor, that returns [Sentence]s made of [Word]s.
Each word carries at least a lemma, a part-of-speech tag and its surface text.

[RuleTagger] is a self-contained implementation using unicode segmentation
and Penn Treebank tags inferred from closed-class lexicons and suffixes.
Other taggers can be plugged in by implementing [Tokenize].
!*/
mod stopwords;
mod tagger;
mod tokens;
mod word;

pub use stopwords::Stopwords;
pub use tagger::RuleTagger;
pub use tokens::TokenMap;
pub use word::{Sentence, Word};

use crate::error::Error;

/// Tokenizer/tagger contract.
pub trait Tokenize {
    /// Split `text` in sentences of tagged words.
    fn analyze(&self, text: &str) -> Result<Vec<Sentence>, Error>;
}

impl<T: Tokenize + ?Sized> Tokenize for &T {
    fn analyze(&self, text: &str) -> Result<Vec<Sentence>, Error> {
        (**self).analyze(text)
    }
}

impl<T: Tokenize + ?Sized> Tokenize for Box<T> {
    fn analyze(&self, text: &str) -> Result<Vec<Sentence>, Error> {
        (**self).analyze(text)
    }
}

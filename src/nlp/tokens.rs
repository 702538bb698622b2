//! Lemma-keyed token maps.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Sentence, Word};

/// Mapping from lemma to the attributes of the word that bears it.
///
/// When a lemma occurs more than once, the last occurrence wins,
/// but the key stays at the position of its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenMap(IndexMap<String, Word>);

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: Word) {
        self.0.insert(word.lemma.clone(), word);
    }

    pub fn get(&self, lemma: &str) -> Option<&Word> {
        self.0.get(lemma)
    }

    /// Lemma/word pairs, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Word)> {
        self.0.iter().map(|(lemma, word)| (lemma.as_str(), word))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Word> for TokenMap {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut map = TokenMap::new();
        for word in iter {
            map.insert(word);
        }
        map
    }
}

impl From<Vec<Sentence>> for TokenMap {
    fn from(sentences: Vec<Sentence>) -> Self {
        sentences.into_iter().flat_map(|s| s.words).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(id: usize, text: &str, lemma: &str, xpos: &str) -> Word {
        Word {
            id,
            text: text.to_string(),
            lemma: lemma.to_string(),
            upos: "X".to_string(),
            xpos: xpos.to_string(),
        }
    }

    #[test]
    fn later_lemma_overwrites() {
        let sentences = vec![
            Sentence::new(vec![word(1, "sent", "send", "VBD"), word(2, "money", "money", "NN")]),
            Sentence::new(vec![word(1, "Send", "send", "VB")]),
        ];
        let map = TokenMap::from(sentences);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("send").unwrap().text, "Send");

        // first-seen position is kept
        let lemmas: Vec<&str> = map.iter().map(|(l, _)| l).collect();
        assert_eq!(lemmas, vec!["send", "money"]);
    }

    #[test]
    fn serializes_as_object() {
        let map: TokenMap = vec![word(1, "bank", "bank", "NN")].into_iter().collect();
        let v = serde_json::to_value(&map).unwrap();
        assert_eq!(v["bank"]["xpos"], "NN");
        assert_eq!(v["bank"]["text"], "bank");
    }
}

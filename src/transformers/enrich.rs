//! Token and topic annotation.
use log::trace;
use serde_json::Value;

use super::Annotate;
use crate::dialog::{insert_at, Row};
use crate::error::Error;
use crate::filtering::TopicFilter;
use crate::nlp::{TokenMap, Tokenize};

/// Positions used when enriching a row.
///
/// `tokens` is applied before `topics`, so `topics` is a position in the row
/// that already holds the token map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub text: usize,
    pub tokens: usize,
    pub topics: usize,
}

impl Layout {
    /// `[turn, agent, text, intent, semantic_slot]`
    pub const ANTISCAM: Layout = Layout {
        text: 2,
        tokens: 3,
        topics: 6,
    };

    /// `[index, text, turn, role, dialog_id]`
    pub const PERSUASION: Layout = Layout {
        text: 1,
        tokens: 2,
        topics: 3,
    };
}

/// Inserts a lemma-keyed token map and the derived topic words in turn rows.
pub struct Enricher<T> {
    tokenizer: T,
    filter: TopicFilter,
    layout: Layout,
}

impl<T: Tokenize> Enricher<T> {
    pub fn new(tokenizer: T, filter: TopicFilter, layout: Layout) -> Self {
        Self {
            tokenizer,
            filter,
            layout,
        }
    }

    /// Tokenize `text`, stripping surrounding quotes first.
    pub fn tokens(&self, text: &str) -> Result<TokenMap, Error> {
        let text = text.trim_matches('"');
        Ok(TokenMap::from(self.tokenizer.analyze(text)?))
    }

    pub fn topics(&self, tokens: &TokenMap) -> Vec<String> {
        self.filter.topics(tokens)
    }
}

impl<T: Tokenize> Annotate for Enricher<T> {
    fn annotate(&self, row: &mut Row) -> Result<(), Error> {
        let text = match row.get(self.layout.text) {
            Some(Value::String(text)) => text,
            Some(other) => {
                return Err(Error::Custom(format!(
                    "expected text at position {}, got {}",
                    self.layout.text, other
                )))
            }
            None => {
                return Err(Error::Custom(format!(
                    "no text at position {} in a row of {} fields",
                    self.layout.text,
                    row.len()
                )))
            }
        };

        let tokens = self.tokens(text)?;
        let topics = self.topics(&tokens);
        trace!("{} tokens, topics: {:?}", tokens.len(), topics);

        insert_at(row, self.layout.tokens, serde_json::to_value(&tokens)?);
        insert_at(row, self.layout.topics, Value::from(topics));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::nlp::{RuleTagger, Sentence};

    struct FailingTokenizer;
    impl Tokenize for FailingTokenizer {
        fn analyze(&self, text: &str) -> Result<Vec<Sentence>, Error> {
            Err(Error::Tokenizer(format!("cannot analyze {:?}", text)))
        }
    }

    #[test]
    fn antiscam_row() {
        let enricher = Enricher::new(RuleTagger, TopicFilter::default(), Layout::ANTISCAM);
        let mut row = vec![
            json!(0),
            json!("Attacker"),
            json!("Send the gift cards"),
            json!("elicitation"),
            json!("pay"),
        ];
        enricher.annotate(&mut row).unwrap();

        assert_eq!(row.len(), 7);
        assert_eq!(row[2], json!("Send the gift cards"));
        assert_eq!(row[3]["card"]["xpos"], "NNS");
        assert_eq!(row[4], json!("elicitation"));
        assert_eq!(row[5], json!("pay"));
        assert_eq!(row[6], json!(["send", "gift", "card"]));
    }

    #[test]
    fn persuasion_row() {
        let enricher = Enricher::new(RuleTagger, TopicFilter::default(), Layout::PERSUASION);
        let mut row = vec![
            json!("0"),
            json!("\"Have you heard of Save the Children?\""),
            json!("0"),
            json!("0"),
            json!("20180904-045349_715_live"),
        ];
        enricher.annotate(&mut row).unwrap();

        assert_eq!(row.len(), 7);
        assert_eq!(row[1], json!("\"Have you heard of Save the Children?\""));
        assert!(row[2].get("Children").is_some());
        assert_eq!(row[3], json!(["hear", "Save", "Children"]));
        assert_eq!(row[6], json!("20180904-045349_715_live"));
    }

    #[test]
    fn short_row_appends() {
        let enricher = Enricher::new(RuleTagger, TopicFilter::default(), Layout::ANTISCAM);
        let mut row = vec![json!(0), json!("Attacker"), json!("hello")];
        enricher.annotate(&mut row).unwrap();
        assert_eq!(row.len(), 5);
        assert!(row[3].is_object());
        assert_eq!(row[4], json!([]));
    }

    #[test]
    fn missing_text() {
        let enricher = Enricher::new(RuleTagger, TopicFilter::default(), Layout::ANTISCAM);
        let mut row = vec![json!(0), json!("Attacker")];
        assert!(matches!(
            enricher.annotate(&mut row),
            Err(Error::Custom(_))
        ));
    }

    #[test]
    fn tokenizer_failure_propagates() {
        let enricher = Enricher::new(
            FailingTokenizer,
            TopicFilter::default(),
            Layout::PERSUASION,
        );
        let mut row = vec![json!("0"), json!("hello")];
        assert!(matches!(
            enricher.annotate(&mut row),
            Err(Error::Tokenizer(_))
        ));
        // row is left untouched
        assert_eq!(row.len(), 2);
    }
}

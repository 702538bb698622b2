/*! Filtering utilities

Filters implement [Filter], a pure detection over a borrowed item.

[TopicFilter] keeps content words of a [crate::nlp::TokenMap]:
words whose surface text is not a stopword, and whose part-of-speech tag is in [TOPIC_TAGS].
! */
mod filter;
mod topic;

pub use filter::Filter;
pub use topic::{TopicFilter, TOPIC_TAGS};

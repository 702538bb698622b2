/*! Turn transformers.

Enrich positional turn rows with annotations computed from their text.

!*/

mod annotate;
mod enrich;

pub use annotate::Annotate;
pub use enrich::{Enricher, Layout};

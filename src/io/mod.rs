/*!
# IO utilities

Dialog saving. Loading of source corpora lives in [crate::sources].
!*/
pub mod writer;

pub use writer::{JsonWriter, TextWriter, WriterTrait};

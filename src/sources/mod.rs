/*! Corpus sources.

Each source reads a raw corpus file, groups its lines or rows into per-dialog buckets,
and normalizes each turn into a positional [crate::dialog::Row].

Source files are encoded in ISO-8859-1 (see [latin1]).
!*/
pub mod antiscam;
pub mod latin1;
pub mod persuasion;

pub use antiscam::{AntiScamReader, RawDialog};
pub use persuasion::{PersuasionCorpus, PERSUASION_COLUMNS};

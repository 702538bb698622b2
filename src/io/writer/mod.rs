/*!
# Per-dialog file writing

Each dialog is written in its own file, named after a random 8 character stem.

- [JsonWriter] writes turns of a [crate::dialog::Dialog] as an indented json array (`.json`),
- [TextWriter] writes lines of a [crate::sources::RawDialog], separated by blank lines (`.txt`).

Files are created with create-new semantics: existing files are never overwritten,
and a new stem is drawn if one is already taken.
!*/
mod files;
mod jsonwriter;
mod textwriter;
mod writertrait;

pub use files::{random_stem, UniqueFiles, STEM_LEN};
pub use jsonwriter::JsonWriter;
pub use textwriter::TextWriter;
pub use writertrait::WriterTrait;

//! Annotate trait
use crate::dialog::Row;
use crate::error::Error;

/// Annotations add values to a turn row, at positions they know of.
pub trait Annotate {
    fn annotate(&self, row: &mut Row) -> Result<(), Error>;
}

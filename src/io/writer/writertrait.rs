use std::path::{Path, PathBuf};

use crate::error::Error;

/// One file per item writers.
pub trait WriterTrait {
    type Item;

    /// Create a new writer. Files will be written at the root of `dst`, that has to exist.
    fn new(dst: &Path) -> Result<Self, Error>
    where
        Self: Sized;

    /// Write a single item in a new file, returning its path.
    fn write_single(&mut self, val: &Self::Item) -> Result<PathBuf, Error>;

    /// Write each item in its own file.
    fn write(&mut self, vals: &[Self::Item]) -> Result<Vec<PathBuf>, Error> {
        vals.iter().map(|val| self.write_single(val)).collect()
    }
}

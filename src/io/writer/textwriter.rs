//! Raw transcript writer.
use std::{
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use super::{UniqueFiles, WriterTrait};
use crate::{error::Error, sources::RawDialog};

/// Writes the lines of a raw dialog, each followed by a blank line.
pub struct TextWriter {
    files: UniqueFiles,
}

impl WriterTrait for TextWriter {
    type Item = RawDialog;

    fn new(dst: &Path) -> Result<Self, Error> {
        Ok(Self {
            files: UniqueFiles::new(dst)?,
        })
    }

    fn write_single(&mut self, dialog: &RawDialog) -> Result<PathBuf, Error> {
        let (path, file) = self.files.create("txt")?;
        let mut writer = BufWriter::new(file);
        for line in dialog.lines() {
            write!(writer, "{}\n\n", line)?;
        }
        writer.flush()?;
        Ok(path)
    }
}

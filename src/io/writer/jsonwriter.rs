//! Json dialog writer.
use std::{
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use super::{UniqueFiles, WriterTrait};
use crate::{dialog::Dialog, error::Error};

/// Writes each dialog as a 2-space indented json array of turns.
pub struct JsonWriter {
    files: UniqueFiles,
}

impl WriterTrait for JsonWriter {
    type Item = Dialog;

    fn new(dst: &Path) -> Result<Self, Error> {
        Ok(Self {
            files: UniqueFiles::new(dst)?,
        })
    }

    fn write_single(&mut self, dialog: &Dialog) -> Result<PathBuf, Error> {
        let (path, file) = self.files.create("json")?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, dialog.turns())?;
        writer.flush()?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use serde_json::json;

    use super::*;
    use crate::dialog::Turn;

    fn dialog() -> Dialog {
        Dialog::assemble(
            "0".to_string(),
            &["turn", "agent", "text"],
            vec![
                vec![json!(0), json!("Attacker"), json!("hello")],
                vec![json!(1), json!("Victim"), json!("who is this?")],
            ],
        )
    }

    #[test]
    fn write_and_read_back() {
        let dst = tempfile::tempdir().unwrap();
        let mut wr = JsonWriter::new(dst.path()).unwrap();
        let d = dialog();
        let path = wr.write_single(&d).unwrap();

        let turns: Vec<Turn> = serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(turns, d.turns());
        let fields: Vec<&str> = turns[0].fields().collect();
        assert_eq!(fields, vec!["turn", "agent", "text"]);
    }

    #[test]
    fn indentation() {
        let dst = tempfile::tempdir().unwrap();
        let mut wr = JsonWriter::new(dst.path()).unwrap();
        let path = wr.write_single(&dialog()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("[\n  {\n    \"turn\": 0,"));
    }

    #[test]
    fn same_dialog_twice() {
        let dst = tempfile::tempdir().unwrap();
        let mut wr = JsonWriter::new(dst.path()).unwrap();
        let d = dialog();
        let paths = wr.write(&[d.clone(), d]).unwrap();
        assert_eq!(paths.len(), 2);
        assert_ne!(paths[0], paths[1]);
        assert_eq!(std::fs::read_dir(dst.path()).unwrap().count(), 2);
    }
}

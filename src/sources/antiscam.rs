/*! Anti-scam transcript corpus.

The transcript is a latin-1 text file where dialogs are separated by blank lines.
Each line of a dialog is a turn, made of tab-separated fields:

```text
Attacker	Hello, this is the bank security department.	elicitation	greeting
Victim	Hi, what is it about?	question	none
<label>
```

The last line of each dialog is a label line, and is not a turn.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, warn};
use serde_json::Value;

use super::latin1::Lines;
use crate::dialog::Row;
use crate::error::Error;

/// Lines of a single dialog block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDialog {
    index: usize,
    turns: Vec<String>,
    label: Option<String>,
}

impl RawDialog {
    /// Builds a dialog from the buffered lines of a block.
    ///
    /// Blank lines are discarded and the last remaining line is the label.
    /// Returns [None] if the block only holds blank lines.
    fn from_block(index: usize, block: Vec<String>) -> Option<Self> {
        let mut turns: Vec<String> = block.into_iter().filter(|l| !l.is_empty()).collect();
        let label = turns.pop()?;
        Some(Self {
            index,
            turns,
            label: Some(label),
        })
    }

    pub fn new(index: usize, turns: Vec<String>, label: Option<String>) -> Self {
        Self {
            index,
            turns,
            label,
        }
    }

    /// Position of the dialog in the source file, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Raw turn lines, without the label line.
    pub fn turns(&self) -> &[String] {
        &self.turns
    }

    /// Get a reference to the raw dialog's label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Every line of the block, label included.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.turns
            .iter()
            .map(String::as_str)
            .chain(self.label.as_deref())
    }

    /// Normalized turns.
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        self.turns
            .iter()
            .enumerate()
            .map(|(index, line)| normalize(index, line))
    }
}

/// Split a turn line on tabs, dropping empty fields and trimming the others,
/// then prepend the turn index.
pub fn normalize(index: usize, line: &str) -> Row {
    std::iter::once(Value::from(index))
        .chain(
            line.split('\t')
                .filter(|field| !field.is_empty())
                .map(|field| Value::from(field.trim())),
        )
        .collect()
}

/// Iterator over the dialogs of an anti-scam transcript.
pub struct AntiScamReader<R> {
    lines: Lines<R>,
    buffer: Vec<String>,
    next_index: usize,
    done: bool,
}

impl AntiScamReader<BufReader<File>> {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        debug!("reading anti-scam transcript {:?}", path);
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> AntiScamReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            lines: Lines::new(inner),
            buffer: Vec::new(),
            next_index: 0,
            done: false,
        }
    }

    fn flush(&mut self) -> Option<RawDialog> {
        let block = std::mem::take(&mut self.buffer);
        let dialog = RawDialog::from_block(self.next_index, block)?;
        self.next_index += 1;
        Some(dialog)
    }
}

impl<R: BufRead> Iterator for AntiScamReader<R> {
    type Item = Result<RawDialog, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => return Some(Err(e)),
                None => break,
            };

            let line = line.trim();
            if line.is_empty() {
                if let Some(dialog) = self.flush() {
                    return Some(Ok(dialog));
                }
            } else {
                self.buffer.push(line.to_string());
            }
        }

        // end of file without a trailing blank line
        self.done = true;
        let dialog = self.flush()?;
        warn!(
            "flushing dialog {} that is not followed by a blank line",
            dialog.index()
        );
        Some(Ok(dialog))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use serde_json::json;

    use super::*;

    fn read(src: &str) -> Vec<RawDialog> {
        AntiScamReader::new(Cursor::new(src.as_bytes().to_vec()))
            .map(Result::unwrap)
            .collect()
    }

    #[test]
    fn normalize_line() {
        let row = normalize(3, "Attacker\t Please confirm your card \t\telicitation\tcard\n");
        assert_eq!(
            row,
            vec![
                json!(3),
                json!("Attacker"),
                json!("Please confirm your card"),
                json!("elicitation"),
                json!("card"),
            ]
        );
    }

    #[test]
    fn dialogs_between_blank_lines() {
        let src = "A\thello\tgreet\tnone\nB\thi\tgreet\tnone\nlabel0\n\nA\tbye\tclose\tnone\nlabel1\n\n";
        let dialogs = read(src);
        assert_eq!(dialogs.len(), 2);

        assert_eq!(dialogs[0].index(), 0);
        assert_eq!(dialogs[0].turns().len(), 2);
        assert_eq!(dialogs[0].label(), Some("label0"));

        assert_eq!(dialogs[1].index(), 1);
        assert_eq!(dialogs[1].turns(), &["A\tbye\tclose\tnone".to_string()]);
        assert_eq!(dialogs[1].label(), Some("label1"));
    }

    #[test]
    fn repeated_blank_lines() {
        let src = "\n\nA\thello\nlabel0\n\n\n\nA\tbye\nlabel1\n\n\n";
        let dialogs = read(src);
        assert_eq!(dialogs.len(), 2);
        assert_eq!(dialogs[1].index(), 1);
    }

    #[test]
    fn unterminated_last_dialog() {
        let src = "A\thello\nlabel0\n\nA\tbye\nlabel1";
        let dialogs = read(src);
        assert_eq!(dialogs.len(), 2);
        assert_eq!(dialogs[1].label(), Some("label1"));
    }

    #[test]
    fn empty_source() {
        assert!(read("").is_empty());
        assert!(read("\n\n  \n").is_empty());
    }

    #[test]
    fn rows_are_indexed() {
        let dialogs = read("A\thello\nB\thi\nlabel\n\n");
        let rows: Vec<Row> = dialogs[0].rows().collect();
        assert_eq!(rows[0][0], json!(0));
        assert_eq!(rows[1][0], json!(1));
        assert_eq!(rows[1][1], json!("B"));
    }

    #[test]
    fn raw_lines_keep_label() {
        let dialogs = read("A\thello\nlabel\n\n");
        let lines: Vec<&str> = dialogs[0].lines().collect();
        assert_eq!(lines, vec!["A\thello", "label"]);
    }
}

/*! Persuasion-for-good csv corpus.

Each row is a turn, with a fixed column layout:

```text
,Unit,Turn,B4,B2
0,Good morning. How are you doing today?,0,0,20180904-045349_715_live
1,Hi. I am doing good. How about you?,0,1,20180904-045349_715_live
```

That is `index, text, turn, role, dialog_id`. The header line is skipped,
and rows are grouped by dialog id.
!*/
use std::{io::Read, path::Path};

use indexmap::IndexMap;
use log::debug;
use serde_json::Value;

use super::latin1;
use crate::dialog::Row;
use crate::error::Error;

/// Number of columns a row must have.
pub const PERSUASION_COLUMNS: usize = 5;

/// Column holding the dialog identifier.
const DIALOG_ID: usize = 4;

/// Header line (after stripping).
const HEADER_LINE: &str = ",Unit,Turn,B4,B2";

/// Rows of the corpus, grouped by dialog id.
///
/// Dialogs are kept in first-seen order, and rows in source order within each dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersuasionCorpus {
    dialogs: IndexMap<String, Vec<Vec<String>>>,
}

impl PersuasionCorpus {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        debug!("reading persuasion csv {:?}", path);
        let bytes = std::fs::read(path)?;
        Self::parse(&latin1::decode(&bytes))
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::parse(&latin1::decode(&bytes))
    }

    /// Parse already decoded csv content, one row per line.
    ///
    /// Lines are stripped, and spaces following a delimiter are skipped.
    /// Other whitespace, quoted or not, is kept.
    /// Blank lines and the header line are skipped.
    ///
    /// Fails with [Error::MalformedRow] on rows that have fewer than [PERSUASION_COLUMNS] columns.
    pub fn parse(content: &str) -> Result<Self, Error> {
        let mut dialogs: IndexMap<String, Vec<Vec<String>>> = IndexMap::new();
        for (number, line) in latin1::split_lines(content).enumerate() {
            let line = line.trim();
            if line.is_empty() || line == HEADER_LINE {
                continue;
            }

            let fields = parse_line(line)?;
            if fields.len() < PERSUASION_COLUMNS {
                return Err(Error::MalformedRow {
                    line: number as u64 + 1,
                    expected: PERSUASION_COLUMNS,
                    found: fields.len(),
                });
            }

            dialogs
                .entry(fields[DIALOG_ID].clone())
                .or_default()
                .push(fields);
        }

        Ok(Self { dialogs })
    }

    /// Number of dialogs.
    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.dialogs.keys().map(String::as_str)
    }

    pub fn get(&self, id: &str) -> Option<&[Vec<String>]> {
        self.dialogs.get(id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Vec<String>])> {
        self.dialogs
            .iter()
            .map(|(id, rows)| (id.as_str(), rows.as_slice()))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum FieldState {
    Start,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Removes the spaces that directly follow a delimiter outside of quotes.
///
/// Only a quote opening a field starts a quoted field.
fn skip_initial_space(line: &str) -> String {
    use FieldState::*;
    let mut out = String::with_capacity(line.len());
    let mut state = Start;
    for c in line.chars() {
        state = match (state, c) {
            (Start, ' ') => continue,
            (Start, '"') | (QuoteInQuoted, '"') => Quoted,
            (Quoted, '"') => QuoteInQuoted,
            (Quoted, _) => Quoted,
            (_, ',') => Start,
            _ => Unquoted,
        };
        out.push(c);
    }
    out
}

/// Parse a single csv line.
fn parse_line(line: &str) -> Result<Vec<String>, Error> {
    let line = skip_initial_space(line);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(record) => Ok(record?.iter().map(String::from).collect()),
        None => Ok(Vec::new()),
    }
}

/// Turns csv fields into a positional row, leaving values untouched.
pub fn row(fields: &[String]) -> Row {
    fields.iter().map(|f| Value::from(f.as_str())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = ",Unit,Turn,B4,B2
0,Good morning. How are you doing today?,0,0,20180904-045349_715_live
1,Hi. I am doing good. How about you?,0,1,20180904-045349_715_live
0,Hello there,0,0,20180904-045350_716_live
2,\"Would you like to donate, even a little?\",1,0,20180904-045349_715_live
";

    #[test]
    fn grouping() {
        let corpus = PersuasionCorpus::parse(SRC).unwrap();
        assert_eq!(corpus.len(), 2);

        let ids: Vec<&str> = corpus.ids().collect();
        assert_eq!(
            ids,
            vec!["20180904-045349_715_live", "20180904-045350_716_live"]
        );

        let rows = corpus.get("20180904-045349_715_live").unwrap();
        let indices: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(indices, vec!["0", "1", "2"]);
        assert_eq!(rows[2][1], "Would you like to donate, even a little?");
    }

    #[test]
    fn leading_spaces_are_trimmed() {
        let corpus = PersuasionCorpus::parse("0, Hello,0, 1, abc\n").unwrap();
        let rows = corpus.get("abc").unwrap();
        assert_eq!(rows[0], vec!["0", "Hello", "0", "1", "abc"]);
    }

    #[test]
    fn inner_whitespace_is_kept() {
        let corpus =
            PersuasionCorpus::parse("0,\" Hello there \",0,0,abc\n1,Bye   ,0,1,abc  \n2, \" quoted\",0,0,abc\n")
                .unwrap();
        let rows = corpus.get("abc").unwrap();
        assert_eq!(rows[0][1], " Hello there ");
        assert_eq!(rows[1][1], "Bye   ");
        assert_eq!(rows[1][4], "abc");
        assert_eq!(rows[2][1], " quoted");
    }

    #[test]
    fn skip_spaces_after_delimiters() {
        assert_eq!(skip_initial_space("a,  b, \"c, d\""), "a,b,\"c, d\"");
        assert_eq!(skip_initial_space("a\"b, c"), "a\"b,c");
        assert_eq!(skip_initial_space("\"say \"\"hi\"\", x\", y"), "\"say \"\"hi\"\", x\",y");
    }

    #[test]
    fn carriage_returns() {
        let corpus = PersuasionCorpus::parse(",Unit,Turn,B4,B2\r\n0,hi,0,0,abc\r1,yo,0,1,abc\r\n").unwrap();
        assert_eq!(corpus.get("abc").unwrap().len(), 2);
    }

    #[test]
    fn short_row() {
        let res = PersuasionCorpus::parse(",Unit,Turn,B4,B2\n0,hello,0\n");
        match res {
            Err(Error::MalformedRow {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(expected, 5);
                assert_eq!(found, 3);
            }
            other => panic!("expected a malformed row error, got {:?}", other),
        }
    }

    #[test]
    fn empty() {
        assert!(PersuasionCorpus::parse("").unwrap().is_empty());
        assert!(PersuasionCorpus::parse(",Unit,Turn,B4,B2\n")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn latin1_reader() {
        let src = b"0,caf\xe9,0,0,abc\n".to_vec();
        let corpus = PersuasionCorpus::from_reader(&src[..]).unwrap();
        assert_eq!(corpus.get("abc").unwrap()[0][1], "café");
    }

    #[test]
    fn row_values() {
        let fields = vec!["0".to_string(), "hi".to_string()];
        assert_eq!(row(&fields), vec![Value::from("0"), Value::from("hi")]);
    }
}

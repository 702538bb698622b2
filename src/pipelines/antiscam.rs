//! Anti-scam transcript pipeline
//!
//! # Processing
//! 1. The transcript is read dialog by dialog (blank-line separated blocks).
//! 1. Each turn line is split in fields, and prefixed by its index in the dialog.
//! 1. Turn text is tokenized, giving a lemma-keyed token map and a list of topic words.
//! 1. Rows are zipped with [ANTISCAM_HEADER].
//! 1. The raw block and the enhanced dialog are written in their own files.
//!
//! Each dialog is fully processed and written before reading the next one.
use std::path::PathBuf;

use log::{debug, info};

use super::pipeline::{Outputs, Pipeline, Summary};
use crate::dialog::{Dialog, ANTISCAM_HEADER};
use crate::error::Error;
use crate::filtering::TopicFilter;
use crate::io::{JsonWriter, TextWriter, WriterTrait};
use crate::nlp::{Stopwords, Tokenize};
use crate::sources::{AntiScamReader, RawDialog};
use crate::transformers::{Annotate, Enricher, Layout};

pub struct AntiScam<T> {
    src: PathBuf,
    dst: PathBuf,
    enricher: Enricher<T>,
    outputs: Outputs,
}

impl<T: Tokenize> AntiScam<T> {
    pub fn new(src: PathBuf, dst: PathBuf, tokenizer: T, stopwords: Stopwords) -> Self {
        Self {
            src,
            dst,
            enricher: Enricher::new(tokenizer, TopicFilter::new(stopwords), Layout::ANTISCAM),
            outputs: Outputs::default(),
        }
    }

    pub fn with_outputs(mut self, outputs: Outputs) -> Self {
        self.outputs = outputs;
        self
    }

    /// Normalize and enrich each turn of a raw dialog.
    pub fn process(&self, raw: &RawDialog) -> Result<Dialog, Error> {
        let rows = raw
            .rows()
            .map(|mut row| {
                debug!("dialog {}: enriching turn {}", raw.index(), row[0]);
                self.enricher.annotate(&mut row)?;
                Ok(row)
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Dialog::assemble(
            raw.index().to_string(),
            &ANTISCAM_HEADER,
            rows,
        ))
    }
}

impl<T: Tokenize> Pipeline<Summary> for AntiScam<T> {
    fn run(&self) -> Result<Summary, Error> {
        let reader = AntiScamReader::from_path(&self.src)?;

        let mut raw_writer = if self.outputs.raw {
            Some(TextWriter::new(&Outputs::prepare(
                &self.dst,
                Outputs::RAW_DIR,
            )?)?)
        } else {
            None
        };
        let mut enhanced_writer = if self.outputs.enhanced {
            Some(JsonWriter::new(&Outputs::prepare(
                &self.dst,
                Outputs::ENHANCED_DIR,
            )?)?)
        } else {
            None
        };

        let mut summary = Summary::default();
        for raw in reader {
            let raw = raw?;
            debug!("CONV{}", raw.index());
            let dialog = self.process(&raw)?;

            if let Some(w) = &mut raw_writer {
                summary.raw_files.push(w.write_single(&raw)?);
            }
            if let Some(w) = &mut enhanced_writer {
                summary.enhanced_files.push(w.write_single(&dialog)?);
            }

            summary.dialogs += 1;
            summary.turns += dialog.len();
        }

        info!(
            "anti-scam: {} dialogs, {} turns processed",
            summary.dialogs, summary.turns
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::nlp::RuleTagger;

    #[test]
    fn process_dialog() {
        let p = AntiScam::new(
            PathBuf::new(),
            PathBuf::new(),
            RuleTagger,
            Stopwords::english(),
        );
        let raw = RawDialog::new(
            4,
            vec![
                "Attacker\tI am calling from your bank\tgreeting\tbank".to_string(),
                "Victim\tWhich bank?\tquestion\tnone".to_string(),
            ],
            Some("label".to_string()),
        );
        let dialog = p.process(&raw).unwrap();

        assert_eq!(dialog.id(), "4");
        assert_eq!(dialog.len(), 2);

        let turn = &dialog.turns()[1];
        let fields: Vec<&str> = turn.fields().collect();
        assert_eq!(fields, ANTISCAM_HEADER.to_vec());
        assert_eq!(turn.get("turn"), Some(&json!(1)));
        assert_eq!(turn.get("agent"), Some(&json!("Victim")));
        assert_eq!(turn.get("intent"), Some(&json!("question")));
        assert_eq!(turn.get("semantic_slot"), Some(&json!("none")));
        assert_eq!(turn.get("topics"), Some(&json!(["bank"])));
    }
}

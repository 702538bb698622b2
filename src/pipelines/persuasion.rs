//! Persuasion-for-good pipeline
//!
//! Rows are grouped by dialog id, then every dialog is written twice:
//! - raw: rows zipped with [PERSUASION_RAW_HEADER],
//! - enhanced: rows enriched with tokens and topics, zipped with [PERSUASION_HEADER].
//!
//! Both are json files.
use std::path::PathBuf;

use log::{debug, info};

use super::pipeline::{Outputs, Pipeline, Summary};
use crate::dialog::{Dialog, PERSUASION_HEADER, PERSUASION_RAW_HEADER};
use crate::error::Error;
use crate::filtering::TopicFilter;
use crate::io::{JsonWriter, WriterTrait};
use crate::nlp::{Stopwords, Tokenize};
use crate::sources::persuasion::{row, PersuasionCorpus};
use crate::transformers::{Annotate, Enricher, Layout};

pub struct Persuasion<T> {
    src: PathBuf,
    dst: PathBuf,
    enricher: Enricher<T>,
    outputs: Outputs,
}

impl<T: Tokenize> Persuasion<T> {
    pub fn new(src: PathBuf, dst: PathBuf, tokenizer: T, stopwords: Stopwords) -> Self {
        Self {
            src,
            dst,
            enricher: Enricher::new(
                tokenizer,
                TopicFilter::new(stopwords),
                Layout::PERSUASION,
            ),
            outputs: Outputs::default(),
        }
    }

    pub fn with_outputs(mut self, outputs: Outputs) -> Self {
        self.outputs = outputs;
        self
    }

    /// Zip rows with the raw header, without any enrichment.
    pub fn raw(id: &str, rows: &[Vec<String>]) -> Dialog {
        Dialog::assemble(
            id.to_string(),
            &PERSUASION_RAW_HEADER,
            rows.iter().map(|fields| row(fields)),
        )
    }

    /// Enrich each row with tokens and topics.
    pub fn process(&self, id: &str, rows: &[Vec<String>]) -> Result<Dialog, Error> {
        debug!("Processing Dialog: {}", id);
        let rows = rows
            .iter()
            .map(|fields| {
                let mut row = row(fields);
                self.enricher.annotate(&mut row)?;
                Ok(row)
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Dialog::assemble(id.to_string(), &PERSUASION_HEADER, rows))
    }
}

impl<T: Tokenize> Pipeline<Summary> for Persuasion<T> {
    fn run(&self) -> Result<Summary, Error> {
        let corpus = PersuasionCorpus::from_path(&self.src)?;
        info!("persuasion: {} dialogs found", corpus.len());

        let mut raw_writer = if self.outputs.raw {
            Some(JsonWriter::new(&Outputs::prepare(
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
        for (id, rows) in corpus.iter() {
            if let Some(w) = &mut raw_writer {
                summary.raw_files.push(w.write_single(&Self::raw(id, rows))?);
            }

            let dialog = self.process(id, rows)?;
            if let Some(w) = &mut enhanced_writer {
                summary.enhanced_files.push(w.write_single(&dialog)?);
            }

            summary.dialogs += 1;
            summary.turns += dialog.len();
        }

        info!(
            "persuasion: {} dialogs, {} turns processed",
            summary.dialogs, summary.turns
        );
        Ok(summary)
    }
}

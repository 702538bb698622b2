//! # Omicron
//!
//! Converts dialog corpora into per-dialog json records,
//! annotated with lemma-keyed token maps and topic words.
//!
//! ## Getting started
//!
//! ```sh
//! omicron 0.1.0
//! dialog corpora conversion tool.
//!
//! USAGE:
//!     omicron <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     antiscam      Convert the anti-scam transcript corpus
//!     help          Prints this message or the help of the given subcommand(s)
//!     persuasion    Convert the persuasion-for-good csv corpus
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) to follow progress.
use structopt::StructOpt;

#[macro_use]
extern crate log;

use omicron::cli;
use omicron::error::Error;
use omicron::nlp::{RuleTagger, Stopwords};
use omicron::pipelines::{AntiScam, Persuasion, Pipeline, Summary};

fn stopwords(c: &cli::Corpus) -> Result<Stopwords, Error> {
    match &c.stopwords {
        Some(path) => Stopwords::from_path(path),
        None => Ok(Stopwords::english()),
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Omicron::from_args();
    debug!("cli args\n{:#?}", opt);

    let summary: Summary = match opt {
        cli::Omicron::Antiscam(c) => {
            let p = AntiScam::new(c.src.clone(), c.dst.clone(), RuleTagger, stopwords(&c)?)
                .with_outputs(c.outputs());
            p.run()?
        }
        cli::Omicron::Persuasion(c) => {
            let p = Persuasion::new(c.src.clone(), c.dst.clone(), RuleTagger, stopwords(&c)?)
                .with_outputs(c.outputs());
            p.run()?
        }
    };

    info!(
        "done: {} dialogs, {} raw files, {} enhanced files",
        summary.dialogs,
        summary.raw_files.len(),
        summary.enhanced_files.len()
    );
    Ok(())
}

//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use crate::pipelines::Outputs;

#[derive(Debug, StructOpt)]
#[structopt(name = "omicron", about = "dialog corpora conversion tool.")]
/// Holds every command that is callable by the `omicron` command.
pub enum Omicron {
    #[structopt(about = "Convert the anti-scam transcript corpus")]
    Antiscam(Corpus),
    #[structopt(about = "Convert the persuasion-for-good csv corpus")]
    Persuasion(Corpus),
}

#[derive(Debug, StructOpt)]
/// Corpus conversion parameters.
///
/// ```sh
/// omicron-antiscam 0.1.0
/// Convert the anti-scam transcript corpus
///
/// USAGE:
///     omicron antiscam [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///     -h, --help           Prints help information
///         --no-enhanced    do not write enhanced dialogs
///         --no-raw         do not write raw dialogs
///     -V, --version        Prints version information
///
/// OPTIONS:
///     -s, --stopwords <stopwords>    newline-separated stopword list. Default is the built-in english list.
///
/// ARGS:
///     <src>    source corpus file
///     <dst>    destination folder (raw/ and enhanced/ are created inside)
/// ```
pub struct Corpus {
    #[structopt(parse(from_os_str), help = "source corpus file")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "destination folder (raw/ and enhanced/ are created inside)"
    )]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "s",
        long = "stopwords",
        help = "newline-separated stopword list. Default is the built-in english list."
    )]
    pub stopwords: Option<PathBuf>,
    #[structopt(long = "no-raw", help = "do not write raw dialogs")]
    pub no_raw: bool,
    #[structopt(long = "no-enhanced", help = "do not write enhanced dialogs")]
    pub no_enhanced: bool,
}

impl Corpus {
    pub fn outputs(&self) -> Outputs {
        Outputs {
            raw: !self.no_raw,
            enhanced: !self.no_enhanced,
        }
    }
}

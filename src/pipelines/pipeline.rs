//! Pipeline trait.
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Error;

/// This trait must be implemented for each Pipeline,
/// and is generic over the return type so that
/// any custom pipeline that needs a return type can use the
/// trait aswell.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}

/// Which files a pipeline writes.
///
/// Raw dialogs go in `<dst>/raw`, enhanced ones in `<dst>/enhanced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outputs {
    pub raw: bool,
    pub enhanced: bool,
}

impl Outputs {
    pub const RAW_DIR: &'static str = "raw";
    pub const ENHANCED_DIR: &'static str = "enhanced";

    /// Nothing is written.
    pub fn none() -> Self {
        Self {
            raw: false,
            enhanced: false,
        }
    }

    /// Creates (if needed) the output directory `name` in `dst`, returning its path.
    pub(crate) fn prepare(dst: &Path, name: &str) -> Result<PathBuf, Error> {
        let dir = dst.join(name);
        if !dir.exists() {
            warn!("Destination {:?} does not exist. Creating", dir);
            std::fs::create_dir_all(&dir)?;
        }

        if !dir.is_dir() {
            return Err(Error::Custom(format!(
                "Destination has to be a directory: {:?}",
                dir
            )));
        }
        info!("writing {} dialogs to {:?}", name, dir);
        Ok(dir)
    }
}

impl Default for Outputs {
    fn default() -> Self {
        Self {
            raw: true,
            enhanced: true,
        }
    }
}

/// Counts and written files of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub dialogs: usize,
    pub turns: usize,
    pub raw_files: Vec<PathBuf>,
    pub enhanced_files: Vec<PathBuf>,
}

//! Randomly named file creation.
use std::{
    fs::{File, OpenOptions},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;
use rand::{rngs::ThreadRng, Rng};

use crate::error::Error;

/// Length of generated file stems.
pub const STEM_LEN: usize = 8;

/// Attempts before giving up on finding a free name.
const MAX_ATTEMPTS: usize = 16;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Generate a random stem of [STEM_LEN] lowercase hex characters.
pub fn random_stem<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..STEM_LEN)
        .map(|_| char::from(HEX[rng.gen_range(0..HEX.len())]))
        .collect()
}

/// Creates new, randomly named files in a directory.
#[derive(Debug)]
pub struct UniqueFiles {
    dst: PathBuf,
    rng: ThreadRng,
}

impl UniqueFiles {
    pub fn new(dst: &Path) -> Result<Self, Error> {
        if !dst.is_dir() {
            return Err(Error::Custom(format!("{:?} is not a directory", dst)));
        }

        Ok(Self {
            dst: dst.to_path_buf(),
            rng: rand::thread_rng(),
        })
    }

    /// Create a new file with the provided extension.
    ///
    /// Fails if no free name could be found after a few attempts.
    pub fn create(&mut self, extension: &str) -> Result<(PathBuf, File), Error> {
        for _ in 0..MAX_ATTEMPTS {
            let path = self
                .dst
                .join(format!("{}.{}", random_stem(&mut self.rng), extension));

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => {
                    debug!("writing to -> {:?}", path);
                    return Ok((path, file));
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!("{:?} already exists, drawing another name", path);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(Error::Custom(format!(
            "could not find a free file name in {:?}",
            self.dst
        )))
    }
}

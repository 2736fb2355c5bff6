//! Where the stores read their records from.
//!
//! A [`Medium`] is handed to every store instead of a hardcoded path, so the
//! same store code runs against a CSV file on disk or against in-memory text.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::Error;

#[derive(Debug, Clone)]
pub enum Medium {
    /// A CSV file on disk. Opened fresh for every operation.
    File(PathBuf),
    /// CSV text held in memory. Read-only.
    Memory(String),
}

impl Medium {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Medium::File(path.into())
    }

    pub fn memory(text: impl Into<String>) -> Self {
        Medium::Memory(text.into())
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Medium::File(path) => Some(path),
            Medium::Memory(_) => None,
        }
    }

    /// Opens the medium for a single read pass.
    /// The returned reader owns the file handle; dropping it closes the file.
    pub(crate) fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        match self {
            Medium::File(path) => Ok(Box::new(File::open(path)?)),
            Medium::Memory(text) => Ok(Box::new(text.as_bytes())),
        }
    }

    /// Opens the medium for appending, creating the file if needed.
    /// Returns the file together with whether it was empty, i.e. still needs a header row.
    /// A non-empty file is positioned at the start of a fresh line.
    pub(crate) fn open_append(&self) -> Result<(File, bool), Error> {
        match self {
            Medium::File(path) => {
                let mut file = OpenOptions::new()
                    .read(true)
                    .create(true)
                    .append(true)
                    .open(path)?;
                let len = file.metadata()?.len();
                if len > 0 {
                    let mut last = [0u8; 1];
                    file.seek(SeekFrom::Start(len - 1))?;
                    file.read_exact(&mut last)?;
                    if last[0] != b'\n' {
                        file.write_all(b"\n")?;
                    }
                }
                Ok((file, len == 0))
            }
            Medium::Memory(_) => Err(Error::ReadOnlyMedium),
        }
    }
}

impl std::fmt::Display for Medium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Medium::File(path) => write!(f, "{}", path.display()),
            Medium::Memory(_) => write!(f, "<memory>"),
        }
    }
}

//! Line source feeding the scanner one line at a time.

use crate::error::{Result, ScanError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Finite, non-restartable sequence of lines read from a buffered reader.
///
/// Line terminators (`\n` or `\r\n`) are stripped. Lines are raw bytes so
/// non-UTF-8 sources (Latin-1 and friends) pass through untouched.
pub struct LineSource<R> {
    reader: R,
    path: PathBuf,
    buf: Vec<u8>,
}

impl LineSource<BufReader<File>> {
    /// Open a file for scanning.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| ScanError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> LineSource<R> {
    /// Wrap an existing reader. `path` is only used in error messages.
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            path: path.into(),
            buf: Vec::new(),
        }
    }

    /// Next line, or `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        self.buf.clear();
        let n = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|source| ScanError::InputUnavailable {
                path: self.path.clone(),
                source,
            })?;
        if n == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(self.buf.as_slice()))
    }
}

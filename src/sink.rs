//! Doc sink receiving doc-block lines to echo verbatim.

use crate::error::{Result, ScanError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub trait DocSink {
    /// Append one line, byte for byte; the sink adds the line terminator.
    fn write_line(&mut self, line: &[u8]) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Doc sink writing to any `Write`, one `\n`-terminated line per call.
pub struct DocWriter<W: Write> {
    out: W,
    path: PathBuf,
}

impl DocWriter<BufWriter<File>> {
    /// Create (or truncate) the output file.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| ScanError::OutputUnwritable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> DocWriter<W> {
    pub fn new(out: W, path: impl Into<PathBuf>) -> Self {
        Self {
            out,
            path: path.into(),
        }
    }

    fn wrap(&self, source: std::io::Error) -> ScanError {
        ScanError::OutputUnwritable {
            path: self.path.clone(),
            source,
        }
    }
}

impl<W: Write> DocSink for DocWriter<W> {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.out
            .write_all(line)
            .and_then(|()| self.out.write_all(b"\n"))
            .map_err(|e| self.wrap(e))
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(|e| self.wrap(e))
    }
}

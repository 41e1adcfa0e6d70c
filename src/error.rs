//! Fatal scan errors. Content anomalies live in [`crate::model::Anomaly`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read input {}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write doc output {}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write report")]
    ReportUnwritable(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;

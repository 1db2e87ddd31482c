//! Error type for a generation run.
//!
//! Every failure here is a fatal configuration problem: a missing corpus
//! root, an unreadable template, or a requested reference compiler that is
//! not where it should be. `main` renders the error and exits non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("corpus root not found at {}", path.display())]
    CorpusRoot { path: PathBuf },

    #[error("cannot read corpus directory {}: {source}", path.display())]
    CorpusDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read template {}: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read test ignore file {}: {source}", path.display())]
    Ignore {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write artifact {}: {source}", path.display())]
    WriteArtifact {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "reference compiler not found at {} (make sure tests are being \
         built on a machine where the reference compiler is installed)",
        path.display()
    )]
    RefCompilerMissing { path: PathBuf },
}

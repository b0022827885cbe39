pub mod ini;
pub mod log;
pub mod rc;
pub mod resolve;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("setup.ini not found: {0}")]
    IniNotFound(PathBuf),
    #[error("setup log not found: {0}")]
    LogNotFound(PathBuf),
    #[error("setup.rc not found: {0}")]
    RcNotFound(PathBuf),
    #[error("no last-cache entry in {0}")]
    LastCacheNotFound(PathBuf),
    #[error("no last-mirror entry in {0}")]
    LastMirrorNotFound(PathBuf),
    #[error("no package list in {0}")]
    InstalledListNotFound(PathBuf),
    #[error("malformed manifest at {path} line {line}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SetupError>;

use thiserror::Error;

use crate::graph::GraphError;
use crate::setup::SetupError;

#[derive(Debug, Error)]
pub enum CygrootsError {
    #[error("setup error: {0}")]
    Setup(#[from] SetupError),
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CygrootsError>;

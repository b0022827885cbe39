use std::collections::HashMap;

use thiserror::Error;

use crate::core::package::PackageName;

pub mod builder;
pub mod roots;
pub mod scc;

#[derive(Debug, Default)]
pub struct RequiresGraph {
    pub edges: HashMap<PackageName, Vec<PackageName>>,
}

impl RequiresGraph {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("package {from} requires unknown package {to}")]
    UnknownRequire { from: String, to: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;

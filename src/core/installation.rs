use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::core::package::{Package, PackageName};
use crate::graph::builder::{build_installed_graph, MissingRequire};
use crate::graph::RequiresGraph;
use crate::setup::ini::load_packages;
use crate::setup::log::load_installed;
use crate::setup::SetupError;

#[derive(Debug)]
pub struct Installation {
    pub packages: HashMap<PackageName, Package>,
    pub installed: Vec<PackageName>,
    pub graph: RequiresGraph,
    pub missing: Vec<MissingRequire>,
}

impl Installation {
    pub fn load(inifile: &Path, setup_log: &Path) -> Result<Self, SetupError> {
        let packages = load_packages(inifile)?;
        let installed = load_installed(setup_log)?;
        let resolved = build_installed_graph(&packages, &installed);

        Ok(Self {
            packages,
            installed,
            graph: resolved.graph,
            missing: resolved.missing,
        })
    }

    pub fn base_packages(&self) -> HashSet<PackageName> {
        self.packages
            .values()
            .filter(|package| package.base)
            .map(|package| package.name.clone())
            .collect()
    }
}

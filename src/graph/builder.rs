use std::collections::{HashMap, HashSet};

use crate::core::package::{Package, PackageName};
use crate::graph::RequiresGraph;

#[derive(Debug, Clone)]
pub struct MissingRequire {
    pub from: PackageName,
    pub to: PackageName,
}

#[derive(Debug)]
pub struct InstalledGraph {
    pub graph: RequiresGraph,
    pub missing: Vec<MissingRequire>,
}

pub fn build_installed_graph(
    packages: &HashMap<PackageName, Package>,
    installed: &[PackageName],
) -> InstalledGraph {
    let installed_set: HashSet<&PackageName> = installed.iter().collect();
    let mut edges: HashMap<PackageName, Vec<PackageName>> = HashMap::new();
    let mut missing = Vec::new();

    for name in installed {
        let requires = packages
            .get(name)
            .map(|package| package.requires.as_slice())
            .unwrap_or(&[]);
        let mut kept = Vec::new();
        for target in requires {
            if installed_set.contains(target) {
                kept.push(target.clone());
            } else {
                missing.push(MissingRequire {
                    from: name.clone(),
                    to: target.clone(),
                });
            }
        }
        edges.insert(name.clone(), kept);
    }

    InstalledGraph {
        graph: RequiresGraph { edges },
        missing,
    }
}

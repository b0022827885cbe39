use std::collections::{HashMap, HashSet};

use crate::core::package::PackageName;
use crate::graph::scc::decompose;
use crate::graph::{GraphError, RequiresGraph};

struct VertexInfo<'a> {
    requires: &'a [PackageName],
    component: usize,
    base: bool,
}

pub fn find_roots(
    graph: &RequiresGraph,
    base: &HashSet<PackageName>,
) -> Result<Vec<PackageName>, GraphError> {
    let components = decompose(graph)?;

    let mut info: HashMap<&PackageName, VertexInfo> = HashMap::new();
    for (index, members) in components.iter().enumerate() {
        for member in members {
            let requires = graph.edges.get(member).map(Vec::as_slice).unwrap_or(&[]);
            info.insert(
                member,
                VertexInfo {
                    requires,
                    component: index,
                    base: base.contains(member),
                },
            );
        }
    }

    let mut is_root = vec![true; components.len()];
    for vertex in info.values() {
        for target in vertex.requires {
            if let Some(required) = info.get(target) {
                if required.component != vertex.component {
                    is_root[required.component] = false;
                }
            }
        }
        if vertex.base {
            is_root[vertex.component] = false;
        }
    }

    let mut roots = Vec::new();
    for (index, members) in components.iter().enumerate() {
        if !is_root[index] {
            continue;
        }
        if let Some(representative) = members.first() {
            roots.push(representative.clone());
        }
    }
    roots.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    Ok(roots)
}

use std::collections::HashMap;

use crate::core::package::PackageName;
use crate::graph::{GraphError, RequiresGraph};

const UNVISITED: usize = usize::MAX;

#[derive(Clone, Copy)]
struct VertexState {
    index: usize,
    low_link: usize,
    on_stack: bool,
}

pub fn decompose(graph: &RequiresGraph) -> Result<Vec<Vec<PackageName>>, GraphError> {
    let mut names: Vec<PackageName> = graph.edges.keys().cloned().collect();
    names.sort_by(|a, b| a.as_str().cmp(b.as_str()));

    let mut indices: HashMap<PackageName, usize> = HashMap::new();
    for (index, name) in names.iter().enumerate() {
        indices.insert(name.clone(), index);
    }

    let mut successors: Vec<Vec<usize>> = Vec::with_capacity(names.len());
    for name in &names {
        let mut row = Vec::new();
        if let Some(requires) = graph.edges.get(name) {
            for target in requires {
                match indices.get(target) {
                    Some(&target_index) => row.push(target_index),
                    None => {
                        return Err(GraphError::UnknownRequire {
                            from: name.as_str().to_string(),
                            to: target.as_str().to_string(),
                        })
                    }
                }
            }
        }
        successors.push(row);
    }

    let mut states = vec![
        VertexState {
            index: UNVISITED,
            low_link: UNVISITED,
            on_stack: false,
        };
        names.len()
    ];
    let mut next_index = 0;
    let mut stack: Vec<usize> = Vec::new();
    let mut components: Vec<Vec<PackageName>> = Vec::new();

    for start in 0..names.len() {
        if states[start].index != UNVISITED {
            continue;
        }

        let mut work: Vec<(usize, usize)> = vec![(start, 0)];
        while let Some((vertex, resume_at)) = work.pop() {
            if resume_at == 0 {
                states[vertex].index = next_index;
                states[vertex].low_link = next_index;
                next_index += 1;
                stack.push(vertex);
                states[vertex].on_stack = true;
            } else {
                let child = successors[vertex][resume_at - 1];
                if states[child].low_link < states[vertex].low_link {
                    states[vertex].low_link = states[child].low_link;
                }
            }

            let mut descended = false;
            for offset in resume_at..successors[vertex].len() {
                let target = successors[vertex][offset];
                if states[target].index == UNVISITED {
                    work.push((vertex, offset + 1));
                    work.push((target, 0));
                    descended = true;
                    break;
                }
                if states[target].on_stack && states[target].index < states[vertex].low_link {
                    states[vertex].low_link = states[target].index;
                }
            }
            if descended {
                continue;
            }

            if states[vertex].low_link == states[vertex].index {
                let mut members = Vec::new();
                while let Some(member) = stack.pop() {
                    states[member].on_stack = false;
                    members.push(names[member].clone());
                    if member == vertex {
                        break;
                    }
                }
                members.sort_by(|a, b| a.as_str().cmp(b.as_str()));
                components.push(members);
            }
        }
    }

    Ok(components)
}

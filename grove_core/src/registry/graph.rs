//! Catalog validation - key uniqueness, reference integrity, and an acyclic
//! prerequisite graph.

use std::collections::{HashMap, VecDeque};

use grove_rules::{EventDefinition, EventKey};

use crate::error::SchemaError;

/// Validate a catalog and return the key -> position index.
///
/// Checks run in order: duplicate keys, dangling references, then cycles.
pub(crate) fn validate(
    definitions: &[EventDefinition],
) -> Result<HashMap<EventKey, usize>, SchemaError> {
    let mut index = HashMap::with_capacity(definitions.len());
    for (position, def) in definitions.iter().enumerate() {
        if index.insert(def.key.clone(), position).is_some() {
            return Err(SchemaError::DuplicateKey(def.key.clone()));
        }
    }

    for def in definitions {
        for (relation, reference) in def.references() {
            if !index.contains_key(reference) {
                return Err(SchemaError::DanglingReference {
                    event: def.key.clone(),
                    missing: reference.clone(),
                    relation,
                });
            }
        }
    }

    let cycle = cyclic_events(definitions, &index);
    if !cycle.is_empty() {
        return Err(SchemaError::PrerequisiteCycle(
            cycle.into_iter().map(|i| definitions[i].key.clone()).collect(),
        ));
    }

    Ok(index)
}

/// Positions of events that sit on (or between) prerequisite cycles, in
/// catalog order. Empty when the graph is a DAG.
///
/// Kahn's algorithm peels every event whose prerequisites can be ordered.
/// Whatever is left is then peeled from the other side, dropping events that
/// merely depend on a cycle without being part of one.
fn cyclic_events(definitions: &[EventDefinition], index: &HashMap<EventKey, usize>) -> Vec<usize> {
    let count = definitions.len();
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); count];
    let mut in_degree = vec![0usize; count];

    for (position, def) in definitions.iter().enumerate() {
        for prereq in &def.prerequisites {
            if let Some(&from) = index.get(prereq) {
                dependents[from].push(position);
                in_degree[position] += 1;
            }
        }
    }

    let mut queue: VecDeque<usize> = (0..count).filter(|&i| in_degree[i] == 0).collect();
    while let Some(node) = queue.pop_front() {
        for &next in &dependents[node] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    let mut remaining: Vec<bool> = in_degree.iter().map(|&d| d > 0).collect();
    if !remaining.iter().any(|&r| r) {
        return Vec::new();
    }

    // Reverse pass over the leftovers: drop events nothing leftover depends on.
    let mut out_degree: Vec<usize> = (0..count)
        .map(|i| {
            if remaining[i] {
                dependents[i].iter().filter(|&&d| remaining[d]).count()
            } else {
                0
            }
        })
        .collect();

    let mut queue: VecDeque<usize> = (0..count)
        .filter(|&i| remaining[i] && out_degree[i] == 0)
        .collect();
    while let Some(node) = queue.pop_front() {
        remaining[node] = false;
        for prereq in &definitions[node].prerequisites {
            if let Some(&from) = index.get(prereq) {
                if remaining[from] {
                    out_degree[from] -= 1;
                    if out_degree[from] == 0 {
                        queue.push_back(from);
                    }
                }
            }
        }
    }

    (0..count).filter(|&i| remaining[i]).collect()
}

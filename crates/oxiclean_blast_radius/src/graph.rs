use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};
use std::collections::{HashSet, VecDeque};

use crate::{filter::should_exclude, types::ModuleRecord};

/// Reversed module graph: each module maps to the modules that directly depend on it.
///
/// Built once by [`build_graph`] and read-only afterwards. Every key and every
/// dependent is also present in [`DependencyGraph::modules`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    dependents: IndexMap<String, IndexSet<String>>,
    modules: IndexSet<String>,
    excluded: usize,
}

impl DependencyGraph {
    /// Direct dependents of `module`, if it has any.
    pub fn dependents_of(&self, module: &str) -> Option<&IndexSet<String>> {
        self.dependents.get(module)
    }

    /// Every module seen as either a dependency or a dependent, in first-seen order.
    pub fn modules(&self) -> &IndexSet<String> {
        &self.modules
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Number of modules with at least one direct dependent.
    pub fn modules_with_dependents(&self) -> usize {
        self.dependents.len()
    }

    /// Number of module records skipped by the vendor filter.
    pub fn excluded_count(&self) -> usize {
        self.excluded
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    fn add_edge(&mut self, module: &str, dependent: &str) {
        self.dependents.entry(module.to_string()).or_default().insert(dependent.to_string());
        self.modules.insert(dependent.to_string());
    }
}

pub fn build_graph(records: &[ModuleRecord], exclude_node_modules: bool) -> DependencyGraph {
    debug!("Building dependency graph from {} module records", records.len());
    let mut graph = DependencyGraph::default();

    for record in records {
        let Some(module) = record.identifier() else {
            trace!("Skipping module record without name or id");
            continue;
        };

        if should_exclude(module, exclude_node_modules) {
            trace!("Excluding module: {}", module);
            graph.excluded += 1;
            continue;
        }

        graph.modules.insert(module.to_string());

        for dependent in record.reasons().iter().filter_map(|r| r.dependent()) {
            if should_exclude(dependent, exclude_node_modules) {
                trace!("Dropping excluded dependent '{}' of {}", dependent, module);
                continue;
            }
            trace!("Edge: {} <- {}", module, dependent);
            graph.add_edge(module, dependent);
        }
    }

    debug!(
        "Built graph: {} modules, {} with dependents, {} excluded",
        graph.modules.len(),
        graph.dependents.len(),
        graph.excluded
    );
    graph
}

/// Finds every module that transitively depends on `start`, breadth-first.
///
/// `start` is only part of the result when it lists itself as a direct dependent;
/// longer cycles back to `start` are not counted. An unknown `start` yields an empty set.
pub fn transitive_dependents<'g>(start: &str, graph: &'g DependencyGraph) -> IndexSet<&'g str> {
    let mut result: IndexSet<&'g str> = IndexSet::new();

    let Some((seed, _)) = graph.dependents.get_key_value(start) else {
        trace!("No dependents for: {}", start);
        return result;
    };
    let seed = seed.as_str();

    let mut visited: HashSet<&'g str> = HashSet::from([seed]);
    let mut queue: VecDeque<&'g str> = VecDeque::from([seed]);

    while let Some(current) = queue.pop_front() {
        let Some(direct) = graph.dependents_of(current) else {
            continue;
        };

        for dependent in direct {
            let dependent = dependent.as_str();
            if visited.insert(dependent) {
                result.insert(dependent);
                queue.push_back(dependent);
            } else if current == seed && dependent == seed {
                // A module listing itself as a reason is its own dependent.
                trace!("Self-reference on start module: {}", start);
                result.insert(dependent);
            }
        }
    }

    trace!("Computed {} transitive dependents for {}", result.len(), start);
    result
}

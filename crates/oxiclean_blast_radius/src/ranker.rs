use log::{debug, trace};
use rayon::prelude::*;
use std::{
    sync::atomic::{AtomicUsize, Ordering},
    thread,
};

use crate::{
    constants::PROGRESS_INTERVAL,
    graph::{DependencyGraph, transitive_dependents},
    types::ModuleRanking,
};

/// Ranks every known module by the number of modules that transitively depend on it.
///
/// Each module is analyzed independently on the rayon pool. `on_progress(processed, total)`
/// fires once per [`PROGRESS_INTERVAL`] modules, starting with the first. The result is
/// sorted by count descending, then by module name.
pub fn rank_all<F>(graph: &DependencyGraph, on_progress: F) -> Vec<ModuleRanking>
where
    F: Fn(usize, usize) + Sync,
{
    let total = graph.module_count();
    let processed = AtomicUsize::new(0);
    debug!("Ranking {} modules on {} threads", total, rayon::current_num_threads());

    let mut results: Vec<ModuleRanking> = graph
        .modules()
        .par_iter()
        .map(|module| {
            let i = processed.fetch_add(1, Ordering::Relaxed);
            if i % PROGRESS_INTERVAL == 0 {
                on_progress(i, total);
            }

            let dependent_count = transitive_dependents(module, graph).len();
            trace!(
                "Thread {:?}: {} has {} dependents",
                thread::current().id(),
                module,
                dependent_count
            );
            ModuleRanking { module: module.clone(), dependent_count }
        })
        .collect();

    sort_rankings(&mut results);
    results
}

fn sort_rankings(results: &mut [ModuleRanking]) {
    results.sort_by(|a, b| {
        b.dependent_count.cmp(&a.dependent_count).then_with(|| a.module.cmp(&b.module))
    });
}

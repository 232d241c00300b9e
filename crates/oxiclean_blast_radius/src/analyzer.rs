use anyhow::Result;
use log::{debug, info};

use crate::{
    config::Config,
    graph::build_graph,
    loader::load_stats,
    ranker::rank_all,
    types::{AnalysisReport, StatsDocument, Summary},
};

pub fn run_blast_radius_analysis(cfg: &Config) -> Result<AnalysisReport> {
    info!("Loading dependency data from {}", cfg.input.display());
    let doc = load_stats(&cfg.input)?;
    Ok(analyze_document(&doc, cfg.exclude_node_modules()))
}

/// Builds the graph for an already loaded stats document and ranks every module.
pub fn analyze_document(doc: &StatsDocument, exclude_node_modules: bool) -> AnalysisReport {
    info!("Building dependency graph");
    let graph = build_graph(doc.modules(), exclude_node_modules);

    if exclude_node_modules {
        info!("Excluded {} node_modules dependencies", graph.excluded_count());
    }
    info!("Found {} total modules", graph.module_count());
    info!("Found {} modules with dependents", graph.modules_with_dependents());

    info!("Calculating transitive dependents");
    let results = rank_all(&graph, |processed, total| {
        info!("  processed {}/{} modules...", processed, total);
    });

    let summary = Summary::from_results(&results, exclude_node_modules);
    debug!(
        "Analysis complete: {} modules, {} with dependents, {} without",
        summary.total_modules, summary.modules_with_dependencies, summary.modules_without_dependencies
    );

    AnalysisReport {
        summary,
        results,
        excluded_count: graph.excluded_count(),
        modules_with_direct_dependents: graph.modules_with_dependents(),
    }
}

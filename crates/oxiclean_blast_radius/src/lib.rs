//! Blast-radius analysis for bundler module graphs.
//!
//! This crate reads a bundler stats file (such as Storybook's `preview-stats.json`),
//! builds a reversed dependency graph ("who depends on me") and ranks every module by
//! how many other modules transitively depend on it. Modules at the top of the ranking
//! are the ones whose changes force the most downstream rebuilds and retests.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use oxiclean_blast_radius::{Config, run_blast_radius_analysis};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     input: "preview-stats.json".into(),
//!     output: "dependency_analysis.json".into(),
//!     top: 20,
//!     include_node_modules: false,
//! };
//!
//! let report = run_blast_radius_analysis(&cfg)?;
//!
//! // Use buffered output for better performance
//! let mut stdout = BufWriter::new(std::io::stdout());
//! oxiclean_blast_radius::print_top_modules(&mut stdout, &report.results, cfg.top)?;
//! oxiclean_blast_radius::print_summary(&mut stdout, &report.summary)?;
//! stdout.flush()?;
//!
//! oxiclean_blast_radius::save_results(&cfg.output, &report)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Working with the graph directly
//!
//! ```
//! use oxiclean_blast_radius::{StatsDocument, build_graph, transitive_dependents};
//!
//! let doc: StatsDocument = serde_json::from_str(
//!     r#"{"modules": [{"name": "theme", "reasons": [{"moduleName": "button"}]}]}"#,
//! )
//! .unwrap();
//! let graph = build_graph(doc.modules(), true);
//! assert!(transitive_dependents("theme", &graph).contains("button"));
//! ```

mod analyzer;
mod config;
mod constants;
mod filter;
mod graph;
mod loader;
mod ranker;
mod reporter;
mod types;

// Re-export public API
pub use analyzer::{analyze_document, run_blast_radius_analysis};
pub use config::Config;
pub use constants::{PROGRESS_INTERVAL, VENDOR_MARKER};
pub use filter::should_exclude;
pub use graph::{DependencyGraph, build_graph, transitive_dependents};
pub use loader::load_stats;
pub use ranker::rank_all;
pub use reporter::{print_no_modules_message, print_summary, print_top_modules, save_results};
pub use types::{AnalysisReport, ModuleRanking, ModuleRecord, ReasonRecord, StatsDocument, Summary};

use clap::Parser;
use std::path::PathBuf;

use crate::constants::{DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_TOP};

#[derive(Debug, Clone, Parser)]
#[command(name = "blast-radius")]
#[command(about = "Rank modules in a bundler stats file by how many modules depend on them")]
pub struct Config {
    /// Bundler stats file with a `modules` list (e.g. Storybook's preview-stats.json)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to write the full JSON results
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of top results to display
    #[arg(short, long, default_value = DEFAULT_TOP)]
    pub top: usize,

    /// Include node_modules dependencies in the analysis (excluded by default)
    #[arg(long)]
    pub include_node_modules: bool,
}

impl Config {
    pub fn exclude_node_modules(&self) -> bool {
        !self.include_node_modules
    }
}

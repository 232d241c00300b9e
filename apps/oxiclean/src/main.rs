use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use oxiclean_blast_radius::Config;
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "oxiclean")]
#[command(about = "A collection of tools for cleaning up codebases", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rank modules in a bundler stats file by how many modules transitively depend on them
    BlastRadius(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::BlastRadius(cfg) => {
            let num_threads = rayon::current_num_threads();
            info!(
                "Running blast radius analysis on {} (using {} threads)",
                cfg.input.display(),
                num_threads
            );
            debug!(
                "Config: output={:?}, top={}, include_node_modules={}",
                cfg.output, cfg.top, cfg.include_node_modules
            );

            let report = oxiclean_blast_radius::run_blast_radius_analysis(&cfg)?;
            debug!("Ranked {} modules", report.results.len());

            if report.results.is_empty() {
                oxiclean_blast_radius::print_no_modules_message(&mut stdout)?;
            } else {
                oxiclean_blast_radius::print_top_modules(&mut stdout, &report.results, cfg.top)?;
            }
            oxiclean_blast_radius::print_summary(&mut stdout, &report.summary)?;

            oxiclean_blast_radius::save_results(&cfg.output, &report)?;

            let elapsed_ms = start.elapsed().as_millis();
            writeln!(
                stdout,
                "\n{} Full results saved to {}",
                "●".bright_blue(),
                cfg.output.display().to_string().cyan()
            )?;
            writeln!(
                stdout,
                "{} Finished in {}ms on {} modules (using {} threads).",
                "●".bright_blue(),
                elapsed_ms.to_string().cyan(),
                report.summary.total_modules.to_string().cyan(),
                num_threads.to_string().cyan()
            )?;
            stdout.flush()?;

            Ok(())
        }
    }
}

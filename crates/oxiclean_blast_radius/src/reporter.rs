use std::{
    borrow::Cow,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, info};

use crate::{
    constants::MAX_DISPLAY_NAME_LEN,
    types::{AnalysisReport, ModuleRanking, Summary},
};

/// Shorten long module names to `MAX_DISPLAY_NAME_LEN` characters, ending in `...`
fn display_name(module: &str) -> Cow<'_, str> {
    if module.chars().count() <= MAX_DISPLAY_NAME_LEN {
        return Cow::Borrowed(module);
    }
    let head: String = module.chars().take(MAX_DISPLAY_NAME_LEN - 3).collect();
    Cow::Owned(format!("{}...", head))
}

pub fn print_top_modules<W: Write>(
    writer: &mut W,
    results: &[ModuleRanking],
    top_n: usize,
) -> io::Result<()> {
    debug!("Printing top {} of {} modules", top_n, results.len());

    writeln!(writer, "\n{}", format!("=== TOP {} MOST DEPENDED-ON MODULES ===", top_n).bold())?;
    writeln!(writer, "{:<6} {:<12} {}", "rank", "dependencies", "module")?;
    writeln!(writer, "{}", "-".repeat(80).dimmed())?;

    for (idx, ranking) in results.iter().take(top_n).enumerate() {
        let count = format!("{:<12}", ranking.dependent_count);
        let count = if ranking.dependent_count > 0 { count.red().bold() } else { count.dimmed() };
        writeln!(
            writer,
            "{:<6} {} {}",
            idx + 1,
            count,
            display_name(&ranking.module).blue()
        )?;
    }

    writer.flush()?;
    Ok(())
}

pub fn print_summary<W: Write>(writer: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(writer, "\n{}", "=== SUMMARY ===".bold())?;
    writeln!(writer, "total modules analyzed: {}", summary.total_modules.to_string().cyan())?;
    writeln!(
        writer,
        "modules with dependencies: {}",
        summary.modules_with_dependencies.to_string().yellow().bold()
    )?;
    writeln!(
        writer,
        "modules with no dependencies: {}",
        summary.modules_without_dependencies.to_string().green()
    )?;
    writer.flush()?;
    Ok(())
}

pub fn print_no_modules_message<W: Write>(writer: &mut W) -> io::Result<()> {
    debug!("No modules to rank");
    writeln!(writer, "{} No modules found in the stats file.", "✓".green().bold())?;
    writer.flush()?;
    Ok(())
}

/// Write the summary and full ranking as pretty-printed JSON.
pub fn save_results(path: &Path, report: &AnalysisReport) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("Failed to write results to {}", path.display()))?;
    writer.flush().with_context(|| format!("Failed to write results to {}", path.display()))?;
    info!("Full results saved to {}", path.display());
    Ok(())
}

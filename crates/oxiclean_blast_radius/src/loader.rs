use anyhow::{Context, Result, anyhow};
use log::{debug, trace};
use std::{fs, io, path::Path};

use crate::types::StatsDocument;

pub fn load_stats(path: &Path) -> Result<StatsDocument> {
    debug!("Reading stats file: {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => anyhow!("file {} not found", path.display()),
        _ => anyhow!(e).context(format!("Failed to read {}", path.display())),
    })?;
    trace!("Read {} bytes from {}", content.len(), path.display());

    let doc: StatsDocument = serde_json::from_str(&content)
        .with_context(|| format!("invalid JSON in {}", path.display()))?;
    debug!("Loaded {} module records", doc.modules().len());
    Ok(doc)
}

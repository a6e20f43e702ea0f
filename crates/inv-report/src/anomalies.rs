use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use inv_model::AnomalyRecord;

/// Writes the anomaly report as a pretty-printed UTF-8 JSON array.
pub fn write_anomalies_json(path: &Path, anomalies: &[AnomalyRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(anomalies).context("serialize anomalies")?;
    fs::write(path, format!("{json}\n"))
        .with_context(|| format!("write anomalies: {}", path.display()))?;
    Ok(())
}

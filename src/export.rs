use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::rankings::RankingEntry;

/// Final standings as written to disk by the CLI's `STANDINGS_EXPORT` option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsExport {
    pub match_day: usize,
    pub standings: Vec<RankingEntry>,
}

/// Write the standings as pretty JSON, via a temp file swapped into place so
/// readers never see a half-written file.
pub fn save_standings(path: &Path, export: &StandingsExport) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create export dir {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(export).context("serialize standings")?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("write standings to {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("swap standings into {}", path.display()))?;
    Ok(())
}

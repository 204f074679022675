//! Render options, optionally loaded from a JSON file.
//!
//! ```json
//! { "legacy_error_comments": false, "jobs": 4 }
//! ```
//!
//! Every key is optional. CLI flags are applied on top of whatever is loaded.

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderOptions {
    /// Place inline error comments before the trailing comma
    /// (`key: unknown.x //ERROR: ...,`) as older renderers did.
    #[serde(default)]
    pub legacy_error_comments: bool,

    /// Worker threads for bulk conversion; 1 renders on the calling thread.
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

fn default_jobs() -> usize {
    1
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            legacy_error_comments: false,
            jobs: default_jobs(),
        }
    }
}

impl RenderOptions {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let options: RenderOptions = serde_json::from_str(text).context("parsing render options")?;
        if options.jobs == 0 {
            bail!("jobs must be at least 1");
        }
        Ok(options)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in config {}", path.display()))
    }
}

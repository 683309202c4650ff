//! # Configuration
//!
//! Optional YAML file selecting the variant, starting site, integrity-check
//! delay and output format. Command-line flags override file values; absent
//! both, the defaults apply.
//!
//! ```yaml
//! variant: global-mesh
//! default_site: kyiv-core
//! integrity_delay_ms: 1500
//! format: text
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use guardian_core::{DeploymentSite, Variant};
use guardian_tracker::DEFAULT_INTEGRITY_DELAY_MS;

/// How command output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardianConfig {
    pub variant: Variant,
    /// Starting site for the multi-site variant. Must be unset for the
    /// field kit.
    pub default_site: Option<DeploymentSite>,
    pub integrity_delay_ms: u64,
    pub format: OutputFormat,
}

impl Default for GuardianConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            default_site: None,
            integrity_delay_ms: DEFAULT_INTEGRITY_DELAY_MS,
            format: OutputFormat::default(),
        }
    }
}

impl GuardianConfig {
    /// Load from `path`, or return the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        variant: Option<Variant>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(variant) = variant {
            self.variant = variant;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// Reject combinations the dashboard cannot represent.
    pub fn validate(&self) -> Result<()> {
        if let (Some(site), false) = (self.default_site, self.variant.is_multi_site()) {
            bail!("default_site {site} is set but {} has no deployment sites", self.variant);
        }
        Ok(())
    }

    /// The site a new session should start on.
    pub fn starting_site(&self) -> Option<DeploymentSite> {
        self.default_site.or_else(|| self.variant.default_site())
    }
}

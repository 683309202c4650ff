//! # Stats Subcommand
//!
//! `guardian stats [--site S] [--toggle ID]...`

use std::io::Write;

use anyhow::Result;
use clap::Args;

use guardian_core::{DeploymentSite, EntryId};
use guardian_tracker::SystemClock;

use crate::config::GuardianConfig;
use crate::open_session;
use crate::render::render_stats;

/// Arguments for the stats subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Deployment site (global mesh only).
    #[arg(long)]
    pub site: Option<DeploymentSite>,

    /// Toggle an entry before scoring. Repeatable; applied in order.
    #[arg(long = "toggle", value_name = "ID")]
    pub toggles: Vec<EntryId>,
}

pub fn run_stats(args: &StatsArgs, config: &GuardianConfig, out: &mut dyn Write) -> Result<u8> {
    let session = open_session(config, SystemClock, args.site, &args.toggles)?;
    render_stats(out, &session.stats(), config.format)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_stats_json_after_toggles() {
        let args = StatsArgs {
            site: None,
            toggles: ["coppa-1", "gdpr-9", "coppa-1"]
                .iter()
                .map(|s| EntryId::new(*s).unwrap())
                .collect(),
        };
        let config = GuardianConfig {
            format: OutputFormat::Json,
            ..GuardianConfig::default()
        };
        let mut out = Vec::new();
        run_stats(&args, &config, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["completed"], 1);
        assert_eq!(json["total"], 8);
        assert_eq!(json["progress"], 13);
        assert_eq!(json["categories"].as_array().unwrap().len(), 7);
        assert!(json.get("site").is_none());
    }

    #[test]
    fn test_site_on_field_kit_fails_like_config_site() {
        let args = StatsArgs {
            site: Some(DeploymentSite::KyivCore),
            toggles: Vec::new(),
        };
        let mut out = Vec::new();
        assert!(run_stats(&args, &GuardianConfig::default(), &mut out).is_err());
        assert!(out.is_empty());

        let config = GuardianConfig {
            default_site: Some(DeploymentSite::KyivCore),
            ..GuardianConfig::default()
        };
        let args = StatsArgs {
            site: None,
            toggles: Vec::new(),
        };
        assert!(run_stats(&args, &config, &mut out).is_err());
    }
}

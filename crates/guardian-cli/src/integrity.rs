//! # Integrity Subcommand
//!
//! `guardian integrity [--delay-ms N] [--seed N]`
//!
//! Arms the check, blocks until it is due, and prints the seal. `--seed`
//! makes the seal reproducible.

use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use guardian_tracker::{Action, Clock, IntegrityStatus, SystemClock};

use crate::config::{GuardianConfig, OutputFormat};
use crate::open_session;

/// Arguments for the integrity subcommand.
#[derive(Args, Debug)]
pub struct IntegrityArgs {
    /// Override the configured delay before the seal is issued.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed the seal generator.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run_integrity(
    args: &IntegrityArgs,
    config: &GuardianConfig,
    out: &mut dyn Write,
) -> Result<u8> {
    let mut config = config.clone();
    if let Some(delay_ms) = args.delay_ms {
        config.integrity_delay_ms = delay_ms;
    }
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut session = open_session(&config, SystemClock, None, &[])?;
    session.dispatch(Action::RunIntegrityCheck);

    let seal = loop {
        let Some(due) = session.integrity().due_at() else {
            bail!("integrity delay of {}ms is out of range", config.integrity_delay_ms);
        };
        if let Ok(wait) = (due - session.clock().now()).to_std() {
            std::thread::sleep(wait);
        }
        if let Some(seal) = session.tick(&mut rng) {
            break seal;
        }
    };

    let IntegrityStatus::Sealed { completed_at, .. } = session.integrity().status() else {
        bail!("integrity check did not complete");
    };
    match config.format {
        OutputFormat::Text => writeln!(out, "{seal}")?,
        OutputFormat::Json => {
            let payload = json!({ "seal": seal, "completed_at": completed_at });
            serde_json::to_writer_pretty(&mut *out, &payload)?;
            writeln!(out)?;
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seal_of(args: &IntegrityArgs, config: &GuardianConfig) -> String {
        let mut out = Vec::new();
        assert_eq!(run_integrity(args, config, &mut out).unwrap(), 0);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_seal_format() {
        let args = IntegrityArgs {
            delay_ms: Some(0),
            seed: None,
        };
        let text = seal_of(&args, &GuardianConfig::default());
        let seal = text.trim_end();
        assert!(seal.starts_with("SEAL-"));
        assert_eq!(seal.len(), 17);
        assert!(seal[5..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_seeded_seal_is_reproducible() {
        let args = IntegrityArgs {
            delay_ms: Some(5),
            seed: Some(42),
        };
        let config = GuardianConfig::default();
        assert_eq!(seal_of(&args, &config), seal_of(&args, &config));
    }

    #[test]
    fn test_json_output() {
        let args = IntegrityArgs {
            delay_ms: Some(0),
            seed: Some(1),
        };
        let config = GuardianConfig {
            format: OutputFormat::Json,
            ..GuardianConfig::default()
        };
        let json: serde_json::Value = serde_json::from_str(&seal_of(&args, &config)).unwrap();
        assert!(json["seal"].as_str().unwrap().starts_with("SEAL-"));
        assert!(json["completed_at"].is_string());
    }
}

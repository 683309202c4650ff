//! # guardian-cli — GuardianOS Dashboard Command-Line Interface
//!
//! A terminal front end over `guardian-tracker`. Each invocation opens a
//! fresh session from the compiled-in content pack, applies the requested
//! actions, renders, and exits. Nothing is written to disk.
//!
//! ## Subcommands
//!
//! - `view`: render one dashboard view (manual, registry, statement, mesh,
//!   languages)
//! - `stats`: print the compliance score for the current scope
//! - `integrity`: run the integrity check and print its seal
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from behaviour; handlers delegate to
//!   `guardian-tracker` and only format the result.
//! - Handlers write to a caller-supplied writer so they can be tested.

pub mod config;
pub mod integrity;
pub mod render;
pub mod stats;
pub mod view;

use anyhow::{bail, Result};

use guardian_core::{DeploymentSite, EntryId};
use guardian_tracker::{Action, Clock, DashboardSession};

use crate::config::GuardianConfig;

/// Open a session for `config` and apply the starting site, an optional
/// site override, then `toggles` in order.
pub fn open_session<C: Clock>(
    config: &GuardianConfig,
    clock: C,
    site: Option<DeploymentSite>,
    toggles: &[EntryId],
) -> Result<DashboardSession<C>> {
    config.validate()?;
    if let (Some(site), false) = (site, config.variant.is_multi_site()) {
        bail!("site {site} was given but {} has no deployment sites", config.variant);
    }
    let mut session =
        DashboardSession::with_clock(config.variant, config.integrity_delay_ms, clock)?;
    if let Some(site) = site.or_else(|| config.starting_site()) {
        session.dispatch(Action::SetSiteFilter(site));
    }
    for id in toggles {
        if session.tracker().entry(id).is_none() {
            tracing::info!(%id, "toggle matched no entry");
        }
        session.dispatch(Action::Toggle(id.clone()));
    }
    Ok(session)
}

//! # View Subcommand
//!
//! `guardian view <VIEW> [--category C] [--site S] [--toggle ID]...`

use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;

use guardian_core::{DeploymentSite, EntryId, ViewMode};
use guardian_tracker::{Action, CategoryFilter, SystemClock};

use crate::config::GuardianConfig;
use crate::open_session;
use crate::render::render_view;

/// Arguments for the view subcommand.
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// View to render: manual, registry, statement, mesh, languages.
    pub view: ViewMode,

    /// Category tab: `all` or a category slug (e.g. `coppa`).
    #[arg(long, default_value = "all")]
    pub category: CategoryFilter,

    /// Deployment site (global mesh only), e.g. `kyiv-core`.
    #[arg(long)]
    pub site: Option<DeploymentSite>,

    /// Toggle an entry before rendering. Repeatable; applied in order.
    #[arg(long = "toggle", value_name = "ID")]
    pub toggles: Vec<EntryId>,
}

/// Render the requested view. Returns the process exit code.
pub fn run_view(args: &ViewArgs, config: &GuardianConfig, out: &mut dyn Write) -> Result<u8> {
    if !config.variant.offers(args.view) {
        bail!("view {} is not available in {}", args.view, config.variant);
    }
    let mut session = open_session(config, SystemClock, args.site, &args.toggles)?;
    session.dispatch(Action::SetCategoryFilter(args.category));
    session.dispatch(Action::SetView(args.view));
    render_view(out, &session, config.format)?;
    Ok(0)
}

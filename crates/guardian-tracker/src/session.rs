//! # Dashboard Session
//!
//! The single state owner for one dashboard session: the tracker, the
//! selected view, and the integrity check. User interaction is expressed as
//! [`Action`]s and applied one at a time, either in place with
//! [`dispatch`](DashboardSession::dispatch) or as a snapshot transition with
//! [`reduce`](DashboardSession::reduce).
//!
//! Nothing is persisted. A new session starts from the content pack's seed.

use rand::RngCore;

use guardian_core::{DeploymentSite, EntryId, Variant, ViewMode};
use guardian_pack::ContentPack;

use crate::error::TrackerError;
use crate::filter::CategoryFilter;
use crate::integrity::{Clock, IntegrityMonitor, SystemClock};
use crate::stats::ComplianceStats;
use crate::tracker::ComplianceTracker;

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Flip one entry between pending and completed.
    Toggle(EntryId),
    /// Select a category tab.
    SetCategoryFilter(CategoryFilter),
    /// Select a deployment site (multi-site only).
    SetSiteFilter(DeploymentSite),
    /// Switch the displayed view.
    SetView(ViewMode),
    /// Arm the integrity check.
    RunIntegrityCheck,
}

/// State for one dashboard session.
#[derive(Debug, Clone)]
pub struct DashboardSession<C: Clock = SystemClock> {
    pack: ContentPack,
    tracker: ComplianceTracker,
    view: ViewMode,
    integrity: IntegrityMonitor,
    clock: C,
}

impl DashboardSession<SystemClock> {
    /// Start a session on the wall clock.
    pub fn new(variant: Variant, integrity_delay_ms: u64) -> Result<Self, TrackerError> {
        Self::with_clock(variant, integrity_delay_ms, SystemClock)
    }
}

impl<C: Clock> DashboardSession<C> {
    /// Start a session with an injected clock.
    pub fn with_clock(
        variant: Variant,
        integrity_delay_ms: u64,
        clock: C,
    ) -> Result<Self, TrackerError> {
        let pack = ContentPack::for_variant(variant);
        let tracker = ComplianceTracker::from_pack(&pack)?;
        tracing::debug!(%variant, entries = tracker.entries().len(), "session started");
        Ok(Self {
            pack,
            tracker,
            view: ViewMode::default(),
            integrity: IntegrityMonitor::new(integrity_delay_ms),
            clock,
        })
    }

    pub fn variant(&self) -> Variant {
        self.pack.variant()
    }

    pub fn pack(&self) -> &ContentPack {
        &self.pack
    }

    pub fn tracker(&self) -> &ComplianceTracker {
        &self.tracker
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn integrity(&self) -> &IntegrityMonitor {
        &self.integrity
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Stats for the current scope.
    pub fn stats(&self) -> ComplianceStats {
        self.tracker.compute_stats()
    }

    /// Apply one action in place.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Toggle(id) => {
                self.tracker.toggle(&id);
            }
            Action::SetCategoryFilter(filter) => self.tracker.set_category_filter(filter),
            Action::SetSiteFilter(site) => self.tracker.set_site_filter(site),
            Action::SetView(view) => {
                if self.variant().offers(view) {
                    self.view = view;
                } else {
                    tracing::debug!(%view, variant = %self.variant(), "view not offered");
                }
            }
            Action::RunIntegrityCheck => {
                self.integrity.run(&self.clock);
            }
        }
    }

    /// Snapshot form of [`dispatch`](Self::dispatch).
    pub fn reduce(mut self, action: Action) -> Self {
        self.dispatch(action);
        self
    }

    /// Complete the integrity check if it is due. See [`IntegrityMonitor::poll`].
    pub fn tick(&mut self, rng: &mut impl RngCore) -> Option<String> {
        self.integrity.poll(&self.clock, rng)
    }
}

//! # guardian-tracker — Compliance Scoring and Dashboard State
//!
//! The only part of the dashboard with behaviour. Everything else is static
//! content from `guardian-pack`.
//!
//! - **Tracker** (`tracker.rs`): owns the session's checklist entries,
//!   toggles their status, filters them by category and site, and scores
//!   completion overall and per category.
//!
//! - **Stats** (`stats.rs`): the scoring output and the divide-by-zero-safe
//!   rounded percentage.
//!
//! - **Integrity** (`integrity.rs`): the one-shot integrity check, driven by
//!   an injected clock and RNG.
//!
//! - **Session** (`session.rs`): the single state owner for one dashboard
//!   session, updated through an `Action` reducer.
//!
//! ## Status State Machine
//!
//! ```text
//! Pending ◀──toggle──▶ Completed
//! ```
//!
//! No terminal state. `Critical` is declared in `guardian-core` but no seed
//! or transition ever produces it.
//!
//! ## Crate Policy
//!
//! - Tracker operations are total: unknown ids and out-of-variant filters
//!   are ignored, never errors.
//! - Only construction validates, returning `TrackerError`.

pub mod error;
pub mod filter;
pub mod integrity;
pub mod session;
pub mod stats;
pub mod tracker;

pub use error::TrackerError;
pub use filter::CategoryFilter;
pub use integrity::{
    Clock, IntegrityMonitor, IntegrityStatus, ManualClock, SystemClock,
    DEFAULT_INTEGRITY_DELAY_MS,
};
pub use session::{Action, DashboardSession};
pub use stats::{percentage, BadgeTone, CategoryStat, ComplianceStats};
pub use tracker::ComplianceTracker;

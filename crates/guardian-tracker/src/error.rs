//! # Tracker Errors
//!
//! Raised only when a tracker is built from a seed list that breaks the
//! checklist invariants. Once built, no tracker operation fails.

use thiserror::Error;

use guardian_core::{ComplianceCategory, DeploymentSite, EntryId, GuardianError, Variant};

/// Errors that can occur while constructing a tracker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// Two entries share an id.
    #[error("duplicate entry id {0}")]
    DuplicateId(EntryId),

    /// An entry uses a category the variant does not track.
    #[error("entry {id} uses category {category}, which {variant} does not track")]
    CategoryOutsideVariant {
        /// Offending entry.
        id: EntryId,
        /// Its category.
        category: ComplianceCategory,
        /// The variant being built.
        variant: Variant,
    },

    /// A multi-site entry has no site.
    #[error("entry {id} has no deployment site")]
    MissingSite {
        /// Offending entry.
        id: EntryId,
    },

    /// A single-site entry carries a site.
    #[error("entry {id} carries site {site} in a single-site variant")]
    UnexpectedSite {
        /// Offending entry.
        id: EntryId,
        /// The site it carries.
        site: DeploymentSite,
    },

    /// The seed list could not be converted into entries.
    #[error("invalid seed: {0}")]
    Seed(#[from] GuardianError),
}

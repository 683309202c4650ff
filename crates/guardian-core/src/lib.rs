//! # guardian-core — Foundational Types for the GuardianOS Field Kit
//!
//! Defines the vocabulary shared by every other crate in the workspace:
//! compliance categories, deployment sites, checklist entries, and the two
//! dashboard variants. Every other `guardian-*` crate depends on this one;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enums, never free text.** Categories, sites, statuses and
//!    requirements are enums with exhaustive `match`. Adding a category
//!    forces every per-category breakdown to handle it at compile time.
//!
//! 2. **One `ComplianceCategory` for both variants.** Each `Variant`
//!    declares which subset of categories it tracks, in display order.
//!
//! 3. **`EntryId` newtype.** Checklist identity is never a bare string.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `guardian-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod domain;
pub mod entry;
pub mod error;
pub mod variant;

pub use domain::{ComplianceCategory, DeploymentSite, COMPLIANCE_CATEGORY_COUNT};
pub use entry::{ChecklistEntry, EntryId, EntryStatus, Requirement};
pub use error::GuardianError;
pub use variant::{Variant, ViewMode};

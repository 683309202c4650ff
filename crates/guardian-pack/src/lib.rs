//! # guardian-pack — Static Content Packs
//!
//! The read-only dataset each dashboard variant is rendered from. Nothing in
//! this crate mutates; the tracker copies the checklist seed once per
//! session and owns it from then on.
//!
//! - **Checklist** (`checklist.rs`): seed entries per variant.
//! - **Manual** (`manual.rs`): hardware specs, calibration steps, build
//!   pipeline, system configuration files, next decisions.
//! - **Statement** (`statement.rs`): core guarantees and the ethics statement.
//! - **Mesh** (`mesh.rs`): mesh nodes, language packs, coherence, the
//!   pictogram guide (global mesh only).
//!
//! ## Crate Policy
//!
//! - Depends only on `guardian-core` internally.
//! - All tables are `&'static` data; accessors never allocate except when
//!   building owned checklist entries for a session.

pub mod checklist;
pub mod manual;
pub mod mesh;
pub mod statement;

use guardian_core::{ChecklistEntry, GuardianError, Variant};

pub use checklist::SeedEntry;
pub use manual::{BuildStep, ConfigFile, Decision, HardwareSpec};
pub use mesh::{mean_coherence, LanguagePack, MeshNode, NodeStatus, PackStatus};
pub use statement::{EthicsStatement, Guarantee};

/// All static content for one dashboard variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPack {
    variant: Variant,
}

impl ContentPack {
    /// The content pack rendered by `variant`.
    pub fn for_variant(variant: Variant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Raw seed table.
    pub fn seed(&self) -> &'static [SeedEntry] {
        checklist::seed(self.variant)
    }

    /// Owned checklist entries, ready to hand to a tracker.
    pub fn checklist(&self) -> Result<Vec<ChecklistEntry>, GuardianError> {
        self.seed().iter().map(SeedEntry::to_entry).collect()
    }

    pub fn hardware(&self) -> &'static [HardwareSpec] {
        manual::hardware(self.variant)
    }

    pub fn calibration_steps(&self) -> &'static [&'static str] {
        manual::calibration_steps(self.variant)
    }

    pub fn build_steps(&self) -> &'static [BuildStep] {
        manual::build_steps(self.variant)
    }

    pub fn system_configs(&self) -> &'static [ConfigFile] {
        manual::system_configs(self.variant)
    }

    pub fn next_decisions(&self) -> &'static [Decision] {
        manual::next_decisions(self.variant)
    }

    pub fn core_guarantees(&self) -> &'static [Guarantee] {
        statement::core_guarantees(self.variant)
    }

    pub fn statement(&self) -> &'static EthicsStatement {
        statement::statement(self.variant)
    }

    /// Mesh nodes. Empty for the field kit.
    pub fn nodes(&self) -> &'static [MeshNode] {
        mesh::nodes(self.variant)
    }

    /// Language packs. Empty for the field kit.
    pub fn language_packs(&self) -> &'static [LanguagePack] {
        mesh::language_packs(self.variant)
    }

    /// The full single-file build script, when the variant ships one.
    pub fn full_build_script(&self) -> Option<&'static str> {
        mesh::full_build_script(self.variant)
    }

    /// ASCII node map, when the variant ships one.
    pub fn pictogram_guide(&self) -> Option<&'static str> {
        mesh::pictogram_guide(self.variant)
    }

    /// Mean coherence of this pack's nodes.
    pub fn coherence(&self) -> f64 {
        mean_coherence(self.nodes())
    }
}

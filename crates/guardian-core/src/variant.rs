//! # Dashboard Variants and Views
//!
//! The dashboard ships in two variants that share all logic and differ in
//! content: the single-site **Field Kit** and the multi-site **Global Mesh**.
//! A variant fixes the category set the breakdown iterates, whether entries
//! carry a site, and which views are offered.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{ComplianceCategory, DeploymentSite};
use crate::error::GuardianError;

/// Which dashboard is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Single-site field kit. Entries carry no site.
    #[default]
    FieldKit,
    /// Multi-site mesh. Every entry carries a site.
    GlobalMesh,
}

impl Variant {
    /// The ordered category set whose breakdown this variant displays.
    pub fn categories(&self) -> &'static [ComplianceCategory] {
        use ComplianceCategory::*;
        match self {
            Self::FieldKit => &[Coppa, Gdpr, Hardware, Ethics, Disposal, Audit, Licensing],
            Self::GlobalMesh => &[
                Syntropic,
                Coppa,
                Gdpr,
                TexasRegulatory,
                Thermal,
                Audit,
                Licensing,
                Clinical,
                Failsafe,
            ],
        }
    }

    /// Whether `category` is tracked by this variant.
    pub fn tracks(&self, category: ComplianceCategory) -> bool {
        self.categories().contains(&category)
    }

    /// Whether entries are scoped by deployment site.
    pub fn is_multi_site(&self) -> bool {
        matches!(self, Self::GlobalMesh)
    }

    /// The site filter a fresh session starts with.
    pub fn default_site(&self) -> Option<DeploymentSite> {
        match self {
            Self::FieldKit => None,
            Self::GlobalMesh => Some(DeploymentSite::DEFAULT),
        }
    }

    /// Views offered by this variant, in navigation order.
    pub fn views(&self) -> &'static [ViewMode] {
        match self {
            Self::FieldKit => &[ViewMode::Manual, ViewMode::Registry, ViewMode::Statement],
            Self::GlobalMesh => &[
                ViewMode::Manual,
                ViewMode::Registry,
                ViewMode::Mesh,
                ViewMode::Languages,
                ViewMode::Statement,
            ],
        }
    }

    /// Whether `view` can be selected in this variant.
    pub fn offers(&self, view: ViewMode) -> bool {
        self.views().contains(&view)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::FieldKit => "GuardianOS Field Kit",
            Self::GlobalMesh => "GuardianOS Vector Control",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FieldKit => "field-kit",
            Self::GlobalMesh => "global-mesh",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = GuardianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "field-kit" => Ok(Self::FieldKit),
            "global-mesh" => Ok(Self::GlobalMesh),
            other => Err(GuardianError::unknown("variant", other)),
        }
    }
}

/// A named dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Hardware, calibration, build pipeline and configuration.
    #[default]
    Manual,
    /// Compliance checklist with scores and filters.
    Registry,
    /// Ethics and safety statement.
    Statement,
    /// Mesh node table and coherence (global mesh only).
    Mesh,
    /// Language packs (global mesh only).
    Languages,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Registry => "registry",
            Self::Statement => "statement",
            Self::Mesh => "mesh",
            Self::Languages => "languages",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = GuardianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(Self::Manual),
            "registry" => Ok(Self::Registry),
            "statement" => Ok(Self::Statement),
            "mesh" => Ok(Self::Mesh),
            "languages" => Ok(Self::Languages),
            other => Err(GuardianError::unknown("view", other)),
        }
    }
}

//! # Compliance Categories and Deployment Sites
//!
//! The single definition of every category and site used anywhere in the
//! dashboard. Every `match` on these enums must be exhaustive so that adding
//! a member forces the per-category breakdown, the renderers and the content
//! pack to handle it.
//!
//! `Licensing`, `Clinical` and `Failsafe` are declared but never populated
//! by any seed list. They stay as inert members and still show up in the
//! breakdown of the variants that declare them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GuardianError;

/// A fixed classification tag grouping checklist entries.
///
/// | Slug | Display label | Variant |
/// |------|---------------|---------|
/// | `coppa` | COPPA Compliance | both |
/// | `gdpr` | GDPR Article 9 | both |
/// | `hardware` | Hardware Safety | field kit |
/// | `ethics` | Ethical Deployment | field kit |
/// | `disposal` | Secure Disposal | field kit |
/// | `audit` | Auditable Design | both |
/// | `licensing` | Nonprofit Licensing | both |
/// | `syntropic` | Syntropic Coherence | global mesh |
/// | `texas-regulatory` | Texas Regulatory | global mesh |
/// | `thermal` | Thermal Resilience | global mesh |
/// | `clinical` | Clinical Review | global mesh |
/// | `failsafe` | Failsafe Design | global mesh |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceCategory {
    /// Children's Online Privacy Protection Act obligations.
    Coppa,
    /// GDPR Article 9 special-category data handling.
    Gdpr,
    /// Physical hardware safety.
    Hardware,
    /// Ethical deployment commitments.
    Ethics,
    /// Secure disposal of storage media.
    Disposal,
    /// Auditable, publicly inspectable design.
    Audit,
    /// Nonprofit licensing terms.
    Licensing,
    /// Mesh-wide coherence between deployed units.
    Syntropic,
    /// Regional (Texas) regulatory requirements.
    TexasRegulatory,
    /// Thermal hardening of enclosed units.
    Thermal,
    /// Clinical review of affirmation content.
    Clinical,
    /// Failsafe behaviour under power or hardware faults.
    Failsafe,
}

/// Total number of compliance categories.
pub const COMPLIANCE_CATEGORY_COUNT: usize = 12;

impl ComplianceCategory {
    /// Every category, in declaration order.
    pub fn all() -> &'static [ComplianceCategory] {
        &[
            Self::Coppa,
            Self::Gdpr,
            Self::Hardware,
            Self::Ethics,
            Self::Disposal,
            Self::Audit,
            Self::Licensing,
            Self::Syntropic,
            Self::TexasRegulatory,
            Self::Thermal,
            Self::Clinical,
            Self::Failsafe,
        ]
    }

    /// The kebab-case slug, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coppa => "coppa",
            Self::Gdpr => "gdpr",
            Self::Hardware => "hardware",
            Self::Ethics => "ethics",
            Self::Disposal => "disposal",
            Self::Audit => "audit",
            Self::Licensing => "licensing",
            Self::Syntropic => "syntropic",
            Self::TexasRegulatory => "texas-regulatory",
            Self::Thermal => "thermal",
            Self::Clinical => "clinical",
            Self::Failsafe => "failsafe",
        }
    }

    /// Human-readable label shown on filter tabs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Coppa => "COPPA Compliance",
            Self::Gdpr => "GDPR Article 9",
            Self::Hardware => "Hardware Safety",
            Self::Ethics => "Ethical Deployment",
            Self::Disposal => "Secure Disposal",
            Self::Audit => "Auditable Design",
            Self::Licensing => "Nonprofit Licensing",
            Self::Syntropic => "Syntropic Coherence",
            Self::TexasRegulatory => "Texas Regulatory",
            Self::Thermal => "Thermal Resilience",
            Self::Clinical => "Clinical Review",
            Self::Failsafe => "Failsafe Design",
        }
    }

    /// First word of the label, used on compact badges.
    pub fn short_label(&self) -> &'static str {
        let label = self.label();
        label.split(' ').next().unwrap_or(label)
    }
}

impl std::fmt::Display for ComplianceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceCategory {
    type Err = GuardianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| GuardianError::unknown("category", s))
    }
}

/// A deployment location in the multi-site variant.
///
/// `Global` is a sentinel: an entry tagged `Global` applies to every site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentSite {
    /// Applies to every site.
    Global,
    /// Houston, Texas.
    HoustonHub,
    /// London.
    LondonReach,
    /// Kyiv.
    KyivCore,
    /// Nairobi.
    NairobiNode,
    /// Sydney.
    SydneyLink,
    /// São Paulo.
    SaoPauloArc,
}

impl DeploymentSite {
    /// Every site, `Global` first.
    pub fn all() -> &'static [DeploymentSite] {
        &[
            Self::Global,
            Self::HoustonHub,
            Self::LondonReach,
            Self::KyivCore,
            Self::NairobiNode,
            Self::SydneyLink,
            Self::SaoPauloArc,
        ]
    }

    /// The site selected when a multi-site session starts.
    pub const DEFAULT: DeploymentSite = DeploymentSite::HoustonHub;

    /// The kebab-case slug, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::HoustonHub => "houston-hub",
            Self::LondonReach => "london-reach",
            Self::KyivCore => "kyiv-core",
            Self::NairobiNode => "nairobi-node",
            Self::SydneyLink => "sydney-link",
            Self::SaoPauloArc => "sao-paulo-arc",
        }
    }

    /// Human-readable site name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::HoustonHub => "Houston Hub",
            Self::LondonReach => "London Reach",
            Self::KyivCore => "Kyiv Core",
            Self::NairobiNode => "Nairobi Node",
            Self::SydneyLink => "Sydney Link",
            Self::SaoPauloArc => "São Paulo Arc",
        }
    }

    /// Whether an entry tagged with `self` applies when `active` is selected.
    pub fn applies_to(&self, active: DeploymentSite) -> bool {
        *self == active || *self == Self::Global
    }
}

impl std::fmt::Display for DeploymentSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentSite {
    type Err = GuardianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|site| site.as_str() == s)
            .ok_or_else(|| GuardianError::unknown("site", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_categories_count() {
        assert_eq!(ComplianceCategory::all().len(), COMPLIANCE_CATEGORY_COUNT);
    }

    #[test]
    fn test_all_categories_unique() {
        let mut seen = std::collections::HashSet::new();
        for c in ComplianceCategory::all() {
            assert!(seen.insert(c), "Duplicate category: {c}");
        }
    }

    #[test]
    fn test_category_slug_parses_back() {
        for c in ComplianceCategory::all() {
            let parsed: ComplianceCategory = c.as_str().parse().unwrap();
            assert_eq!(*c, parsed);
        }
    }

    #[test]
    fn test_category_serde_matches_slug() {
        for c in ComplianceCategory::all() {
            let json = serde_json::to_string(c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.as_str()));
        }
    }

    #[test]
    fn test_category_from_str_invalid() {
        assert!("COPPA".parse::<ComplianceCategory>().is_err());
        assert!("".parse::<ComplianceCategory>().is_err());
        let err = "bogus".parse::<ComplianceCategory>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category: \"bogus\"");
    }

    #[test]
    fn test_short_label_is_first_word() {
        assert_eq!(ComplianceCategory::Coppa.short_label(), "COPPA");
        assert_eq!(ComplianceCategory::Gdpr.short_label(), "GDPR");
        assert_eq!(ComplianceCategory::TexasRegulatory.short_label(), "Texas");
    }

    #[test]
    fn test_site_slug_parses_back() {
        for s in DeploymentSite::all() {
            let parsed: DeploymentSite = s.as_str().parse().unwrap();
            assert_eq!(*s, parsed);
        }
        assert!("houston".parse::<DeploymentSite>().is_err());
    }

    #[test]
    fn test_global_applies_everywhere() {
        for s in DeploymentSite::all() {
            assert!(DeploymentSite::Global.applies_to(*s));
        }
        assert!(DeploymentSite::HoustonHub.applies_to(DeploymentSite::HoustonHub));
        assert!(!DeploymentSite::HoustonHub.applies_to(DeploymentSite::KyivCore));
    }

    #[test]
    fn test_default_site() {
        assert_eq!(DeploymentSite::DEFAULT, DeploymentSite::HoustonHub);
    }
}

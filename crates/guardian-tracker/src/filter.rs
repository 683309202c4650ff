//! # Category Filter

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use guardian_core::{ComplianceCategory, GuardianError};

/// Which category tab is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every category passes.
    #[default]
    All,
    /// Only entries of this category pass.
    Only(ComplianceCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: ComplianceCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }
}

impl From<ComplianceCategory> for CategoryFilter {
    fn from(category: ComplianceCategory) -> Self {
        Self::Only(category)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => f.write_str(category.as_str()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = GuardianError;

    /// `"all"` or a category slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = GuardianError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_everything() {
        for c in ComplianceCategory::all() {
            assert!(CategoryFilter::All.matches(*c));
        }
    }

    #[test]
    fn test_only_matches_one() {
        let f = CategoryFilter::Only(ComplianceCategory::Audit);
        assert!(f.matches(ComplianceCategory::Audit));
        assert!(!f.matches(ComplianceCategory::Coppa));
    }

    #[test]
    fn test_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "texas-regulatory".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(ComplianceCategory::TexasRegulatory)
        );
        assert!("All".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&CategoryFilter::Only(ComplianceCategory::Gdpr)).unwrap();
        assert_eq!(json, "\"gdpr\"");
        let parsed: CategoryFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, CategoryFilter::All);
    }
}

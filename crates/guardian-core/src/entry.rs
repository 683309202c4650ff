//! # Checklist Entries
//!
//! A checklist entry is one compliance item. Its identity, category, site and
//! text are fixed when the seed list is loaded; only `status` changes
//! afterwards, and only through the tracker's toggle.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{ComplianceCategory, DeploymentSite};
use crate::error::GuardianError;

/// Stable identity of a checklist entry (e.g. `"coppa-1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntryId(String);

impl EntryId {
    /// Create an entry id. Rejects the empty string.
    pub fn new(id: impl Into<String>) -> Result<Self, GuardianError> {
        let id = id.into();
        if id.is_empty() {
            return Err(GuardianError::EmptyEntryId);
        }
        Ok(Self(id))
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EntryId {
    type Error = GuardianError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntryId> for String {
    fn from(id: EntryId) -> Self {
        id.0
    }
}

impl FromStr for EntryId {
    type Err = GuardianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Completion status of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// Not yet verified.
    Pending,
    /// Verified.
    Completed,
    /// Declared but never assigned by any seed or transition.
    Critical,
}

impl EntryStatus {
    /// The status after a toggle: `Completed` becomes `Pending`, anything
    /// else becomes `Completed`.
    pub fn toggled(self) -> Self {
        match self {
            Self::Completed => Self::Pending,
            Self::Pending | Self::Critical => Self::Completed,
        }
    }

    /// Whether this status counts towards progress.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How binding an entry is. Display-only; never affects scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Mandatory,
    Recommended,
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Mandatory => "mandatory",
            Self::Recommended => "recommended",
        })
    }
}

/// One compliance checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    pub id: EntryId,
    pub category: ComplianceCategory,
    /// Present only in the multi-site variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<DeploymentSite>,
    pub label: String,
    pub description: String,
    pub status: EntryStatus,
    pub requirement: Requirement,
}

impl ChecklistEntry {
    /// Whether this entry counts as completed.
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_rejects_empty() {
        assert_eq!(EntryId::new(""), Err(GuardianError::EmptyEntryId));
        assert!("".parse::<EntryId>().is_err());
        assert_eq!(EntryId::new("coppa-1").unwrap().as_str(), "coppa-1");
    }

    #[test]
    fn test_entry_id_serializes_as_plain_string() {
        let id = EntryId::new("gdpr-9").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"gdpr-9\"");
        let parsed: EntryId = serde_json::from_str("\"gdpr-9\"").unwrap();
        assert_eq!(parsed, id);
        assert!(serde_json::from_str::<EntryId>("\"\"").is_err());
    }

    #[test]
    fn test_toggle_flips_pending_and_completed() {
        assert_eq!(EntryStatus::Pending.toggled(), EntryStatus::Completed);
        assert_eq!(EntryStatus::Completed.toggled(), EntryStatus::Pending);
        assert_eq!(
            EntryStatus::Pending.toggled().toggled(),
            EntryStatus::Pending
        );
    }

    #[test]
    fn test_only_completed_counts() {
        assert!(EntryStatus::Completed.is_completed());
        assert!(!EntryStatus::Pending.is_completed());
        assert!(!EntryStatus::Critical.is_completed());
    }

    #[test]
    fn test_entry_without_site_omits_field() {
        let entry = ChecklistEntry {
            id: EntryId::new("audit-1").unwrap(),
            category: ComplianceCategory::Audit,
            site: None,
            label: "Open build".into(),
            description: "Reproducible image".into(),
            status: EntryStatus::Pending,
            requirement: Requirement::Recommended,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("site").is_none());
        assert_eq!(json["status"], "pending");
        assert_eq!(json["requirement"], "recommended");
        assert_eq!(json["category"], "audit");
    }
}

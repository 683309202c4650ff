//! # Compliance Tracker
//!
//! Holds the session's checklist entries in seed order. Membership is fixed
//! at construction; only `status` changes afterwards, through [`toggle`].
//!
//! ## Scope
//!
//! In the single-site variant every entry is in scope. In the multi-site
//! variant an entry is in scope when its site is the active site filter or
//! `Global`. The category filter narrows the visible list but never the
//! scope that stats are computed over.
//!
//! [`toggle`]: ComplianceTracker::toggle

use std::collections::HashSet;

use serde::Serialize;

use guardian_core::{ChecklistEntry, DeploymentSite, EntryId, Variant};
use guardian_pack::ContentPack;

use crate::error::TrackerError;
use crate::filter::CategoryFilter;
use crate::stats::{percentage, CategoryStat, ComplianceStats};

/// Checklist state for one dashboard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceTracker {
    variant: Variant,
    entries: Vec<ChecklistEntry>,
    category_filter: CategoryFilter,
    site_filter: Option<DeploymentSite>,
}

impl ComplianceTracker {
    /// Build a tracker over `entries`, validating the checklist invariants:
    /// unique ids, categories tracked by `variant`, and a site on every entry
    /// iff `variant` is multi-site.
    pub fn new(variant: Variant, entries: Vec<ChecklistEntry>) -> Result<Self, TrackerError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(&entry.id) {
                return Err(TrackerError::DuplicateId(entry.id.clone()));
            }
            if !variant.tracks(entry.category) {
                return Err(TrackerError::CategoryOutsideVariant {
                    id: entry.id.clone(),
                    category: entry.category,
                    variant,
                });
            }
            match (variant.is_multi_site(), entry.site) {
                (true, None) => {
                    return Err(TrackerError::MissingSite {
                        id: entry.id.clone(),
                    })
                }
                (false, Some(site)) => {
                    return Err(TrackerError::UnexpectedSite {
                        id: entry.id.clone(),
                        site,
                    })
                }
                _ => {}
            }
        }

        Ok(Self {
            variant,
            entries,
            category_filter: CategoryFilter::All,
            site_filter: variant.default_site(),
        })
    }

    /// Build a tracker from a content pack's seed list.
    pub fn from_pack(pack: &ContentPack) -> Result<Self, TrackerError> {
        Self::new(pack.variant(), pack.checklist()?)
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Every entry, in seed order.
    pub fn entries(&self) -> &[ChecklistEntry] {
        &self.entries
    }

    pub fn entry(&self, id: &EntryId) -> Option<&ChecklistEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn category_filter(&self) -> CategoryFilter {
        self.category_filter
    }

    /// Active site; `None` in the single-site variant.
    pub fn site_filter(&self) -> Option<DeploymentSite> {
        self.site_filter
    }

    /// Flip the entry's status between pending and completed.
    ///
    /// Unknown ids are ignored. Returns whether an entry was toggled.
    pub fn toggle(&mut self, id: &EntryId) -> bool {
        match self.entries.iter_mut().find(|e| &e.id == id) {
            Some(entry) => {
                let from = entry.status;
                entry.status = from.toggled();
                tracing::debug!(id = %id, %from, to = %entry.status, "toggled entry");
                true
            }
            None => {
                tracing::debug!(id = %id, "toggle ignored: no such entry");
                false
            }
        }
    }

    /// Replace the category filter.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.category_filter = filter;
    }

    /// Replace the site filter. Ignored in the single-site variant.
    pub fn set_site_filter(&mut self, site: DeploymentSite) {
        if !self.variant.is_multi_site() {
            tracing::debug!(
                %site,
                variant = %self.variant,
                "site filter ignored: single-site variant"
            );
            return;
        }
        self.site_filter = Some(site);
    }

    /// Whether `entry` counts towards stats under the active site filter.
    pub fn in_scope(&self, entry: &ChecklistEntry) -> bool {
        match (self.site_filter, entry.site) {
            (None, _) => true,
            (Some(active), Some(site)) => site.applies_to(active),
            (Some(_), None) => false,
        }
    }

    /// Entries in scope that pass the category filter, in seed order.
    pub fn visible_entries(&self) -> impl Iterator<Item = &ChecklistEntry> + '_ {
        self.entries
            .iter()
            .filter(move |e| self.in_scope(e) && self.category_filter.matches(e.category))
    }

    /// Score the current scope. The category filter is not applied.
    pub fn compute_stats(&self) -> ComplianceStats {
        let scoped: Vec<&ChecklistEntry> =
            self.entries.iter().filter(|e| self.in_scope(e)).collect();
        let total = scoped.len();
        let completed = scoped.iter().filter(|e| e.is_completed()).count();

        let categories = self
            .variant
            .categories()
            .iter()
            .map(|&category| {
                let (done, count) = scoped
                    .iter()
                    .filter(|e| e.category == category)
                    .fold((0, 0), |(done, count), e| {
                        (done + usize::from(e.is_completed()), count + 1)
                    });
                CategoryStat::new(category, done, count)
            })
            .collect();

        ComplianceStats {
            site: self.site_filter,
            total,
            completed,
            progress: percentage(completed, total),
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guardian_core::{ComplianceCategory, EntryStatus, Requirement};

    fn id(s: &str) -> EntryId {
        EntryId::new(s).unwrap()
    }

    fn field_kit() -> ComplianceTracker {
        ComplianceTracker::from_pack(&ContentPack::for_variant(Variant::FieldKit)).unwrap()
    }

    fn global_mesh() -> ComplianceTracker {
        ComplianceTracker::from_pack(&ContentPack::for_variant(Variant::GlobalMesh)).unwrap()
    }

    fn entry(
        raw_id: &str,
        category: ComplianceCategory,
        site: Option<DeploymentSite>,
    ) -> ChecklistEntry {
        ChecklistEntry {
            id: id(raw_id),
            category,
            site,
            label: raw_id.to_uppercase(),
            description: String::new(),
            status: EntryStatus::Pending,
            requirement: Requirement::Mandatory,
        }
    }

    // ── Seed stats ───────────────────────────────────────────────────

    #[test]
    fn test_field_kit_starts_at_zero() {
        let stats = field_kit().compute_stats();
        assert_eq!(stats.total, 8);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.progress, 0);
        assert_eq!(stats.site, None);
    }

    #[test]
    fn test_global_mesh_starts_complete() {
        let stats = global_mesh().compute_stats();
        assert_eq!(stats.site, Some(DeploymentSite::HoustonHub));
        assert_eq!(stats.total, 6);
        assert_eq!(stats.completed, 6);
        assert_eq!(stats.progress, 100);
    }

    #[test]
    fn test_toggle_coppa_gives_thirteen_percent() {
        let mut t = field_kit();
        assert!(t.toggle(&id("coppa-1")));
        let stats = t.compute_stats();
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.progress, 13);
        assert_eq!(
            stats.category(ComplianceCategory::Coppa).unwrap().percentage,
            50
        );
    }

    // ── Toggle ───────────────────────────────────────────────────────

    #[test]
    fn test_double_toggle_restores_status() {
        let mut t = field_kit();
        let before = t.clone();
        t.toggle(&id("hw-2"));
        assert_ne!(t, before);
        t.toggle(&id("hw-2"));
        assert_eq!(t, before);
    }

    #[test]
    fn test_toggle_affects_exactly_one_entry() {
        let mut t = field_kit();
        let before = t.entries().to_vec();
        t.toggle(&id("ethics-1"));
        let changed: Vec<_> = before
            .iter()
            .zip(t.entries())
            .filter(|(a, b)| a != b)
            .map(|(a, _)| a.id.as_str())
            .collect();
        assert_eq!(changed, ["ethics-1"]);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut t = field_kit();
        let before = t.clone();
        assert!(!t.toggle(&id("does-not-exist")));
        assert_eq!(t, before);
    }

    // ── Filtering ────────────────────────────────────────────────────

    #[test]
    fn test_all_filter_returns_every_entry_in_scope() {
        let t = field_kit();
        assert_eq!(t.visible_entries().count(), 8);
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let mut t = field_kit();
        t.set_category_filter(CategoryFilter::Only(ComplianceCategory::Coppa));
        let ids: Vec<_> = t.visible_entries().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["coppa-1", "coppa-2"]);
    }

    #[test]
    fn test_unpopulated_category_is_empty_not_error() {
        let mut t = field_kit();
        t.set_category_filter(CategoryFilter::Only(ComplianceCategory::Licensing));
        assert_eq!(t.visible_entries().count(), 0);
    }

    #[test]
    fn test_category_filter_does_not_change_stats() {
        let mut t = field_kit();
        t.toggle(&id("audit-1"));
        let unfiltered = t.compute_stats();
        t.set_category_filter(CategoryFilter::Only(ComplianceCategory::Disposal));
        assert_eq!(t.compute_stats(), unfiltered);
    }

    #[test]
    fn test_site_filter_includes_global_entries() {
        let mut t = global_mesh();
        let ids: Vec<_> = t.visible_entries().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["syn-1", "coppa-1", "gdpr-9", "tx-1", "thermal-1", "audit-1"]);

        t.set_site_filter(DeploymentSite::KyivCore);
        let ids: Vec<_> = t.visible_entries().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["syn-1", "coppa-1", "gdpr-9", "audit-1"]);
        let stats = t.compute_stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.progress, 100);
        assert_eq!(
            stats.category(ComplianceCategory::Thermal).unwrap().percentage,
            0
        );
    }

    #[test]
    fn test_site_filter_ignored_in_single_site_variant() {
        let mut t = field_kit();
        t.set_site_filter(DeploymentSite::KyivCore);
        assert_eq!(t.site_filter(), None);
        assert_eq!(t.compute_stats().total, 8);
    }

    #[test]
    fn test_empty_site_scope_scores_zero() {
        let entries = vec![entry(
            "tx-9",
            ComplianceCategory::TexasRegulatory,
            Some(DeploymentSite::HoustonHub),
        )];
        let mut t = ComplianceTracker::new(Variant::GlobalMesh, entries).unwrap();
        t.set_site_filter(DeploymentSite::SydneyLink);
        let stats = t.compute_stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.progress, 0);
        assert!(stats.categories.iter().all(|c| c.percentage == 0));
        assert_eq!(t.visible_entries().count(), 0);
    }

    // ── Breakdown ────────────────────────────────────────────────────

    #[test]
    fn test_breakdown_has_one_stat_per_declared_category() {
        for t in [field_kit(), global_mesh()] {
            let stats = t.compute_stats();
            let cats: Vec<_> = stats.categories.iter().map(|c| c.category).collect();
            assert_eq!(cats, t.variant().categories());
        }
    }

    #[test]
    fn test_unpopulated_categories_report_zero() {
        let stats = global_mesh().compute_stats();
        for c in [
            ComplianceCategory::Licensing,
            ComplianceCategory::Clinical,
            ComplianceCategory::Failsafe,
        ] {
            let stat = stats.category(c).unwrap();
            assert_eq!(stat.total, 0);
            assert_eq!(stat.percentage, 0);
        }
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn test_rejects_duplicate_ids() {
        let entries = vec![
            entry("a", ComplianceCategory::Audit, None),
            entry("a", ComplianceCategory::Ethics, None),
        ];
        assert_eq!(
            ComplianceTracker::new(Variant::FieldKit, entries),
            Err(TrackerError::DuplicateId(id("a")))
        );
    }

    #[test]
    fn test_rejects_category_outside_variant() {
        let entries = vec![entry("t", ComplianceCategory::Thermal, None)];
        assert!(matches!(
            ComplianceTracker::new(Variant::FieldKit, entries),
            Err(TrackerError::CategoryOutsideVariant { .. })
        ));
    }

    #[test]
    fn test_rejects_site_mismatch() {
        let missing = vec![entry("a", ComplianceCategory::Audit, None)];
        assert!(matches!(
            ComplianceTracker::new(Variant::GlobalMesh, missing),
            Err(TrackerError::MissingSite { .. })
        ));

        let unexpected = vec![entry(
            "a",
            ComplianceCategory::Audit,
            Some(DeploymentSite::Global),
        )];
        assert!(matches!(
            ComplianceTracker::new(Variant::FieldKit, unexpected),
            Err(TrackerError::UnexpectedSite { .. })
        ));
    }

    #[test]
    fn test_empty_tracker_scores_zero() {
        let t = ComplianceTracker::new(Variant::FieldKit, Vec::new()).unwrap();
        let stats = t.compute_stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.progress, 0);
        assert_eq!(stats.categories.len(), 7);
    }
}

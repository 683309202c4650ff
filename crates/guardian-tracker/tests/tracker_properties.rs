//! # Tracker Property Tests
//!
//! Invariants that must hold for any sequence of toggles and filter changes
//! on either variant's seed list.

use guardian_core::{ComplianceCategory, DeploymentSite, EntryId, Variant};
use guardian_pack::ContentPack;
use guardian_tracker::{CategoryFilter, ComplianceTracker};
use proptest::prelude::*;

fn tracker(variant: Variant) -> ComplianceTracker {
    ComplianceTracker::from_pack(&ContentPack::for_variant(variant))
        .expect("seed lists are valid")
}

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::FieldKit), Just(Variant::GlobalMesh)]
}

fn site() -> impl Strategy<Value = DeploymentSite> {
    prop::sample::select(DeploymentSite::all().to_vec())
}

fn category_filter() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        prop::sample::select(ComplianceCategory::all().to_vec()).prop_map(CategoryFilter::Only),
    ]
}

/// Apply toggles by index into the seed list; indices past the end target an
/// id no entry has.
fn apply_toggles(t: &mut ComplianceTracker, picks: &[usize]) {
    for &i in picks {
        let id = match t.entries().get(i) {
            Some(e) => e.id.clone(),
            None => EntryId::new(format!("missing-{i}")).unwrap(),
        };
        t.toggle(&id);
    }
}

proptest! {
    /// Toggling any entry twice restores the tracker exactly.
    #[test]
    fn double_toggle_is_identity(
        v in variant(),
        picks in prop::collection::vec(0usize..12, 0..20),
        target in 0usize..12,
    ) {
        let mut t = tracker(v);
        apply_toggles(&mut t, &picks);
        let before = t.clone();
        apply_toggles(&mut t, &[target, target]);
        prop_assert_eq!(t, before);
    }

    /// Counts and percentages stay within bounds.
    #[test]
    fn stats_are_bounded(
        v in variant(),
        picks in prop::collection::vec(0usize..12, 0..30),
        s in site(),
    ) {
        let mut t = tracker(v);
        apply_toggles(&mut t, &picks);
        t.set_site_filter(s);
        let stats = t.compute_stats();
        prop_assert!(stats.completed <= stats.total);
        prop_assert!(stats.progress <= 100);
        if stats.total == 0 {
            prop_assert_eq!(stats.progress, 0);
            prop_assert!(stats.categories.iter().all(|c| c.percentage == 0));
        }
        for c in &stats.categories {
            prop_assert!(c.completed <= c.total);
            prop_assert!(c.percentage <= 100);
        }
        prop_assert_eq!(stats.categories.iter().map(|c| c.total).sum::<usize>(), stats.total);
    }

    /// The breakdown always lists each declared category exactly once.
    #[test]
    fn breakdown_covers_declared_categories(v in variant(), s in site(), f in category_filter()) {
        let mut t = tracker(v);
        t.set_site_filter(s);
        t.set_category_filter(f);
        let cats: Vec<_> = t.compute_stats().categories.iter().map(|c| c.category).collect();
        prop_assert_eq!(cats.as_slice(), v.categories());
    }

    /// Visible entries are an order-preserving subsequence of all entries,
    /// and `All` yields exactly the in-scope entries.
    #[test]
    fn visible_entries_are_ordered_subsequence(
        v in variant(),
        s in site(),
        f in category_filter(),
    ) {
        let mut t = tracker(v);
        t.set_site_filter(s);
        t.set_category_filter(f);

        let visible: Vec<_> = t.visible_entries().map(|e| e.id.clone()).collect();
        let mut all = t.entries().iter().map(|e| &e.id);
        for id in &visible {
            prop_assert!(all.any(|candidate| candidate == id), "{} out of order", id);
        }

        t.set_category_filter(CategoryFilter::All);
        let in_scope = t.entries().iter().filter(|e| t.in_scope(e)).count();
        prop_assert_eq!(t.visible_entries().count(), in_scope);
        prop_assert_eq!(in_scope, t.compute_stats().total);
    }

    /// Filters never mutate entries.
    #[test]
    fn filters_do_not_mutate_entries(v in variant(), s in site(), f in category_filter()) {
        let mut t = tracker(v);
        let before = t.entries().to_vec();
        t.set_site_filter(s);
        t.set_category_filter(f);
        prop_assert_eq!(t.entries(), before.as_slice());
    }
}

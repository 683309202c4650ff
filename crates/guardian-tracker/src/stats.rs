//! # Completion Stats
//!
//! Percentages are rounded half-up in integer arithmetic and are `0` for an
//! empty scope.

use serde::{Deserialize, Serialize};

use guardian_core::{ComplianceCategory, DeploymentSite};

/// `round_half_up(completed / total * 100)`, or `0` when `total == 0`.
///
/// `completed` is clamped to `total`, so the result is always in `0..=100`.
pub fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    // (200c + t) / 2t == floor(100c/t + 1/2)
    ((200 * completed + total) / (2 * total)) as u8
}

/// Display tone of a category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    /// 100%.
    Complete,
    /// Between 1% and 99%.
    Partial,
    /// 0%.
    Empty,
}

impl BadgeTone {
    pub fn for_percentage(percentage: u8) -> Self {
        match percentage {
            100..=u8::MAX => Self::Complete,
            0 => Self::Empty,
            _ => Self::Partial,
        }
    }
}

/// Completion of one category within the current scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: ComplianceCategory,
    pub total: usize,
    pub completed: usize,
    pub percentage: u8,
}

impl CategoryStat {
    pub(crate) fn new(category: ComplianceCategory, completed: usize, total: usize) -> Self {
        Self {
            category,
            total,
            completed,
            percentage: percentage(completed, total),
        }
    }

    pub fn tone(&self) -> BadgeTone {
        BadgeTone::for_percentage(self.percentage)
    }
}

/// Scoring output for the current scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceStats {
    /// Active site filter; `None` for single-site scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<DeploymentSite>,
    pub total: usize,
    pub completed: usize,
    pub progress: u8,
    /// One stat per category of the variant, in the variant's order.
    pub categories: Vec<CategoryStat>,
}

impl ComplianceStats {
    /// Stat for `category`, if the variant tracks it.
    pub fn category(&self, category: ComplianceCategory) -> Option<&CategoryStat> {
        self.categories.iter().find(|s| s.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(5, 0), 0);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(1, 8), 13); // 12.5
        assert_eq!(percentage(1, 3), 33); // 33.33
        assert_eq!(percentage(2, 3), 67); // 66.67
        assert_eq!(percentage(1, 200), 1); // 0.5
        assert_eq!(percentage(1, 201), 0); // 0.497
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(percentage(6, 6), 100);
        assert_eq!(percentage(0, 6), 0);
        assert_eq!(percentage(9, 6), 100);
    }

    #[test]
    fn test_badge_tone() {
        assert_eq!(BadgeTone::for_percentage(100), BadgeTone::Complete);
        assert_eq!(BadgeTone::for_percentage(50), BadgeTone::Partial);
        assert_eq!(BadgeTone::for_percentage(1), BadgeTone::Partial);
        assert_eq!(BadgeTone::for_percentage(0), BadgeTone::Empty);
    }

    #[test]
    fn test_category_stat_tone() {
        let stat = CategoryStat::new(ComplianceCategory::Coppa, 1, 2);
        assert_eq!(stat.percentage, 50);
        assert_eq!(stat.tone(), BadgeTone::Partial);
    }
}

//! Leaderboard output types for the top performers dashboard widget
//!
//! The numbers here are produced by `diwan_core::ranking`; the display rules
//! ([`RankTier`], [`ProgressBar`]) are pure functions of those numbers.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::PROGRESS_POINTS_CEILING;
use crate::impl_domain_status_conversions;

/// Performance direction shown next to a ranked employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    #[default]
    Up,
    Down,
    Steady,
}

impl_domain_status_conversions!(Trend {
    Up => "up",
    Down => "down",
    Steady => "steady",
});

/// One row of the leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct RankedPerformer {
    pub id: String,
    pub name: String,
    /// Department display name, or the raw id when the lookup failed
    pub department: String,
    /// Division display name, or the raw id when the lookup failed
    pub division: String,
    pub points: i64,
    pub completed_tasks: usize,
    /// Average completion time in days (placeholder value)
    pub average_time: f64,
    /// 1-based position in the truncated list
    pub rank: usize,
    pub trend: Trend,
}

/// Summary statistics printed under the leaderboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct RankingSummary {
    /// Rounded mean points over the whole employee population
    pub average_points: i64,
    /// Rounded mean completed tasks over the ranked entries
    pub average_completed_tasks: i64,
    /// Mean `average_time` over the ranked entries, one decimal place
    pub average_time: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Leaderboard {
    pub performers: Vec<RankedPerformer>,
    pub summary: RankingSummary,
}

impl Leaderboard {
    pub fn is_empty(&self) -> bool {
        self.performers.is_empty()
    }
}

/// Medal tier used to pick the rank icon and colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum RankTier {
    Gold,
    Silver,
    Bronze,
    Standard,
}

impl_domain_status_conversions!(RankTier {
    Gold => "gold",
    Silver => "silver",
    Bronze => "bronze",
    Standard => "standard",
});

impl RankTier {
    pub const fn for_rank(rank: usize) -> Self {
        match rank {
            1 => Self::Gold,
            2 => Self::Silver,
            3 => Self::Bronze,
            _ => Self::Standard,
        }
    }
}

/// Points progress towards the 1000-point ceiling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ProgressBar {
    /// Bar width, clamped to `0..=100`
    pub width_percent: f64,
    /// Rounded, unclamped percentage for the text label
    pub label_percent: i64,
}

impl ProgressBar {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn for_points(points: i64) -> Self {
        let raw = points as f64 / PROGRESS_POINTS_CEILING * 100.0;
        Self { width_percent: raw.clamp(0.0, 100.0), label_percent: raw.round() as i64 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_tiers() {
        assert_eq!(RankTier::for_rank(1), RankTier::Gold);
        assert_eq!(RankTier::for_rank(2), RankTier::Silver);
        assert_eq!(RankTier::for_rank(3), RankTier::Bronze);
        assert_eq!(RankTier::for_rank(4), RankTier::Standard);
        assert_eq!(RankTier::for_rank(5), RankTier::Standard);
    }

    #[test]
    fn test_progress_bar_clamps_width_but_not_label() {
        let over = ProgressBar::for_points(1_500);
        assert!((over.width_percent - 100.0).abs() < f64::EPSILON);
        assert_eq!(over.label_percent, 150);

        let at_ceiling = ProgressBar::for_points(1_000);
        assert!((at_ceiling.width_percent - 100.0).abs() < f64::EPSILON);

        let partial = ProgressBar::for_points(250);
        assert!((partial.width_percent - 25.0).abs() < 1e-9);
        assert_eq!(partial.label_percent, 25);

        let zero = ProgressBar::for_points(0);
        assert!(zero.width_percent.abs() < f64::EPSILON);
        assert_eq!(zero.label_percent, 0);
    }
}

//! Types for the influencer filter engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Platform;

/// A named follower-count bucket. Intervals are half-open: a count
/// belongs to exactly one tier, and counts below 10 000 belong to none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowerTier {
    /// [10 000, 100 000)
    Micro,
    /// [100 000, 500 000)
    Mid,
    /// [500 000, 1 000 000)
    Macro,
    /// [1 000 000, ∞)
    Mega,
}

impl FollowerTier {
    pub const ALL: [FollowerTier; 4] = [
        FollowerTier::Micro,
        FollowerTier::Mid,
        FollowerTier::Macro,
        FollowerTier::Mega,
    ];

    /// The tier containing `count`, if any.
    pub fn from_count(count: u64) -> Option<FollowerTier> {
        match count {
            10_000..=99_999 => Some(FollowerTier::Micro),
            100_000..=499_999 => Some(FollowerTier::Mid),
            500_000..=999_999 => Some(FollowerTier::Macro),
            1_000_000.. => Some(FollowerTier::Mega),
            _ => None,
        }
    }

    /// Whether `count` falls inside this tier's interval.
    pub fn contains(&self, count: u64) -> bool {
        FollowerTier::from_count(count) == Some(*self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FollowerTier::Micro => "micro",
            FollowerTier::Mid => "mid",
            FollowerTier::Macro => "macro",
            FollowerTier::Mega => "mega",
        }
    }
}

/// Error for unrecognized tier names.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown follower tier: {0}")]
pub struct ParseTierError(pub String);

impl std::str::FromStr for FollowerTier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "micro" => Ok(FollowerTier::Micro),
            "mid" => Ok(FollowerTier::Mid),
            "macro" => Ok(FollowerTier::Macro),
            "mega" => Ok(FollowerTier::Mega),
            other => Err(ParseTierError(other.to_string())),
        }
    }
}

/// Follower-tier criterion: either everything or one specific tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TierFilter {
    #[default]
    All,
    Tier(FollowerTier),
}

impl TierFilter {
    pub fn matches(&self, followers: u64) -> bool {
        match self {
            TierFilter::All => true,
            TierFilter::Tier(tier) => tier.contains(followers),
        }
    }
}

impl std::str::FromStr for TierFilter {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(TierFilter::All)
        } else {
            s.parse::<FollowerTier>().map(TierFilter::Tier)
        }
    }
}

/// Single-click category/status shortcut. Narrows the catalog before
/// the remaining criteria apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuickFilter {
    /// Sentinel: matches unconditionally.
    #[default]
    All,
    /// Soller exclusive roster only.
    SollerExclusive,
    /// Trending only.
    Trending,
    /// Case-insensitive match against any of a record's category tags.
    Category(String),
}

impl QuickFilter {
    /// Parse a pill value. Never fails: anything that is not a known
    /// sentinel is a category name.
    pub fn parse(value: &str) -> QuickFilter {
        match value.trim().to_lowercase().as_str() {
            "all" | "" => QuickFilter::All,
            "soller" => QuickFilter::SollerExclusive,
            "trending" => QuickFilter::Trending,
            _ => QuickFilter::Category(value.trim().to_string()),
        }
    }

    /// Metric label for this filter kind.
    pub fn kind(&self) -> &'static str {
        match self {
            QuickFilter::All => "all",
            QuickFilter::SollerExclusive => "soller",
            QuickFilter::Trending => "trending",
            QuickFilter::Category(_) => "category",
        }
    }
}

/// The current set of user-chosen filter criteria.
///
/// An explicit value passed into the pure [`super::apply`] function;
/// defaults are all-permissive, so a default state selects the whole
/// catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Quick-filter pill (category or status shortcut).
    pub quick: QuickFilter,
    /// Free-text search over name, handle, and bio. Empty = off.
    /// Compared case-insensitively by lowering both sides.
    pub search: String,
    /// Follower tier criterion.
    pub tier: TierFilter,
    /// Minimum engagement percentage. 0 = off.
    pub min_engagement: f32,
    /// Inclusive price lower bound.
    pub min_price: u64,
    /// Inclusive price upper bound.
    pub max_price: u64,
    /// Location substring. Empty = off.
    pub location: String,
    /// Required platforms; a record must have ALL of them. Empty = off.
    pub platforms: Vec<Platform>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            quick: QuickFilter::All,
            search: String::new(),
            tier: TierFilter::All,
            min_engagement: 0.0,
            min_price: 0,
            max_price: u64::MAX,
            location: String::new(),
            platforms: Vec::new(),
        }
    }
}

impl FilterState {
    /// The "clear filters" action: every field back to its default.
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    /// Whether every criterion is at its all-permissive default.
    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }
}

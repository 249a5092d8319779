//! Types for the influencer catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A canonical influencer record, read-only after catalog load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Influencer {
    /// Unique identifier, stable for the session.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Social handle (e.g., "@anaclara").
    pub handle: String,
    /// Short profile text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Follower count, normalized to a number at ingestion.
    pub followers: u64,
    /// Engagement rate in percent (4.2 means 4.2%).
    pub engagement: f32,
    /// Price per post in whole currency units (BRL). 0 when unlisted.
    pub price: u64,
    /// Free-text location (e.g., "São Paulo, SP").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Platforms the influencer is active on.
    pub platforms: Vec<Platform>,
    /// Category tags (e.g., "moda", "fitness").
    pub categories: Vec<String>,
    /// Part of the Soller exclusive roster.
    #[serde(default)]
    pub soller_exclusive: bool,
    /// Currently trending.
    #[serde(default)]
    pub trending: bool,
}

/// A social platform. Closed set so platform dispatch (labels, icons)
/// is checked exhaustively at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Instagram,
    Tiktok,
    Youtube,
    Twitter,
    Twitch,
    Linkedin,
}

impl Platform {
    /// All platforms, in display order.
    pub const ALL: [Platform; 6] = [
        Platform::Instagram,
        Platform::Tiktok,
        Platform::Youtube,
        Platform::Twitter,
        Platform::Twitch,
        Platform::Linkedin,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Tiktok => "TikTok",
            Platform::Youtube => "YouTube",
            Platform::Twitter => "Twitter",
            Platform::Twitch => "Twitch",
            Platform::Linkedin => "LinkedIn",
        }
    }

    /// Icon shown on influencer cards.
    pub fn icon(&self) -> &'static str {
        match self {
            Platform::Instagram => "📷",
            Platform::Tiktok => "🎵",
            Platform::Youtube => "▶️",
            Platform::Twitter => "🐦",
            Platform::Twitch => "🎮",
            Platform::Linkedin => "💼",
        }
    }

    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
            Platform::Twitter => "twitter",
            Platform::Twitch => "twitch",
            Platform::Linkedin => "linkedin",
        }
    }
}

/// Error for unrecognized platform names.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown platform: {0}")]
pub struct ParsePlatformError(pub String);

impl std::str::FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "tiktok" => Ok(Platform::Tiktok),
            "youtube" => Ok(Platform::Youtube),
            "twitter" | "x" => Ok(Platform::Twitter),
            "twitch" => Ok(Platform::Twitch),
            "linkedin" => Ok(Platform::Linkedin),
            other => Err(ParsePlatformError(other.to_string())),
        }
    }
}

/// An influencer record as it appears in the source data file.
///
/// The source is loose: follower counts may be numbers or compact
/// strings ("125K", "1.2M"), older entries carry a singular `category`
/// instead of `categories`, platforms are free-text, and most optional
/// fields may simply be missing. Ingestion normalizes all of this once;
/// see [`super::load_catalog`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInfluencer {
    pub id: String,
    pub name: String,
    pub handle: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub followers: FollowerField,
    #[serde(default)]
    pub engagement: f32,
    #[serde(default)]
    pub price: u64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Legacy singular form, merged into `categories` at ingestion.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub soller_exclusive: bool,
    #[serde(default)]
    pub trending: bool,
}

/// Dual representation of follower counts in the source data.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FollowerField {
    /// Already numeric.
    Count(u64),
    /// Compact string form like "125K" or "1.2M".
    Compact(String),
}

/// Catalog statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Total influencers in the catalog.
    pub total_influencers: u64,
    /// Influencers per follower tier.
    pub tiers: TierCounts,
    /// Influencers per platform (platforms with zero members are omitted).
    pub platforms: Vec<PlatformCount>,
    /// Number of distinct category tags.
    pub distinct_categories: u64,
    /// Soller exclusive roster size.
    pub soller_exclusive: u64,
    /// Currently trending count.
    pub trending: u64,
    /// When the catalog was loaded.
    pub loaded_at: DateTime<Utc>,
}

/// Influencer counts per follower tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TierCounts {
    pub micro: u64,
    pub mid: u64,
    #[serde(rename = "macro")]
    pub macro_: u64,
    pub mega: u64,
    /// Below the micro threshold; matches no tier filter.
    pub untiered: u64,
}

/// Influencer count for one platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformCount {
    pub platform: Platform,
    pub count: u64,
}

/// Errors for catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read catalog file: {0}")]
    Io(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Duplicate influencer id: {0}")]
    DuplicateId(String),

    #[error("Catalog is empty")]
    Empty,
}

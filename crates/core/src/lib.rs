pub mod catalog;
pub mod config;
pub mod filter;
pub mod metrics;
pub mod render;
pub mod testing;

pub use catalog::{
    format_follower_count, load_catalog, parse_follower_count, Catalog, CatalogError,
    CatalogStats, Influencer, Platform,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    ServerConfig,
};
pub use filter::{apply, FilterOutcome, FilterState, FollowerTier, QuickFilter, TierFilter};
pub use render::{render_cards, CardList, InfluencerCard};

//! Influencer catalog - the static, ordered influencer list for a session.
//!
//! The catalog is loaded once at startup and immutable afterwards; only
//! filter state and the derived filtered subset ever change. Its order
//! (case-insensitive alphabetical by name) is established here at load
//! time and preserved through every filter pass.

mod followers;
mod loader;
mod types;

pub use followers::{format_follower_count, parse_follower_count};
pub use loader::load_catalog;
pub use types::*;

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::filter::FollowerTier;

/// The immutable influencer catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    influencers: Vec<Influencer>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Build a catalog from normalized records.
    ///
    /// Rejects duplicate ids and empty input, then fixes the session
    /// order: case-insensitive alphabetical by name, using
    /// locale-independent uppercase comparison.
    pub fn from_influencers(mut influencers: Vec<Influencer>) -> Result<Self, CatalogError> {
        if influencers.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(influencers.len());
        for influencer in &influencers {
            if !seen.insert(influencer.id.as_str()) {
                return Err(CatalogError::DuplicateId(influencer.id.clone()));
            }
        }

        influencers.sort_by(|a, b| a.name.to_uppercase().cmp(&b.name.to_uppercase()));

        Ok(Self {
            influencers,
            loaded_at: Utc::now(),
        })
    }

    /// All influencers, in catalog order.
    pub fn all(&self) -> &[Influencer] {
        &self.influencers
    }

    /// Look up an influencer by id.
    pub fn get(&self, id: &str) -> Option<&Influencer> {
        self.influencers.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.influencers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.influencers.is_empty()
    }

    /// Distinct category tags for the quick-filter pill row.
    ///
    /// First-occurrence casing wins; sorted case-insensitively.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut categories: Vec<String> = Vec::new();
        for influencer in &self.influencers {
            for category in &influencer.categories {
                if seen.insert(category.to_lowercase()) {
                    categories.push(category.clone());
                }
            }
        }
        categories.sort_by_key(|c| c.to_uppercase());
        categories
    }

    /// Platforms present in the catalog, in display order.
    pub fn platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|p| self.influencers.iter().any(|i| i.platforms.contains(p)))
            .collect()
    }

    /// Catalog statistics.
    pub fn stats(&self) -> CatalogStats {
        let mut tiers = TierCounts::default();
        for influencer in &self.influencers {
            match FollowerTier::from_count(influencer.followers) {
                Some(FollowerTier::Micro) => tiers.micro += 1,
                Some(FollowerTier::Mid) => tiers.mid += 1,
                Some(FollowerTier::Macro) => tiers.macro_ += 1,
                Some(FollowerTier::Mega) => tiers.mega += 1,
                None => tiers.untiered += 1,
            }
        }

        let platforms = Platform::ALL
            .into_iter()
            .filter_map(|platform| {
                let count = self
                    .influencers
                    .iter()
                    .filter(|i| i.platforms.contains(&platform))
                    .count() as u64;
                (count > 0).then_some(PlatformCount { platform, count })
            })
            .collect();

        CatalogStats {
            total_influencers: self.influencers.len() as u64,
            tiers,
            platforms,
            distinct_categories: self.categories().len() as u64,
            soller_exclusive: self
                .influencers
                .iter()
                .filter(|i| i.soller_exclusive)
                .count() as u64,
            trending: self.influencers.iter().filter(|i| i.trending).count() as u64,
            loaded_at: self.loaded_at,
        }
    }
}

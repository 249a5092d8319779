//! Card rendering - projection of the filtered subset into display form.
//!
//! A pure projection with no business logic: records in, card DTOs and
//! a result count out. The empty-subset case gets a distinct "no
//! results" payload with a one-action reset hint.

use serde::{Deserialize, Serialize};

use crate::catalog::{format_follower_count, Influencer};
use crate::filter::FollowerTier;

/// One influencer card, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluencerCard {
    pub id: String,
    pub name: String,
    pub handle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Compact display form ("125K", "1.2M").
    pub followers: String,
    /// The tier badge, when the count reaches a tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<FollowerTier>,
    /// Engagement display ("4.2%").
    pub engagement: String,
    /// Price display ("R$ 2.500"); absent when the price is unlisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub platforms: Vec<PlatformBadge>,
    pub categories: Vec<String>,
    pub soller_exclusive: bool,
    pub trending: bool,
}

/// Label + icon pair for a platform chip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformBadge {
    pub label: String,
    pub icon: String,
}

/// The rendered result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardList {
    pub cards: Vec<InfluencerCard>,
    /// Cardinality for the "N results" display.
    pub total: usize,
    /// Present only when the subset is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_results: Option<NoResults>,
}

/// Empty-state payload: message plus the one reset action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoResults {
    pub message: String,
    pub action: String,
}

/// Project the filtered subset into cards.
pub fn render_cards(subset: &[&Influencer]) -> CardList {
    let cards: Vec<InfluencerCard> = subset.iter().map(|i| render_card(i)).collect();
    let total = cards.len();
    let no_results = cards.is_empty().then(|| NoResults {
        message: "Nenhum influenciador encontrado".to_string(),
        action: "clear_filters".to_string(),
    });

    CardList {
        cards,
        total,
        no_results,
    }
}

fn render_card(influencer: &Influencer) -> InfluencerCard {
    InfluencerCard {
        id: influencer.id.clone(),
        name: influencer.name.clone(),
        handle: influencer.handle.clone(),
        bio: influencer.bio.clone(),
        followers: format_follower_count(influencer.followers),
        tier: FollowerTier::from_count(influencer.followers),
        engagement: format!("{}%", influencer.engagement),
        price: (influencer.price > 0).then(|| format!("R$ {}", group_thousands(influencer.price))),
        location: influencer.location.clone(),
        platforms: influencer
            .platforms
            .iter()
            .map(|p| PlatformBadge {
                label: p.label().to_string(),
                icon: p.icon().to_string(),
            })
            .collect(),
        categories: influencer.categories.clone(),
        soller_exclusive: influencer.soller_exclusive,
        trending: influencer.trending,
    }
}

/// pt-BR thousands grouping: 2500 → "2.500".
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

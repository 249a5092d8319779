//! The filter engine: pure predicate composition over the catalog.
//!
//! Given the full catalog and a filter state, produce the ordered
//! subset satisfying ALL active criteria. The engine never reorders -
//! it only removes - so the catalog's session order survives every
//! pass. It also has no fatal paths: absent optional fields contribute
//! "no match" for their criterion, and the worst case is an empty
//! subset, which is a normal outcome.

use crate::catalog::{Catalog, Influencer, Platform};
use crate::metrics::{FILTER_RESULT_SIZE, FILTER_RUNS};

use super::types::{FilterState, QuickFilter};

/// The filtered subset plus its cardinality.
#[derive(Debug)]
pub struct FilterOutcome<'a> {
    /// Matching records, in catalog order.
    pub influencers: Vec<&'a Influencer>,
    /// Result count for the "N results" display.
    pub total: usize,
}

/// Run the full filter pipeline.
///
/// The quick-filter narrows the catalog first; the remaining criteria
/// apply on top of the narrowed set. Since every criterion is an
/// independent AND, the observable result is the same as one flat
/// conjunction.
pub fn apply<'a>(catalog: &'a Catalog, state: &FilterState) -> FilterOutcome<'a> {
    let influencers: Vec<&Influencer> = catalog
        .all()
        .iter()
        .filter(|i| matches_quick_filter(i, &state.quick))
        .filter(|i| matches_search(i, &state.search))
        .filter(|i| state.tier.matches(i.followers))
        .filter(|i| i.engagement >= state.min_engagement)
        .filter(|i| i.price >= state.min_price && i.price <= state.max_price)
        .filter(|i| matches_location(i, &state.location))
        .filter(|i| has_all_platforms(i, &state.platforms))
        .collect();

    FILTER_RUNS.with_label_values(&[state.quick.kind()]).inc();
    FILTER_RESULT_SIZE.observe(influencers.len() as f64);

    FilterOutcome {
        total: influencers.len(),
        influencers,
    }
}

/// Quick-filter pill: sentinel, status shortcut, or category tag.
fn matches_quick_filter(influencer: &Influencer, quick: &QuickFilter) -> bool {
    match quick {
        QuickFilter::All => true,
        QuickFilter::SollerExclusive => influencer.soller_exclusive,
        QuickFilter::Trending => influencer.trending,
        QuickFilter::Category(wanted) => {
            let wanted = wanted.to_lowercase();
            influencer
                .categories
                .iter()
                .any(|tag| tag.to_lowercase() == wanted)
        }
    }
}

/// Substring search over name, handle, and bio, lowering both sides.
/// An absent bio contributes no match from that field.
fn matches_search(influencer: &Influencer, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();

    influencer.name.to_lowercase().contains(&needle)
        || influencer.handle.to_lowercase().contains(&needle)
        || influencer
            .bio
            .as_ref()
            .is_some_and(|bio| bio.to_lowercase().contains(&needle))
}

/// Location substring match; records without a location never match an
/// active location filter.
fn matches_location(influencer: &Influencer, location: &str) -> bool {
    if location.is_empty() {
        return true;
    }
    let needle = location.to_lowercase();

    influencer
        .location
        .as_ref()
        .is_some_and(|loc| loc.to_lowercase().contains(&needle))
}

/// Superset test: the record must carry ALL required platforms.
fn has_all_platforms(influencer: &Influencer, required: &[Platform]) -> bool {
    required.iter().all(|p| influencer.platforms.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FollowerTier, TierFilter};

    fn make_influencer(id: &str, name: &str) -> Influencer {
        Influencer {
            id: id.to_string(),
            name: name.to_string(),
            handle: format!("@{}", name.to_lowercase().replace(' ', "")),
            bio: None,
            followers: 50_000,
            engagement: 3.0,
            price: 1_000,
            location: None,
            platforms: vec![Platform::Instagram],
            categories: vec!["moda".to_string()],
            soller_exclusive: false,
            trending: false,
        }
    }

    /// The two-record catalog from the engine's worked examples:
    /// Ana (250K, 3.9%, fashion) and João (85 000, 5.2%, fitness).
    fn example_catalog() -> Catalog {
        let mut ana = make_influencer("ana", "Ana");
        ana.followers = 250_000;
        ana.engagement = 3.9;
        ana.categories = vec!["fashion".to_string()];

        let mut joao = make_influencer("joao", "João");
        joao.followers = 85_000;
        joao.engagement = 5.2;
        joao.categories = vec!["fitness".to_string()];

        Catalog::from_influencers(vec![ana, joao]).unwrap()
    }

    #[test]
    fn test_default_state_selects_full_catalog_in_order() {
        let catalog = example_catalog();
        let outcome = apply(&catalog, &FilterState::default());

        assert_eq!(outcome.total, 2);
        let names: Vec<&str> = outcome.influencers.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "João"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let catalog = example_catalog();
        let state = FilterState {
            tier: TierFilter::Tier(FollowerTier::Micro),
            ..Default::default()
        };

        let first = apply(&catalog, &state);
        let second = apply(&catalog, &state);

        let ids = |o: &FilterOutcome| -> Vec<String> {
            o.influencers.iter().map(|i| i.id.clone()).collect()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_micro_tier_example() {
        // 250K falls in "mid" and is excluded; 85 000 falls in "micro"
        let catalog = example_catalog();
        let state = FilterState {
            tier: TierFilter::Tier(FollowerTier::Micro),
            ..Default::default()
        };

        let outcome = apply(&catalog, &state);
        assert_eq!(outcome.total, 1);
        assert_eq!(outcome.influencers[0].name, "João");
    }

    #[test]
    fn test_search_example() {
        let catalog = example_catalog();
        let state = FilterState {
            search: "ana".to_string(),
            ..Default::default()
        };

        let outcome = apply(&catalog, &state);
        assert_eq!(outcome.total, 1);
        assert_eq!(outcome.influencers[0].name, "Ana");
    }

    #[test]
    fn test_search_covers_handle_and_bio() {
        let mut a = make_influencer("a", "Alice");
        a.bio = Some("Criadora de conteúdo fitness".to_string());
        let b = make_influencer("b", "Bruna");
        let catalog = Catalog::from_influencers(vec![a, b]).unwrap();

        let by_bio = apply(
            &catalog,
            &FilterState {
                search: "FITNESS".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_bio.total, 1);
        assert_eq!(by_bio.influencers[0].id, "a");

        let by_handle = apply(
            &catalog,
            &FilterState {
                search: "@bruna".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_handle.total, 1);
        assert_eq!(by_handle.influencers[0].id, "b");
    }

    #[test]
    fn test_absent_bio_contributes_no_match() {
        let catalog = example_catalog();
        let state = FilterState {
            search: "conteúdo".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(&catalog, &state).total, 0);
    }

    #[test]
    fn test_quick_filter_soller_and_trending() {
        let mut a = make_influencer("a", "Alice");
        a.soller_exclusive = true;
        let mut b = make_influencer("b", "Bruna");
        b.trending = true;
        let c = make_influencer("c", "Carla");
        let catalog = Catalog::from_influencers(vec![a, b, c]).unwrap();

        let soller = apply(
            &catalog,
            &FilterState {
                quick: QuickFilter::SollerExclusive,
                ..Default::default()
            },
        );
        assert_eq!(soller.total, 1);
        assert_eq!(soller.influencers[0].id, "a");

        let trending = apply(
            &catalog,
            &FilterState {
                quick: QuickFilter::Trending,
                ..Default::default()
            },
        );
        assert_eq!(trending.total, 1);
        assert_eq!(trending.influencers[0].id, "b");
    }

    #[test]
    fn test_quick_filter_category_matches_any_tag_case_insensitive() {
        let mut a = make_influencer("a", "Alice");
        a.categories = vec!["Moda".to_string(), "beleza".to_string()];
        let mut b = make_influencer("b", "Bruna");
        b.categories = vec!["fitness".to_string()];
        let catalog = Catalog::from_influencers(vec![a, b]).unwrap();

        let outcome = apply(
            &catalog,
            &FilterState {
                quick: QuickFilter::Category("moda".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(outcome.total, 1);
        assert_eq!(outcome.influencers[0].id, "a");
    }

    #[test]
    fn test_quick_filter_composes_with_other_criteria() {
        let mut a = make_influencer("a", "Alice");
        a.trending = true;
        a.followers = 85_000; // micro
        let mut b = make_influencer("b", "Bruna");
        b.trending = true;
        b.followers = 250_000; // mid
        let mut c = make_influencer("c", "Carla");
        c.followers = 85_000; // micro but not trending
        let catalog = Catalog::from_influencers(vec![a, b, c]).unwrap();

        let outcome = apply(
            &catalog,
            &FilterState {
                quick: QuickFilter::Trending,
                tier: TierFilter::Tier(FollowerTier::Micro),
                ..Default::default()
            },
        );
        assert_eq!(outcome.total, 1);
        assert_eq!(outcome.influencers[0].id, "a");
    }

    #[test]
    fn test_min_engagement_threshold() {
        let catalog = example_catalog();
        let state = FilterState {
            min_engagement: 4.0,
            ..Default::default()
        };

        let outcome = apply(&catalog, &state);
        assert_eq!(outcome.total, 1);
        assert_eq!(outcome.influencers[0].name, "João");
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let mut a = make_influencer("a", "Alice");
        a.price = 500;
        let mut b = make_influencer("b", "Bruna");
        b.price = 2_000;
        let mut c = make_influencer("c", "Carla");
        c.price = 5_000;
        let catalog = Catalog::from_influencers(vec![a, b, c]).unwrap();

        let outcome = apply(
            &catalog,
            &FilterState {
                min_price: 500,
                max_price: 2_000,
                ..Default::default()
            },
        );
        let ids: Vec<&str> = outcome.influencers.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_location_substring_and_absent_location() {
        let mut a = make_influencer("a", "Alice");
        a.location = Some("São Paulo, SP".to_string());
        let b = make_influencer("b", "Bruna"); // no location
        let catalog = Catalog::from_influencers(vec![a, b]).unwrap();

        let outcome = apply(
            &catalog,
            &FilterState {
                location: "paulo".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(outcome.total, 1);
        assert_eq!(outcome.influencers[0].id, "a");
    }

    #[test]
    fn test_platform_filter_is_superset_test() {
        let mut a = make_influencer("a", "Alice");
        a.platforms = vec![Platform::Instagram];
        let mut b = make_influencer("b", "Bruna");
        b.platforms = vec![Platform::Instagram, Platform::Tiktok];
        let catalog = Catalog::from_influencers(vec![a, b]).unwrap();

        // Requiring both platforms excludes the record with only one
        let both = apply(
            &catalog,
            &FilterState {
                platforms: vec![Platform::Instagram, Platform::Tiktok],
                ..Default::default()
            },
        );
        assert_eq!(both.total, 1);
        assert_eq!(both.influencers[0].id, "b");

        // Requiring one includes both
        let one = apply(
            &catalog,
            &FilterState {
                platforms: vec![Platform::Instagram],
                ..Default::default()
            },
        );
        assert_eq!(one.total, 2);

        // Empty requirement is no constraint
        let none = apply(&catalog, &FilterState::default());
        assert_eq!(none.total, 2);
    }

    #[test]
    fn test_result_is_order_preserving_subsequence() {
        let mut influencers = Vec::new();
        for (id, name, followers) in [
            ("a", "Alice", 20_000u64),
            ("b", "Bruna", 300_000),
            ("c", "Carla", 40_000),
            ("d", "Duda", 700_000),
            ("e", "Elisa", 60_000),
        ] {
            let mut i = make_influencer(id, name);
            i.followers = followers;
            influencers.push(i);
        }
        let catalog = Catalog::from_influencers(influencers).unwrap();

        let outcome = apply(
            &catalog,
            &FilterState {
                tier: TierFilter::Tier(FollowerTier::Micro),
                ..Default::default()
            },
        );
        let ids: Vec<&str> = outcome.influencers.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "e"]);
    }

    #[test]
    fn test_reset_after_mutations_restores_full_catalog() {
        let catalog = example_catalog();
        let mut state = FilterState {
            quick: QuickFilter::Category("fashion".to_string()),
            search: "ana".to_string(),
            min_engagement: 2.0,
            ..Default::default()
        };
        assert_eq!(apply(&catalog, &state).total, 1);

        state.reset();
        let outcome = apply(&catalog, &state);
        assert_eq!(outcome.total, catalog.len());
        assert!(state.is_default());
    }

    #[test]
    fn test_empty_result_is_normal_outcome() {
        let catalog = example_catalog();
        let state = FilterState {
            search: "nonexistent".to_string(),
            ..Default::default()
        };

        let outcome = apply(&catalog, &state);
        assert_eq!(outcome.total, 0);
        assert!(outcome.influencers.is_empty());
    }
}

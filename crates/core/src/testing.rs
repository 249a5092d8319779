//! Testing utilities shared by unit and integration tests.

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::{Catalog, Influencer, Platform};

    /// Create a test influencer with reasonable defaults.
    pub fn influencer(id: &str, name: &str, followers: u64) -> Influencer {
        Influencer {
            id: id.to_string(),
            name: name.to_string(),
            handle: format!("@{}", id),
            bio: None,
            followers,
            engagement: 3.0,
            price: 1_000,
            location: None,
            platforms: vec![Platform::Instagram],
            categories: vec!["moda".to_string()],
            soller_exclusive: false,
            trending: false,
        }
    }

    /// A small catalog spanning every follower tier and the common
    /// filter axes (categories, platforms, location, price).
    pub fn sample_catalog() -> Catalog {
        let mut ana = influencer("ana", "Ana Clara", 250_000);
        ana.bio = Some("Moda e lifestyle".to_string());
        ana.engagement = 3.9;
        ana.price = 2_500;
        ana.location = Some("São Paulo, SP".to_string());
        ana.platforms = vec![Platform::Instagram, Platform::Tiktok];
        ana.categories = vec!["moda".to_string()];
        ana.soller_exclusive = true;

        let mut joao = influencer("joao", "João Pedro", 85_000);
        joao.engagement = 5.2;
        joao.price = 800;
        joao.location = Some("Rio de Janeiro, RJ".to_string());
        joao.platforms = vec![Platform::Instagram];
        joao.categories = vec!["fitness".to_string()];
        joao.trending = true;

        let mut camila = influencer("camila", "Camila Reis", 1_300_000);
        camila.engagement = 2.1;
        camila.price = 12_000;
        camila.location = Some("Belo Horizonte, MG".to_string());
        camila.platforms = vec![Platform::Youtube, Platform::Instagram];
        camila.categories = vec!["beleza".to_string(), "moda".to_string()];

        let mut rafael = influencer("rafael", "Rafael Costa", 620_000);
        rafael.engagement = 4.4;
        rafael.price = 6_000;
        rafael.platforms = vec![Platform::Twitch, Platform::Youtube];
        rafael.categories = vec!["games".to_string()];
        rafael.trending = true;

        let mut duda = influencer("duda", "Duda Lima", 7_500);
        duda.engagement = 8.0;
        duda.price = 0;
        duda.categories = vec!["lifestyle".to_string()];

        Catalog::from_influencers(vec![ana, joao, camila, rafael, duda]).unwrap()
    }

}

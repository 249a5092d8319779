//! Catalog ingestion from the influencer data file.

use std::path::Path;

use tracing::{info, warn};

use super::followers::parse_follower_count;
use super::types::{CatalogError, FollowerField, Influencer, Platform, RawInfluencer};
use super::Catalog;

/// Load and normalize the influencer catalog from a JSON file.
///
/// Ingestion is where all of the source data's looseness is resolved:
/// compact follower strings become numbers, the legacy singular
/// `category` is merged into `categories`, free-text platform names are
/// parsed (unknown ones are skipped with a warning, never an error),
/// and the catalog is sorted once into its session order. A malformed
/// entry can degrade to empty/zero fields but cannot fail the load;
/// only unreadable files, broken JSON, duplicate ids, and an empty
/// catalog do.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound(path.display().to_string()));
    }

    let data =
        std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;

    let raw: Vec<RawInfluencer> =
        serde_json::from_str(&data).map_err(|e| CatalogError::Parse(e.to_string()))?;

    let influencers: Vec<Influencer> = raw.into_iter().map(normalize).collect();
    let catalog = Catalog::from_influencers(influencers)?;

    crate::metrics::CATALOG_SIZE.set(catalog.len() as i64);
    info!(
        influencers = catalog.len(),
        path = %path.display(),
        "Catalog loaded"
    );

    Ok(catalog)
}

/// Normalize one raw record into its canonical form.
fn normalize(raw: RawInfluencer) -> Influencer {
    let followers = match raw.followers {
        FollowerField::Count(n) => n,
        FollowerField::Compact(s) => {
            let parsed = parse_follower_count(&s);
            if parsed == 0 {
                warn!(id = %raw.id, value = %s, "Unparseable follower count, using 0");
                crate::metrics::FOLLOWER_PARSE_FALLBACKS.inc();
            }
            parsed
        }
    };

    let mut categories = raw.categories;
    if let Some(legacy) = raw.category {
        let already_present = categories
            .iter()
            .any(|c| c.to_lowercase() == legacy.to_lowercase());
        if !already_present {
            categories.push(legacy);
        }
    }

    let mut platforms: Vec<Platform> = Vec::with_capacity(raw.platforms.len());
    for name in &raw.platforms {
        match name.parse::<Platform>() {
            Ok(platform) => {
                if !platforms.contains(&platform) {
                    platforms.push(platform);
                }
            }
            Err(_) => {
                warn!(id = %raw.id, platform = %name, "Unknown platform, skipping");
            }
        }
    }

    Influencer {
        id: raw.id,
        name: raw.name,
        handle: raw.handle,
        bio: raw.bio,
        followers,
        engagement: raw.engagement,
        price: raw.price,
        location: raw.location,
        platforms,
        categories,
        soller_exclusive: raw.soller_exclusive,
        trending: raw.trending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_catalog_sorts_by_name_case_insensitive() {
        let file = write_catalog(
            r#"[
                {"id": "c", "name": "carla", "handle": "@c", "followers": 1000},
                {"id": "a", "name": "Ana", "handle": "@a", "followers": 1000},
                {"id": "b", "name": "Bruno", "handle": "@b", "followers": 1000}
            ]"#,
        );

        let catalog = load_catalog(file.path()).unwrap();
        let names: Vec<&str> = catalog.all().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bruno", "carla"]);
    }

    #[test]
    fn test_load_catalog_normalizes_compact_followers() {
        let file = write_catalog(
            r#"[
                {"id": "a", "name": "Ana", "handle": "@a", "followers": "250K"},
                {"id": "b", "name": "Bia", "handle": "@b", "followers": 85000}
            ]"#,
        );

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.get("a").unwrap().followers, 250_000);
        assert_eq!(catalog.get("b").unwrap().followers, 85_000);
    }

    #[test]
    fn test_load_catalog_merges_legacy_category() {
        let file = write_catalog(
            r#"[
                {"id": "a", "name": "Ana", "handle": "@a", "followers": 1,
                 "categories": ["moda"], "category": "Moda"},
                {"id": "b", "name": "Bia", "handle": "@b", "followers": 1,
                 "category": "fitness"}
            ]"#,
        );

        let catalog = load_catalog(file.path()).unwrap();
        // Legacy duplicate (case-insensitive) is not appended twice
        assert_eq!(catalog.get("a").unwrap().categories, vec!["moda"]);
        assert_eq!(catalog.get("b").unwrap().categories, vec!["fitness"]);
    }

    #[test]
    fn test_load_catalog_skips_unknown_platforms() {
        let file = write_catalog(
            r#"[
                {"id": "a", "name": "Ana", "handle": "@a", "followers": 1,
                 "platforms": ["Instagram", "orkut", "tiktok", "instagram"]}
            ]"#,
        );

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(
            catalog.get("a").unwrap().platforms,
            vec![Platform::Instagram, Platform::Tiktok]
        );
    }

    #[test]
    fn test_load_catalog_unparseable_followers_degrade_to_zero() {
        let file = write_catalog(
            r#"[{"id": "a", "name": "Ana", "handle": "@a", "followers": "muitos"}]"#,
        );

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.get("a").unwrap().followers, 0);
    }

    #[test]
    fn test_load_catalog_duplicate_id_fails() {
        let file = write_catalog(
            r#"[
                {"id": "a", "name": "Ana", "handle": "@a", "followers": 1},
                {"id": "a", "name": "Outra Ana", "handle": "@a2", "followers": 1}
            ]"#,
        );

        let result = load_catalog(file.path());
        assert!(matches!(result, Err(CatalogError::DuplicateId(_))));
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let result = load_catalog(Path::new("/nonexistent/influencers.json"));
        assert!(matches!(result, Err(CatalogError::FileNotFound(_))));
    }

    #[test]
    fn test_load_catalog_invalid_json() {
        let file = write_catalog("not json at all");
        let result = load_catalog(file.path());
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_catalog_empty_fails() {
        let file = write_catalog("[]");
        let result = load_catalog(file.path());
        assert!(matches!(result, Err(CatalogError::Empty)));
    }
}

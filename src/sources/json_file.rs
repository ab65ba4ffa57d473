use crate::models::Listing;
use crate::sources::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info};

/// Listings read from a JSON array on disk
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse a JSON array of listings, rejecting duplicate ids
    pub fn parse(json: &str) -> Result<Vec<Listing>> {
        let listings: Vec<Listing> =
            serde_json::from_str(json).context("Failed to parse listings JSON")?;

        {
            let mut seen = HashSet::new();
            for listing in &listings {
                if !seen.insert(listing.id.as_str()) {
                    anyhow::bail!("Duplicate listing id: {}", listing.id);
                }
            }
        }

        Ok(listings)
    }
}

#[async_trait]
impl ListingSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Listing>> {
        debug!("Reading listings from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let listings = Self::parse(&json)
            .with_context(|| format!("Invalid listings file {}", self.path.display()))?;

        info!("💾 Loaded {} listings from {}", listings.len(), self.path.display());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::mock::mock_listings;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_from_file() {
        let listings = mock_listings();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string_pretty(&listings).unwrap().as_bytes())
            .unwrap();

        let source = JsonFileSource::new(file.path());
        let loaded = source.load().await.unwrap();

        assert_eq!(loaded.len(), listings.len());
        for (loaded, original) in loaded.iter().zip(listings.iter()) {
            assert_eq!(loaded.id, original.id);
            assert_eq!(loaded.price, original.price);
            assert_eq!(loaded.amenities, original.amenities);
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("missing.json"));

        assert!(source.load().await.is_err());
    }

    #[test]
    fn test_parse_uses_camel_case_field_names() {
        let json = r#"[{
            "id": "42",
            "title": "Treehouse",
            "location": "Portland, Oregon",
            "price": 100,
            "rating": 4.5,
            "reviewCount": 12,
            "type": "Treehouse",
            "host": { "name": "Ana", "avatar": "https://example.com/a.jpg", "joinedDate": "2022" },
            "guests": 2,
            "bedrooms": 1,
            "beds": 1,
            "baths": 1,
            "description": "Up in the canopy.",
            "images": [],
            "amenities": ["WiFi"]
        }]"#;

        let listings = JsonFileSource::parse(json).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].kind, "Treehouse");
        assert_eq!(listings[0].review_count, 12);
        assert_eq!(listings[0].host.joined_date, "2022");
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let mut listings = mock_listings();
        listings[1].id = listings[0].id.clone();
        let json = serde_json::to_string(&listings).unwrap();

        let err = JsonFileSource::parse(&json).unwrap_err();
        assert!(err.to_string().contains("Duplicate listing id"));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(JsonFileSource::parse("{ not json").is_err());
    }
}

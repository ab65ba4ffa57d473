use crate::sources::{JsonFileSource, ListingSource, MockListingSource};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming a listings JSON file
pub const LISTINGS_ENV: &str = "STAYBNB_LISTINGS";

/// Runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Listings file; the built-in dataset is used when absent
    pub listings_path: Option<PathBuf>,
    /// Print results as JSON instead of text
    pub json_output: bool,
}

impl Config {
    /// Resolve configuration from command-line values, falling back to the environment
    pub fn load(listings_flag: Option<PathBuf>, json_output: bool) -> Self {
        Self::resolve(listings_flag, std::env::var(LISTINGS_ENV).ok(), json_output)
    }

    fn resolve(listings_flag: Option<PathBuf>, listings_env: Option<String>, json_output: bool) -> Self {
        let listings_path = listings_flag.or_else(|| {
            listings_env
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        });

        Self {
            listings_path,
            json_output,
        }
    }

    pub fn listing_source(&self) -> Box<dyn ListingSource> {
        match &self.listings_path {
            Some(path) => Box::new(JsonFileSource::new(path.clone())),
            None => Box::new(MockListingSource::new()),
        }
    }
}

use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can supply the listing dataset
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Load every listing from the source
    async fn load(&self) -> Result<Vec<Listing>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}

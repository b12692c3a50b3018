//! `/tags` and `/tags/:id`, plus catalog-backed tag resolution.
//!
//! The catalog changes rarely, so it is cached for five minutes and shared
//! by every screen that resolves tag references.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use anvaya_core::{NewTag, Tag, TagId, TagRef, reporting};

use crate::error::Result;

use super::ApiClient;

impl ApiClient {
    /// List the tag catalog, bypassing the cache.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the payload is malformed.
    #[instrument(skip(self))]
    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        self.get_json("/tags").await
    }

    /// Fetch one tag.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the tag does not exist.
    #[instrument(skip(self), fields(tag = %id))]
    pub async fn get_tag(&self, id: &TagId) -> Result<Tag> {
        self.get_json(&format!("/tags/{id}")).await
    }

    /// Create a tag.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the payload is malformed.
    #[instrument(skip(self, tag), fields(name = %tag.name))]
    pub async fn create_tag(&self, tag: &NewTag) -> Result<Tag> {
        self.post_json("/tags", tag).await
    }

    /// The tag catalog, served from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns error if the catalog has to be fetched and the request
    /// fails.
    pub async fn tag_catalog(&self) -> Result<Arc<Vec<Tag>>> {
        if let Some(catalog) = self.tag_catalog_cache().get(&()).await {
            debug!("Cache hit for tag catalog");
            return Ok(catalog);
        }
        let catalog: Arc<Vec<Tag>> = Arc::new(self.list_tags().await?);
        self.tag_catalog_cache().insert((), Arc::clone(&catalog)).await;
        Ok(catalog)
    }

    /// Resolve tag references to display names through the cached catalog.
    ///
    /// Never drops a tag and never fails: if the catalog cannot be fetched,
    /// every reference falls back to its raw stored value.
    #[instrument(skip(self, tags))]
    pub async fn resolve_tags(&self, tags: &[TagRef]) -> Vec<String> {
        if tags.is_empty() {
            return Vec::new();
        }
        match self.tag_catalog().await {
            Ok(catalog) => reporting::resolve_tag_names(tags, &catalog),
            Err(e) => {
                warn!(error = %e, "Tag catalog unavailable; displaying raw tag values");
                tags.iter().map(|tag| tag.raw().to_string()).collect()
            }
        }
    }
}

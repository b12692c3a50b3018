//! `/leads`, `/leads/:id`, and `/leads/:id/comments`.

use tracing::instrument;

use anvaya_core::{Comment, Lead, LeadId, LeadQuery, LeadUpsert, NewComment};

use crate::error::Result;

use super::ApiClient;

impl ApiClient {
    /// List leads, optionally filtered server-side.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the payload is malformed.
    #[instrument(skip(self, query))]
    pub async fn list_leads(&self, query: &LeadQuery) -> Result<Vec<Lead>> {
        if query.is_empty() {
            self.get_json("/leads").await
        } else {
            self.get_json_with_query("/leads", &query.to_pairs()).await
        }
    }

    /// Fetch one lead.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the lead does not exist.
    #[instrument(skip(self), fields(lead = %id))]
    pub async fn get_lead(&self, id: &LeadId) -> Result<Lead> {
        self.get_json(&format!("/leads/{id}")).await
    }

    /// Create a lead.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with the backend's validation message on
    /// rejected input.
    #[instrument(skip(self, lead), fields(name = %lead.name))]
    pub async fn create_lead(&self, lead: &LeadUpsert) -> Result<Lead> {
        self.post_json("/leads", lead).await
    }

    /// Replace a lead.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the lead does not exist.
    #[instrument(skip(self, lead), fields(lead = %id))]
    pub async fn update_lead(&self, id: &LeadId, lead: &LeadUpsert) -> Result<Lead> {
        self.put_json(&format!("/leads/{id}"), lead).await
    }

    /// Delete a lead.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the lead does not exist.
    #[instrument(skip(self), fields(lead = %id))]
    pub async fn delete_lead(&self, id: &LeadId) -> Result<()> {
        self.delete(&format!("/leads/{id}")).await
    }

    /// List the comments on a lead, oldest first as the backend returns
    /// them.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the payload is malformed.
    #[instrument(skip(self), fields(lead = %id))]
    pub async fn lead_comments(&self, id: &LeadId) -> Result<Vec<Comment>> {
        self.get_json(&format!("/leads/{id}/comments")).await
    }

    /// Add a comment to a lead.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the payload is malformed.
    #[instrument(skip(self, comment), fields(lead = %id))]
    pub async fn add_comment(&self, id: &LeadId, comment: &NewComment) -> Result<Comment> {
        self.post_json(&format!("/leads/{id}/comments"), comment).await
    }
}

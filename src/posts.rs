//! Typed calls for the post CRUD endpoint set.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use crate::error::ApiError;
use crate::pipeline::{ApiClient, POST_RESOURCE_PATH};
use crate::transport::{Method, TransportRequest};
use crate::types::{Acknowledgement, ApiEnvelope, Page, PostDetail, PostDraft, PostSummary};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

fn post_endpoint(id: i64) -> String {
    format!("{POST_RESOURCE_PATH}/{id}")
}

/// `/api/post` facade.
pub struct PostApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PostApi<'a> {
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/post?page&size`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error; a superseded identical call yields `Cancelled`.
    pub async fn list(&self, page: u32, size: u32) -> Result<ApiEnvelope<Page<PostSummary>>, ApiError> {
        let request = TransportRequest::new(Method::Get, POST_RESOURCE_PATH)
            .with_query("page", page)
            .with_query("size", size);
        self.client.send_json(request).await
    }

    /// `GET /api/post/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error.
    pub async fn get(&self, id: i64) -> Result<ApiEnvelope<PostDetail>, ApiError> {
        self.client
            .send_json(TransportRequest::new(Method::Get, post_endpoint(id)))
            .await
    }

    /// `POST /api/post`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error.
    pub async fn create(&self, draft: &PostDraft) -> Result<Acknowledgement, ApiError> {
        let body = serde_json::to_value(draft).map_err(|e| ApiError::decode(&e))?;
        self.client
            .send_json(TransportRequest::new(Method::Post, POST_RESOURCE_PATH).with_body(body))
            .await
    }

    /// `PATCH /api/post/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error.
    pub async fn update(&self, id: i64, draft: &PostDraft) -> Result<Acknowledgement, ApiError> {
        let body = serde_json::to_value(draft).map_err(|e| ApiError::decode(&e))?;
        self.client
            .send_json(TransportRequest::new(Method::Patch, post_endpoint(id)).with_body(body))
            .await
    }

    /// `DELETE /api/post/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error.
    pub async fn delete(&self, id: i64) -> Result<Acknowledgement, ApiError> {
        self.client
            .send_json(TransportRequest::new(Method::Delete, post_endpoint(id)))
            .await
    }

    /// Walk the list pages from the first until post `id` shows up and return its author.
    ///
    /// The backend has no "author of post" endpoint, so the edit view checks
    /// ownership this way before loading the post.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when the last page is reached without a match, or
    /// any error from the underlying list calls.
    pub async fn find_author(&self, id: i64, size: u32) -> Result<String, ApiError> {
        let mut page = 0;
        loop {
            let envelope = self.list(page, size).await?;
            let Some(listing) = envelope.into_data() else {
                return Err(not_found(id));
            };
            if let Some(post) = listing.content.iter().find(|p| p.id == id) {
                return Ok(post.username.clone());
            }
            if listing.last || listing.content.is_empty() {
                return Err(not_found(id));
            }
            page += 1;
        }
    }
}

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound { message: format!("post {id} does not exist") }
}

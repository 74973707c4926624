//! Post list and pagination state for the home page.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use forum_api::types::{Page, PostSummary};

/// Paginated post list backed by `GET /api/post`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostListState {
    pub items: Vec<PostSummary>,
    /// Zero-based page currently shown.
    pub page: u32,
    pub total_pages: u32,
    pub loading: bool,
}

impl PostListState {
    /// Replace the list with a freshly fetched page.
    pub fn apply_page(&mut self, page: Page<PostSummary>) {
        self.items = page.content;
        self.page = page.number;
        self.total_pages = page.total_pages;
        self.loading = false;
    }

    /// Whether `page` is a valid target for a page change.
    pub fn can_go_to(&self, page: u32) -> bool {
        page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// Pagination controls only appear once there is more than one page.
    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn page_numbers(&self) -> std::ops::Range<u32> {
        0..self.total_pages
    }
}

//! Pagination types
//!
//! The backend wraps paginated collections in a Spring-style page object.
//! Unpaginated endpoints (and some older deployments of the paginated
//! ones) return a bare JSON array instead, so listing responses are
//! decoded through the untagged [`Listing`] enum.

use serde::{Deserialize, Serialize};

/// One page of a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

/// A listing response: either a page object or a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paged(Page<T>),
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    /// Total number of records across all pages, when known.
    ///
    /// A bare array has no page metadata, so its own length stands in.
    pub fn total_elements(&self) -> u64 {
        match self {
            Listing::Paged(page) => page.total_elements,
            Listing::Plain(items) => items.len() as u64,
        }
    }

    /// The records carried by this response.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Paged(page) => page.content,
            Listing::Plain(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Listing::Paged(page) => page.content.len(),
            Listing::Plain(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

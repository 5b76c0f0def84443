use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_optional_positive, deserialize_optional_string};

/// Page used when the caller does not ask for one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// A photo search with pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoSearch {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
}

impl PhotoSearch {
    /// Search for `query` on the first page with the default page size.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

/// Query parameters accepted by GET /api/photos/search.
///
/// Everything arrives as text; unusable `page` / `perPage` values fall back
/// to the defaults instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSearchQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub query: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_positive")]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_optional_positive")]
    pub per_page: Option<u32>,
}

impl PhotoSearchQuery {
    /// Converts into a search, or `None` when no query text was given.
    pub fn into_search(self) -> Option<PhotoSearch> {
        let query = self.query?;
        Some(
            PhotoSearch::new(query)
                .page(self.page.unwrap_or(DEFAULT_PAGE))
                .per_page(self.per_page.unwrap_or(DEFAULT_PER_PAGE)),
        )
    }
}

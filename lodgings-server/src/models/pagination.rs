//! Pagination and navigation-link math for the lodgings collection
//!
//! Pure functions of the requested page and the total record count; the
//! handlers own fetching the actual slice.

use serde::{Deserialize, Serialize};

/// Fixed number of lodgings per page
pub const PAGE_SIZE: u32 = 10;

/// Query parameters accepted by the list endpoint.
///
/// `page` is kept as a raw string so a malformed value falls back to
/// page 1 instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// Requested page number; absence or parse failure means page 1.
    pub fn requested(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or(1)
    }
}

/// A clamped page of the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Clamped page number (1-indexed)
    pub number: i64,
    /// Last page number (0 when the collection is empty)
    pub last: i64,
    /// Total records across all pages
    pub total: i64,
}

impl Page {
    /// Clamp a requested page number against a total record count.
    ///
    /// Pages below 1 clamp to 1 and pages beyond the end clamp to the
    /// last page. An empty collection has `last == 0` and serves page 1
    /// with an empty slice.
    pub fn clamp(requested: i64, total: i64) -> Self {
        let per_page = PAGE_SIZE as i64;
        let last = (total + per_page - 1) / per_page;
        let number = requested.max(1).min(last.max(1));
        Self {
            number,
            last,
            total,
        }
    }

    /// Offset of the first record on this page.
    pub fn offset(&self) -> i64 {
        (self.number - 1) * PAGE_SIZE as i64
    }

    /// Maximum records on a page.
    pub fn limit(&self) -> i64 {
        PAGE_SIZE as i64
    }

    /// Navigation links relative to `base` (e.g. `/lodgings`).
    pub fn links(&self, base: &str) -> PageLinks {
        let mut links = PageLinks::default();
        if self.number < self.last {
            links.next_page = Some(format!("{}?page={}", base, self.number + 1));
            links.last_page = Some(format!("{}?page={}", base, self.last));
        }
        if self.number > 1 {
            links.prev_page = Some(format!("{}?page={}", base, self.number - 1));
            links.first_page = Some(format!("{}?page=1", base));
        }
        links
    }
}

/// Navigation links; absent keys are omitted from the JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    #[serde(rename = "nextPage", skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(rename = "lastPage", skip_serializing_if = "Option::is_none")]
    pub last_page: Option<String>,
    #[serde(rename = "prevPage", skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    #[serde(rename = "firstPage", skip_serializing_if = "Option::is_none")]
    pub first_page: Option<String>,
}

//! Paginated listing state shared by the doctor and appointment views.
//!
//! DESIGN
//! ======
//! Every fetch is tagged with a sequence number from `begin`; `finish` only
//! applies the response that belongs to the latest request, and it always
//! replaces the visible page rather than appending to it.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::types::PagedResponse;
use crate::state::search::SearchState;

/// Viewport width at which the doctors grid switches to the larger page.
pub const DESKTOP_BREAKPOINT_PX: f64 = 1024.0;
pub const DESKTOP_PAGE_SIZE: u32 = 12;
pub const MOBILE_PAGE_SIZE: u32 = 6;

/// Page size sent with appointment list requests.
pub const APPOINTMENT_PAGE_SIZE: u32 = 10;

/// Doctors-per-page for a given viewport width.
pub fn limit_for_width(width: f64) -> u32 {
    if width >= DESKTOP_BREAKPOINT_PX { DESKTOP_PAGE_SIZE } else { MOBILE_PAGE_SIZE }
}

/// `ceil(total / limit)`, never below one page.
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(limit));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// One page of results as displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Prefer the server's `totalPages`; otherwise derive it from `total`.
    pub fn from_response(resp: PagedResponse<T>, page: u32, limit: u32) -> Self {
        let total_pages = match (resp.total_pages, resp.total) {
            (Some(pages), _) => u32::try_from(pages).unwrap_or(u32::MAX).max(1),
            (None, Some(total)) => total_pages(total, limit),
            (None, None) => 1,
        };
        Self { items: resp.data, page, total_pages }
    }
}

/// Cache key for the doctors list. Any field change triggers a refetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoctorQuery {
    pub page: u32,
    pub limit: u32,
    pub query: String,
    pub specialization: String,
}

impl DoctorQuery {
    /// `None` until the responsive limit is known, which keeps the query
    /// inert instead of firing with an undefined page size.
    pub fn key(page: u32, limit: Option<u32>, search: &SearchState) -> Option<Self> {
        let limit = limit?;
        Some(Self {
            page,
            limit,
            query: search.query.clone(),
            specialization: search.specialization.clone(),
        })
    }
}

/// List view state for one paginated resource.
#[derive(Clone, Debug)]
pub struct ListingState<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl<T> Default for ListingState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), page: 1, total_pages: 1, loading: false, error: None, seq: 0 }
    }
}

impl<T> ListingState<T> {
    /// Mark a fetch as started and return its sequence number.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.seq
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) when a
    /// newer request has started since `seq` was issued.
    pub fn finish(&mut self, seq: u64, result: Result<Page<T>, String>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.page = page.page;
                self.total_pages = page.total_pages;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Move to `page`, clamped to the known range. Returns whether the page
    /// actually changed.
    pub fn go_to(&mut self, page: u32) -> bool {
        let target = page.clamp(1, self.total_pages.max(1));
        if target == self.page {
            return false;
        }
        self.page = target;
        true
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Reset to the first page, as done when filters change.
    pub fn reset_page(&mut self) {
        self.page = 1;
    }
}

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Listing pages share `load_page` so every fetch goes
//! through the same sequence guard.

pub mod dashboard;
pub mod doctor_appointments;
pub mod doctors_list;
pub mod login;
pub mod patient_appointments;
pub mod profile;
pub mod register;

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::PagedResponse;
use crate::state::listing::ListingState;

/// Run one listing fetch. The result is applied only if no newer fetch has
/// started on `listing` in the meantime; items are replaced, never appended.
pub(crate) fn load_page<T, Fut>(listing: RwSignal<ListingState<T>>, page: u32, limit: u32, request: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<PagedResponse<T>, ApiError>> + 'static,
{
    let mut seq = 0;
    listing.update(|l| seq = l.begin());
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = request
            .await
            .map(|resp| crate::state::listing::Page::from_response(resp, page, limit))
            .map_err(|e| {
                log::warn!("listing fetch failed: {e}");
                e.user_message()
            });
        let mut applied = false;
        listing.update(|l| applied = l.finish(seq, result));
        if !applied {
            log::debug!("discarded stale listing response #{seq}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, limit, request);
        listing.update(|l| {
            l.finish(seq, Err(ApiError::Unavailable.user_message()));
        });
    }
}

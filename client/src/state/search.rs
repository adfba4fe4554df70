//! Shared doctor-search filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the navbar search box (after debounce) and the specialization
//! dropdown; read by the doctors list to build its query key.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Committed search filters. Empty strings mean "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub specialization: String,
}

impl SearchState {
    /// Commit a debounced query. Returns whether the filter changed.
    pub fn set_query(&mut self, query: &str) -> bool {
        let query = query.trim();
        if self.query == query {
            return false;
        }
        query.clone_into(&mut self.query);
        true
    }

    /// Returns whether the filter changed.
    pub fn set_specialization(&mut self, specialization: &str) -> bool {
        if self.specialization == specialization {
            return false;
        }
        specialization.clone_into(&mut self.specialization);
        true
    }

    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty() || !self.specialization.is_empty()
    }
}

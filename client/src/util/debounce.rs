//! Generation-counted debounce buffer.
//!
//! Each `push` supersedes the previous one; a timer scheduled for an older
//! generation fires into nothing. The browser timer itself lives with the
//! component (`gloo-timers`), which keeps this logic testable without one.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Idle window before search text is committed.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    pending: Option<T>,
    generation: u64,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self { pending: None, generation: 0 }
    }
}

impl<T> Debouncer<T> {
    /// Buffer `value` and return the generation its timer must present.
    pub fn push(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.pending = Some(value);
        self.generation
    }

    /// Timer callback. Yields the buffered value only for the latest
    /// generation, and only once.
    pub fn fire(&mut self, generation: u64) -> Option<T> {
        if generation != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

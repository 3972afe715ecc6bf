// Ticketing for overlapping poll responses
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out increasing tickets to requests of one kind and only lets a
/// response through if nothing newer has been applied yet.
#[derive(Debug, Default)]
pub struct ResponseOrder {
    next: AtomicU64,
    // One past the highest ticket applied so far
    applied: AtomicU64,
}

impl ResponseOrder {
    pub fn issue(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// Returns false when a newer response already reached the view
    pub fn accept(&self, ticket: u64) -> bool {
        let previous = self.applied.fetch_max(ticket + 1, Ordering::SeqCst);
        previous <= ticket
    }
}

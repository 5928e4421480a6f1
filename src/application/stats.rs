//! Counts derived from the current entry collection. Never stored.

use serde::Serialize;

use crate::domain::entities::{role::Role, waitlist_entry::WaitlistEntry};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistStats {
    pub total: usize,
    pub event_planners: usize,
    pub vendors: usize,
}

impl WaitlistStats {
    pub fn from_entries(entries: &[WaitlistEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut stats, entry| {
            stats.total += 1;
            match entry.role {
                Role::EventPlanner => stats.event_planners += 1,
                Role::Vendor => stats.vendors += 1,
                Role::Other(_) => {}
            }
            stats
        })
    }

    /// Entries counted in `total` but in neither role count.
    pub fn unclassified(&self) -> usize {
        self.total - self.event_planners - self.vendors
    }
}

//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use crate::domain::entities::{role::Role, waitlist_entry::WaitlistEntry};

/// Create a test waitlist entry with sensible defaults.
pub fn create_test_entry(id: i64, overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id,
        name: format!("Signup {id}"),
        email: format!("signup{id}@example.com"),
        occupation: "Wedding planner".to_string(),
        role: Role::EventPlanner,
        created_at: "2025-01-15T10:30:00Z".to_string(),
    };
    overrides(&mut entry);
    entry
}

pub fn entry_with_role(id: i64, role: Role) -> WaitlistEntry {
    create_test_entry(id, |e| e.role = role)
}

/// Wire form of an entry, as the listing endpoint would send it.
pub fn entry_json(entry: &WaitlistEntry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "name": entry.name,
        "email": entry.email,
        "occupation": entry.occupation,
        "role": entry.role.as_str(),
        "created_at": entry.created_at,
    })
}

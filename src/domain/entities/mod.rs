pub mod role;
pub mod waitlist_entry;

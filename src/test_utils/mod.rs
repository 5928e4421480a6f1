//! Test utilities.
//!
//! This module provides:
//! - Test data factories for creating valid waitlist entries
//! - In-memory `WaitlistSource` implementations for driving the controller

mod factories;
mod waitlist_mocks;

pub use factories::*;
pub use waitlist_mocks::*;

//! Terminal presentation of the waitlist: the rendered view and the
//! commands a user can type.

pub mod commands;
pub mod view;

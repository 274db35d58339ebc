//! Page-level containers: layout chrome and route guards.

pub mod admin_guard;
pub mod header;
pub mod layout;

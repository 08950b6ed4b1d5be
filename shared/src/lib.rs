//! Shared types for the Payday workspace
//!
//! Domain models, wire payloads and pagination types exchanged with the
//! payroll REST backend. Used by both payday-client and payday-desk.

pub mod models;
pub mod money;
pub mod page;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use page::{Listing, Page};

//! Fitness Tracker Shared Library
//!
//! This crate contains the wire types, validation helpers and error enums
//! shared between the backend and any Rust client of the API.

pub mod de;
pub mod errors;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use types::*;

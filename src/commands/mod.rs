//! Command implementations.
//!
//! CHANGELOG:
//! - 10/17/2026 - Initial module structure

pub mod inspect;
pub mod link;

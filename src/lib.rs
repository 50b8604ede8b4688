//! wolfies-namematch library
//!
//! Fuzzy record linkage between two lists of free-text names: normalize,
//! deduplicate, score every pair with Jaro-Winkler and keep the best
//! candidate per A-name that clears the threshold.
//!
//! CHANGELOG:
//! - 10/17/2026 - Initial library structure

pub mod commands;
pub mod config;
pub mod error;
pub mod names;
pub mod output;
pub mod table;

pub use config::{ColumnSelector, LinkConfig, DEFAULT_THRESHOLD};
pub use error::LinkError;
pub use names::{find_matches, find_matches_par, normalize, similarity, Match, NameList};

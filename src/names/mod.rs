//! Name normalization, similarity scoring and best-match selection.

pub mod matcher;
pub mod normalize;
pub mod similarity;

pub use matcher::{find_matches, find_matches_par, Match};
pub use normalize::{normalize, NameList};
pub use similarity::similarity;

//! Jaro-Winkler similarity for normalized names.
//!
//! Jaro comes from strsim; the Winkler prefix boost is applied here
//! unconditionally (no 0.7 boost threshold) so scores match the classic
//! `jaro + p * 0.1 * (1 - jaro)` formula at every level.
//!
//! CHANGELOG:
//! - 10/17/2026 - Replaced multi-strategy scoring with single Jaro-Winkler
//! - 10/17/2026 - Initial implementation

use strsim::jaro;

/// Winkler prefix scaling factor.
pub const PREFIX_SCALE: f64 = 0.1;

/// Longest common prefix (in chars) that earns a boost.
pub const MAX_PREFIX: usize = 4;

/// Similarity in [0, 1]. Two empty strings score 1.0; one empty scores 0.0.
pub fn similarity(x: &str, y: &str) -> f64 {
    // Canonical argument order keeps the score symmetric even where greedy
    // Jaro matching is order-sensitive.
    let (x, y) = if x <= y { (x, y) } else { (y, x) };

    let base = jaro(x, y);
    let prefix = common_prefix(x, y);

    (base + prefix as f64 * PREFIX_SCALE * (1.0 - base)).clamp(0.0, 1.0)
}

fn common_prefix(x: &str, y: &str) -> usize {
    x.chars()
        .zip(y.chars())
        .take(MAX_PREFIX)
        .take_while(|(a, b)| a == b)
        .count()
}

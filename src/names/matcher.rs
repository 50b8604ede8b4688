//! All-pairs best-match search between two name lists.
//!
//! CHANGELOG:
//! - 10/17/2026 - Added rayon-backed variant for large A-side lists
//! - 10/17/2026 - Initial implementation

use rayon::prelude::*;
use serde::Serialize;

use super::normalize::NameList;
use super::similarity::similarity;

/// An accepted pair: `a` from list A, its best candidate `b` from list B.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub a: String,
    pub b: String,
    pub score: f64,
}

/// Best candidate in `candidates` for `name`, if it clears `threshold`.
///
/// Only a strictly higher score replaces the current best, so the first
/// candidate (in list order) reaching the maximum wins ties. The running
/// best starts at 0.0, which means a zero-score candidate is never picked.
fn best_match(name: &str, candidates: &NameList, threshold: f64) -> Option<Match> {
    let mut best: Option<(&str, f64)> = None;

    for candidate in candidates {
        let score = similarity(name, candidate);
        if score > best.map_or(0.0, |(_, s)| s) {
            best = Some((candidate.as_str(), score));
        }
    }

    match best {
        Some((b, score)) if score >= threshold => Some(Match {
            a: name.to_string(),
            b: b.to_string(),
            score,
        }),
        _ => None,
    }
}

/// Compare every A-name against every B-name; keep each A-name's best
/// candidate when it scores at least `threshold`.
///
/// Output follows A-list order. One B-name may serve several A-names.
pub fn find_matches(list_a: &NameList, list_b: &NameList, threshold: f64) -> Vec<Match> {
    tracing::debug!(a = list_a.len(), b = list_b.len(), threshold, "matching (sequential)");

    let matches: Vec<Match> = list_a
        .iter()
        .filter_map(|a| best_match(a, list_b, threshold))
        .collect();

    tracing::debug!(matches = matches.len(), "matching complete");
    matches
}

/// Same result as [`find_matches`], with the A-side loop spread over the
/// rayon pool. `collect` keeps A-list order.
pub fn find_matches_par(list_a: &NameList, list_b: &NameList, threshold: f64) -> Vec<Match> {
    tracing::debug!(a = list_a.len(), b = list_b.len(), threshold, "matching (parallel)");

    let matches: Vec<Match> = list_a
        .as_slice()
        .par_iter()
        .filter_map(|a| best_match(a, list_b, threshold))
        .collect();

    tracing::debug!(matches = matches.len(), "matching complete");
    matches
}

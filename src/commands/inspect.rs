//! Diagnostic commands: score, normalize.
//!
//! Handy for picking a threshold: shows exactly what the link command
//! compares and the score it would see.
//!
//! CHANGELOG:
//! - 10/17/2026 - Initial implementation

use anyhow::Result;
use serde::Serialize;

use crate::names::{normalize, similarity};
use crate::output::OutputControls;

#[derive(Debug, Serialize)]
pub struct ScoreReport {
    pub a: String,
    pub b: String,
    pub score: f64,
    pub passes: bool,
    pub threshold: f64,
}

/// Normalize both inputs and score them.
pub fn score_names(a: &str, b: &str, threshold: f64) -> ScoreReport {
    let a = normalize(Some(a));
    let b = normalize(Some(b));
    let score = similarity(&a, &b);
    ScoreReport {
        passes: score >= threshold,
        a,
        b,
        score,
        threshold,
    }
}

/// Score two names.
pub fn score(a: &str, b: &str, threshold: f64, output: &OutputControls) -> Result<()> {
    let report = score_names(a, b, threshold);

    if output.json {
        output.print(&report);
    } else {
        println!("\"{}\" vs \"{}\"", report.a, report.b);
        println!(
            "similarity: {:.4} ({} threshold {})",
            report.score,
            if report.passes { "meets" } else { "below" },
            report.threshold
        );
    }

    Ok(())
}

/// Print the normalized form of a name.
pub fn normalize_text(text: &str, output: &OutputControls) -> Result<()> {
    let normalized = normalize(Some(text));

    if output.json {
        output.print(&serde_json::json!({
            "raw": text,
            "normalized": normalized,
        }));
    } else {
        println!("{}", normalized);
    }

    Ok(())
}

//! Render matches as CSV: A-name, B-name, similarity (3 decimals).
//!
//! CHANGELOG:
//! - 10/17/2026 - Initial implementation

use std::io;
use std::path::Path;

use crate::error::{LinkError, Result};
use crate::names::Match;

/// Column labels for the output header row.
#[derive(Debug, Clone)]
pub struct Header {
    pub a: String,
    pub b: String,
    pub score: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            a: "FileA_Project".to_string(),
            b: "FileB_Project".to_string(),
            score: "Similarity".to_string(),
        }
    }
}

/// Write header + one record per match. Fields containing the delimiter,
/// quotes or newlines are quoted.
pub fn write_matches<W: io::Write>(
    output: W,
    matches: &[Match],
    header: &Header,
    delimiter: u8,
) -> std::result::Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(output);

    writer.write_record([&header.a, &header.b, &header.score])?;
    for m in matches {
        let score = format!("{:.3}", m.score);
        writer.write_record([m.a.as_str(), m.b.as_str(), score.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the matches to it.
pub fn write_matches_to_path<P: AsRef<Path>>(
    path: P,
    matches: &[Match],
    header: &Header,
    delimiter: u8,
) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source: csv::Error| LinkError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::create(path).map_err(|e| write_err(e.into()))?;
    write_matches(io::BufWriter::new(file), matches, header, delimiter).map_err(write_err)?;

    tracing::debug!(path = %path.display(), records = matches.len(), "wrote matches");
    Ok(())
}

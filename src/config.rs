//! Run configuration: threshold, column selection, CSV dialect.
//!
//! CHANGELOG:
//! - 10/17/2026 - Added per-side column selection and parallel flag
//! - 10/17/2026 - Initial implementation

use std::fmt;
use std::str::FromStr;

use crate::error::{LinkError, Result};

/// Default acceptance threshold (inclusive lower bound).
pub const DEFAULT_THRESHOLD: f64 = 0.88;

/// Which CSV column holds the names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// 0-based column index.
    Index(usize),
    /// Header name (requires a header row).
    Name(String),
}

impl Default for ColumnSelector {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl FromStr for ColumnSelector {
    type Err = String;

    /// All digits parse as an index, anything else as a header name.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("column selector cannot be empty".to_string());
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            s.parse::<usize>()
                .map(Self::Index)
                .map_err(|e| format!("invalid column index '{}': {}", s, e))
        } else {
            Ok(Self::Name(s.to_string()))
        }
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "#{}", i),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Settings for one `link` run.
#[derive(Debug, Clone)]
pub struct LinkConfig {
    pub threshold: f64,
    pub column_a: ColumnSelector,
    pub column_b: ColumnSelector,
    pub has_header: bool,
    pub delimiter: char,
    pub parallel: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            column_a: ColumnSelector::default(),
            column_b: ColumnSelector::default(),
            has_header: true,
            delimiter: ',',
            parallel: false,
        }
    }
}

impl LinkConfig {
    /// Reject thresholds outside [0, 1] (including NaN) and non-ASCII delimiters.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(LinkError::InvalidThreshold(self.threshold));
        }
        self.delimiter_byte()?;
        Ok(())
    }

    /// Delimiter as the single byte the csv crate expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(LinkError::InvalidDelimiter(self.delimiter))
        }
    }
}

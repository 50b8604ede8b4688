//! Extract one column of raw name fields from a CSV source.
//!
//! CHANGELOG:
//! - 10/17/2026 - Column selection by header name
//! - 10/17/2026 - Initial implementation

use std::io;
use std::path::{Path, PathBuf};

use crate::config::ColumnSelector;
use crate::error::{LinkError, Result};

/// How to read the name column.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    pub column: ColumnSelector,
    pub has_header: bool,
    pub delimiter: u8,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            column: ColumnSelector::default(),
            has_header: true,
            delimiter: b',',
        }
    }
}

/// Read the selected column of a CSV file.
///
/// Each data row yields one field; rows too short to have the column
/// yield `None`. The header row, if any, is not returned.
pub fn read_column<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Vec<Option<String>>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| LinkError::Read {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    read_column_from(file, options, path)
}

/// Read the selected column from any reader; `source` names it in errors.
pub fn read_column_from<R: io::Read>(
    input: R,
    options: &ReadOptions,
    source: &Path,
) -> Result<Vec<Option<String>>> {
    let read_err = |e: csv::Error| LinkError::Read {
        path: source.to_path_buf(),
        source: e,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_header)
        .flexible(true)
        .from_reader(input);

    let index = match &options.column {
        ColumnSelector::Index(i) => *i,
        ColumnSelector::Name(name) => {
            if !options.has_header {
                return Err(LinkError::HeaderRequired {
                    path: PathBuf::from(source),
                    column: name.clone(),
                });
            }
            let headers = reader.headers().map_err(read_err)?;
            headers
                .iter()
                .position(|h| h.trim() == name.as_str())
                .ok_or_else(|| LinkError::MissingColumn {
                    path: PathBuf::from(source),
                    column: name.clone(),
                })?
        }
    };

    let mut fields = Vec::new();
    for record in reader.records() {
        let record = record.map_err(read_err)?;
        fields.push(record.get(index).map(String::from));
    }

    tracing::debug!(
        source = %source.display(),
        column = %options.column,
        rows = fields.len(),
        "read name column"
    );
    Ok(fields)
}

//! Name normalization and deduplicated name lists.
//!
//! CHANGELOG:
//! - 10/17/2026 - Strip Unicode punctuation in addition to ASCII punct
//! - 10/17/2026 - Initial implementation

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Unicode punctuation (`P*`) plus the ASCII `[:punct:]` set, which also
/// covers ASCII symbols such as `$`, `+` and `|`.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{P}[:punct:]]+").expect("punctuation pattern is valid"));

/// Canonicalize raw text for comparison.
///
/// Lowercases, replaces each punctuation run with a space, collapses
/// whitespace runs to one space and trims. `None` maps to `""`.
pub fn normalize(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    let lowered = raw.to_lowercase();
    let spaced = PUNCTUATION.replace_all(&lowered, " ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Ordered, deduplicated list of normalized names (first occurrence wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    /// Normalize raw fields and drop duplicates of the normalized value.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        Self::from_normalized(raw.into_iter().map(|r| normalize(r.as_ref().map(S::as_ref))))
    }

    /// Deduplicate values that are already normalized.
    pub fn from_normalized<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        for name in names {
            let name = name.into();
            if seen.insert(name.clone()) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

impl<'a> IntoIterator for &'a NameList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CommentCheckerError, Result, SourceRole};

const FIELD_SEPARATOR: char = ',';
const PAIR_SEPARATOR: char = ' ';

/// Comment markers per file extension, as declared by an external table.
///
/// Extensions are the literal suffix including the leading dot (`.py`) and
/// are stored case-sensitively as written. Every extension in the table has
/// at least one single-line marker and at least one block marker pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTable {
    single: IndexMap<String, Vec<String>>,
    /// Flattened block pairs: start, end, start, end, ...
    block: IndexMap<String, Vec<String>>,
    /// Every record's extension in source order, duplicates included.
    extensions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSyntax {
    single: Vec<String>,
    block: Vec<(String, String)>,
}

impl SyntaxTable {
    /// Load a table from disk.
    ///
    /// Files ending in `.toml` are read as TOML tables, everything else as
    /// comma separated records.
    ///
    /// # Errors
    /// `SourceNotFound` if the file cannot be read, `EmptySource` if it holds
    /// no records, `Format` for any malformed record.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| CommentCheckerError::SourceNotFound {
            role: SourceRole::SyntaxTable,
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);

        let table = if is_toml(path) {
            Self::from_toml_str(&text)?
        } else {
            Self::from_csv_str(&text)?
        };

        if table.extensions.is_empty() {
            return Err(CommentCheckerError::EmptySource {
                path: path.to_path_buf(),
            });
        }

        debug!(
            path = %path.display(),
            records = table.extensions.len(),
            extensions = table.len(),
            "loaded syntax table"
        );
        Ok(table)
    }

    /// Parse comma separated records of the form
    /// `ext,N,single_1,..,single_N,M,start end,..`.
    ///
    /// Fields are taken literally; there is no quoting, so markers such as
    /// `"""` need no escaping. An empty input yields an empty table.
    ///
    /// # Errors
    /// Returns `Format` naming the first offending record.
    pub fn from_csv_str(text: &str) -> Result<Self> {
        let mut table = Self::default();

        for (idx, line) in text.lines().enumerate() {
            let number = idx + 1;
            if line.trim().is_empty() {
                return Err(CommentCheckerError::format(format!(
                    "record {number} is blank"
                )));
            }

            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
            let (single, block) = parse_record(number, &fields)?;
            table.insert(fields[0], single, block);
        }

        Ok(table)
    }

    /// Parse a TOML table keyed by extension:
    ///
    /// ```toml
    /// [".py"]
    /// single = ["#"]
    /// block = [["'''", "'''"]]
    /// ```
    ///
    /// # Errors
    /// Returns `Format` if the document does not parse or an entry declares
    /// no single-line markers or no block pairs.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let entries: IndexMap<String, TomlSyntax> =
            toml::from_str(text).map_err(|e| CommentCheckerError::format(e.to_string()))?;

        let mut table = Self::default();
        for (extension, syntax) in entries {
            if syntax.single.is_empty() {
                return Err(CommentCheckerError::format(format!(
                    "{extension}: must declare at least one single-line marker"
                )));
            }
            if syntax.block.is_empty() {
                return Err(CommentCheckerError::format(format!(
                    "{extension}: must declare at least one block marker"
                )));
            }
            if syntax.single.iter().any(String::is_empty)
                || syntax.block.iter().any(|(s, e)| s.is_empty() || e.is_empty())
            {
                return Err(CommentCheckerError::format(format!(
                    "{extension}: markers must not be empty"
                )));
            }

            let block = syntax
                .block
                .into_iter()
                .flat_map(|(start, end)| [start, end])
                .collect();
            table.insert(&extension, syntax.single, block);
        }

        Ok(table)
    }

    fn insert(&mut self, extension: &str, single: Vec<String>, block: Vec<String>) {
        self.single.insert(extension.to_string(), single);
        self.block.insert(extension.to_string(), block);
        self.extensions.push(extension.to_string());
    }

    /// Single-line markers by extension.
    #[must_use]
    pub const fn single_by_extension(&self) -> &IndexMap<String, Vec<String>> {
        &self.single
    }

    /// Flattened block marker pairs by extension.
    #[must_use]
    pub const fn block_by_extension(&self) -> &IndexMap<String, Vec<String>> {
        &self.block
    }

    #[must_use]
    pub fn single_markers(&self, extension: &str) -> Option<&[String]> {
        self.single.get(extension).map(Vec::as_slice)
    }

    #[must_use]
    pub fn block_markers(&self, extension: &str) -> Option<&[String]> {
        self.block.get(extension).map(Vec::as_slice)
    }

    /// Block markers regrouped into `(start, end)` pairs.
    #[must_use]
    pub fn block_pairs(&self, extension: &str) -> Option<Vec<(&str, &str)>> {
        self.block.get(extension).map(|markers| {
            markers
                .chunks_exact(2)
                .map(|pair| (pair[0].as_str(), pair[1].as_str()))
                .collect()
        })
    }

    /// Extensions in record order, duplicates preserved.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    #[must_use]
    pub fn contains(&self, extension: &str) -> bool {
        self.single.contains_key(extension) || self.block.contains_key(extension)
    }

    /// Number of distinct extensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.single.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.single.is_empty()
    }

    /// Find the declared key for a file extension.
    ///
    /// An exact match wins. Otherwise a fully uppercase extension (`.JAVA`)
    /// matches the declared key with the same uppercase form. Mixed case
    /// (`.JaVa`) never matches.
    #[must_use]
    pub fn resolve_extension(&self, extension: &str) -> Option<&str> {
        if let Some((key, _)) = self.single.get_key_value(extension) {
            return Some(key.as_str());
        }
        if let Some((key, _)) = self.block.get_key_value(extension) {
            return Some(key.as_str());
        }

        if !is_fully_uppercase(extension) {
            return None;
        }
        self.single
            .keys()
            .chain(self.block.keys())
            .find(|key| key.to_uppercase() == extension)
            .map(String::as_str)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

fn is_fully_uppercase(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

/// Validate one record and split it into single markers and flattened block markers.
fn parse_record(number: usize, fields: &[&str]) -> Result<(Vec<String>, Vec<String>)> {
    if fields[0].is_empty() {
        return Err(CommentCheckerError::format(format!(
            "record {number}: missing extension"
        )));
    }

    let single_count = parse_count(number, fields.get(1), "single-line marker count")?;
    if single_count == 0 {
        return Err(CommentCheckerError::format(format!(
            "record {number}: must declare at least one single-line marker"
        )));
    }

    let block_offset = single_count
        .checked_add(2)
        .ok_or_else(|| count_overflow(number))?;
    let block_count = parse_count(number, fields.get(block_offset), "block marker count")?;
    if block_count == 0 {
        return Err(CommentCheckerError::format(format!(
            "record {number}: must declare at least one block marker"
        )));
    }

    let expected = block_offset
        .checked_add(1)
        .and_then(|n| n.checked_add(block_count))
        .ok_or_else(|| count_overflow(number))?;
    if fields.len() != expected {
        return Err(CommentCheckerError::format(format!(
            "record {number}: expected {expected} fields, found {}",
            fields.len()
        )));
    }

    let single: Vec<String> = fields[2..block_offset]
        .iter()
        .map(ToString::to_string)
        .collect();
    if single.iter().any(String::is_empty) {
        return Err(CommentCheckerError::format(format!(
            "record {number}: single-line markers must not be empty"
        )));
    }

    let mut block = Vec::with_capacity(block_count * 2);
    for field in &fields[block_offset + 1..] {
        let (start, end) = parse_pair(field).ok_or_else(|| {
            CommentCheckerError::format(format!(
                "record {number}: block marker '{field}' must be 'start end'"
            ))
        })?;
        block.push(start.to_string());
        block.push(end.to_string());
    }

    Ok((single, block))
}

fn parse_count(number: usize, field: Option<&&str>, what: &str) -> Result<usize> {
    let field = field.copied().unwrap_or_default();
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CommentCheckerError::format(format!(
            "record {number}: {what} must be a non-negative integer, found '{field}'"
        )));
    }
    field.parse().map_err(|_| {
        CommentCheckerError::format(format!("record {number}: {what} '{field}' is too large"))
    })
}

fn count_overflow(number: usize) -> CommentCheckerError {
    CommentCheckerError::format(format!(
        "record {number}: marker counts exceed the addressable field count"
    ))
}

fn parse_pair(field: &str) -> Option<(&str, &str)> {
    let (start, end) = field.split_once(PAIR_SEPARATOR)?;
    if start.is_empty() || end.is_empty() || end.contains(PAIR_SEPARATOR) {
        return None;
    }
    Some((start, end))
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;

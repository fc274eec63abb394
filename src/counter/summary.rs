use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{CommentCheckerError, Result, SourceRole};
use crate::language::SyntaxTable;

use super::CommentPatterns;

const TODO_MARKER: &str = "TODO";

/// Comment counts for one file, in report order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineSummary {
    /// Lines that are not blank after trimming trailing whitespace.
    pub total_lines: usize,
    /// Physical lines covered by any comment.
    pub comment_lines: usize,
    pub single_line_comments: usize,
    /// Physical lines covered by block comments.
    pub comment_lines_within_block: usize,
    pub block_line_comments: usize,
    /// Comments whose text contains `TODO`.
    pub todo_count: usize,
}

impl LineSummary {
    #[must_use]
    pub const fn as_tuple(&self) -> (usize, usize, usize, usize, usize, usize) {
        (
            self.total_lines,
            self.comment_lines,
            self.single_line_comments,
            self.comment_lines_within_block,
            self.block_line_comments,
            self.todo_count,
        )
    }

    #[must_use]
    pub const fn to_array(&self) -> [usize; 6] {
        [
            self.total_lines,
            self.comment_lines,
            self.single_line_comments,
            self.comment_lines_within_block,
            self.block_line_comments,
            self.todo_count,
        ]
    }
}

pub struct LineClassifier {
    patterns: CommentPatterns,
}

impl LineClassifier {
    #[must_use]
    pub const fn new(patterns: CommentPatterns) -> Self {
        Self { patterns }
    }

    /// # Errors
    /// Propagates pattern building errors for `extension`.
    pub fn for_extension(table: &SyntaxTable, extension: &str) -> Result<Self> {
        CommentPatterns::build(table, extension).map(Self::new)
    }

    /// Count comments in `text`.
    ///
    /// A combined match counts as a block comment when no single-line match
    /// has the same text. The comparison is by text, not position, so two
    /// different comments with identical text are indistinguishable.
    #[must_use]
    pub fn summarize(&self, text: &str) -> LineSummary {
        let all_comments = self.patterns.all_comments(text);
        let single_matches = self.patterns.single_line_comments(text);

        let single_texts: HashSet<&str> = single_matches.iter().copied().collect();
        let block_comments: Vec<&str> = all_comments
            .iter()
            .copied()
            .filter(|comment| !single_texts.contains(comment))
            .collect();

        LineSummary {
            total_lines: count_non_blank_lines(text),
            comment_lines: all_comments.iter().map(|c| physical_lines(c)).sum(),
            single_line_comments: single_matches.len(),
            comment_lines_within_block: block_comments.iter().map(|c| physical_lines(c)).sum(),
            block_line_comments: block_comments.len(),
            todo_count: all_comments
                .iter()
                .filter(|comment| comment.contains(TODO_MARKER))
                .count(),
        }
    }
}

/// Load the table at `table_path` and classify `file_path` with it.
///
/// # Errors
/// Any table loading error, then any error of [`classify_with_table`].
pub fn classify(table_path: &Path, file_path: &Path) -> Result<LineSummary> {
    let table = SyntaxTable::load(table_path)?;
    classify_with_table(&table, file_path)
}

/// Classify the lines of `file_path` using the markers declared for its extension.
///
/// # Errors
/// `SourceNotFound` if the file cannot be read, `UnsupportedExtension` if its
/// extension has no usable entry in `table`.
pub fn classify_with_table(table: &SyntaxTable, file_path: &Path) -> Result<LineSummary> {
    classify_with_extension(table, file_path).map(|(_, summary)| summary)
}

/// Like [`classify_with_table`], also returning the table key the file resolved to.
///
/// # Errors
/// Same as [`classify_with_table`].
pub fn classify_with_extension<'t>(
    table: &'t SyntaxTable,
    file_path: &Path,
) -> Result<(&'t str, LineSummary)> {
    let raw = read_source(file_path)?;
    let text = normalize_newlines(&raw);

    let declared = resolve_file_extension(table, file_path)?;

    let summary = LineClassifier::for_extension(table, declared)?.summarize(&text);
    debug!(
        path = %file_path.display(),
        extension = declared,
        ?summary,
        "classified file"
    );
    Ok((declared, summary))
}

/// Table key used for `file_path`; see [`SyntaxTable::resolve_extension`].
///
/// # Errors
/// `UnsupportedExtension` if the file has no extension or it is not declared.
pub fn resolve_file_extension<'t>(table: &'t SyntaxTable, file_path: &Path) -> Result<&'t str> {
    let extension = file_extension(file_path).unwrap_or_default();
    table
        .resolve_extension(&extension)
        .ok_or_else(|| CommentCheckerError::unsupported(extension))
}

/// Extension of `path` with its leading dot, as written (`Flight.JAVA` -> `.JAVA`).
#[must_use]
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}

fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| CommentCheckerError::SourceNotFound {
        role: SourceRole::InputFile,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

fn count_non_blank_lines(text: &str) -> usize {
    text.lines()
        .filter(|line| !line.trim_end().is_empty())
        .count()
}

fn physical_lines(comment: &str) -> usize {
    comment.matches('\n').count() + 1
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;

use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::error::{CommentCheckerError, Result};
use crate::language::SyntaxTable;

/// Everything after a single-line marker up to the end of its line.
const REST_OF_LINE: &str = "(?:.*)$";
/// Shortest run of any characters, newlines included.
const BLOCK_BODY: &str = "(?s:.*?)";

/// The matcher pair synthesized for one extension.
///
/// `combined` matches everything `single_line` matches plus block comment
/// spans. Single-line alternatives come first in `combined`, so at a given
/// position a single-line comment wins over a block that starts there too.
#[derive(Debug, Clone)]
pub struct CommentPatterns {
    single_line: Regex,
    combined: Regex,
}

impl CommentPatterns {
    /// Build the matcher pair for `extension` from a loaded table.
    ///
    /// # Errors
    /// See [`build_patterns`].
    pub fn build(table: &SyntaxTable, extension: &str) -> Result<Self> {
        build_patterns(
            table.single_by_extension(),
            table.block_by_extension(),
            extension,
        )
    }

    #[must_use]
    pub const fn single_line(&self) -> &Regex {
        &self.single_line
    }

    #[must_use]
    pub const fn combined(&self) -> &Regex {
        &self.combined
    }

    /// Texts of all single-line comments in `text`, in order.
    #[must_use]
    pub fn single_line_comments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.single_line.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Texts of all comments, single-line or block, in order.
    #[must_use]
    pub fn all_comments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.combined.find_iter(text).map(|m| m.as_str()).collect()
    }
}

/// Synthesize the single-line and combined patterns for `extension`.
///
/// Markers are escaped, so regex metacharacters in them match literally.
///
/// # Errors
/// `UnsupportedExtension` if the extension is in neither map, `Format` if it
/// lacks single-line or block markers, `Pattern` if compilation fails.
pub fn build_patterns(
    single_by_ext: &IndexMap<String, Vec<String>>,
    block_by_ext: &IndexMap<String, Vec<String>>,
    extension: &str,
) -> Result<CommentPatterns> {
    let (single, block) = match (single_by_ext.get(extension), block_by_ext.get(extension)) {
        (None, None) => return Err(CommentCheckerError::unsupported(extension)),
        (Some(single), Some(block)) if !single.is_empty() && !block.is_empty() => (single, block),
        _ => {
            return Err(CommentCheckerError::format(format!(
                "{extension}: must declare both single-line and block markers"
            )));
        }
    };
    if block.len() % 2 != 0 {
        return Err(CommentCheckerError::format(format!(
            "{extension}: block marker '{}' has no end marker",
            block[block.len() - 1]
        )));
    }

    let single_alternatives = single
        .iter()
        .map(|marker| format!("{}{REST_OF_LINE}", regex::escape(marker)))
        .collect::<Vec<_>>()
        .join("|");
    let block_alternatives = block
        .chunks_exact(2)
        .map(|pair| {
            format!(
                "{}{BLOCK_BODY}{}",
                regex::escape(&pair[0]),
                regex::escape(&pair[1])
            )
        })
        .collect::<Vec<_>>()
        .join("|");

    let single_source = format!("({single_alternatives})");
    let combined_source = format!("({single_alternatives}|{block_alternatives})");
    debug!(
        extension,
        single_line = %single_source,
        combined = %combined_source,
        "built comment patterns"
    );

    Ok(CommentPatterns {
        single_line: compile(extension, &single_source)?,
        combined: compile(extension, &combined_source)?,
    })
}

fn compile(extension: &str, source: &str) -> Result<Regex> {
    RegexBuilder::new(source)
        .multi_line(true)
        .build()
        .map_err(|source| CommentCheckerError::Pattern {
            extension: extension.to_string(),
            source,
        })
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;

mod pattern;
mod summary;

pub use pattern::{CommentPatterns, build_patterns};
pub use summary::{
    LineClassifier, LineSummary, classify, classify_with_extension, classify_with_table,
    file_extension, resolve_file_extension,
};

#[cfg(test)]
mod test_fixtures;

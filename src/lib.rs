pub mod cli;
pub mod counter;
pub mod error;
pub mod language;
pub mod logging;
pub mod output;

pub use counter::{LineSummary, classify};
pub use error::{CommentCheckerError, Result};
pub use language::SyntaxTable;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_SOURCE_NOT_FOUND: i32 = 1;
pub const EXIT_FORMAT_ERROR: i32 = 2;
pub const EXIT_UNSUPPORTED_EXTENSION: i32 = 3;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

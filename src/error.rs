use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::{EXIT_FORMAT_ERROR, EXIT_SOURCE_NOT_FOUND, EXIT_UNSUPPORTED_EXTENSION};

/// Which input of a classification could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRole {
    SyntaxTable,
    InputFile,
}

impl fmt::Display for SourceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SyntaxTable => f.write_str("Syntax table"),
            Self::InputFile => f.write_str("Input file"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CommentCheckerError {
    #[error("{role} not found: {}", path.display())]
    SourceNotFound {
        role: SourceRole,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Syntax table is empty: {}", path.display())]
    EmptySource { path: PathBuf },

    #[error("Syntax table is in wrong format: {reason}")]
    Format { reason: String },

    #[error("Unsupported file extension: '{extension}'")]
    UnsupportedExtension { extension: String },

    #[error("Failed to build comment pattern for '{extension}'")]
    Pattern {
        extension: String,
        #[source]
        source: regex::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CommentCheckerError {
    pub fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }

    pub fn unsupported(extension: impl Into<String>) -> Self {
        Self::UnsupportedExtension {
            extension: extension.into(),
        }
    }

    /// Short name of the error kind, stable across message wording changes.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::SourceNotFound { .. } => "SourceNotFound",
            Self::EmptySource { .. } => "EmptySource",
            Self::Format { .. } => "Format",
            Self::UnsupportedExtension { .. } => "UnsupportedExtension",
            Self::Pattern { .. } => "Pattern",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Actionable hint shown below the error message.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::SourceNotFound { .. } => {
                Some("check that the path exists and is readable from the current directory")
            }
            Self::EmptySource { .. } => {
                Some("add at least one record: extension,count,markers...,count,\"start end\"...")
            }
            Self::Format { .. } => {
                Some("each record needs at least one single-line marker and one block marker pair")
            }
            Self::UnsupportedExtension { .. } => {
                Some("add a record for this extension to the syntax table")
            }
            Self::Pattern { .. } | Self::JsonSerialize(_) => None,
        }
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::SourceNotFound { .. } | Self::EmptySource { .. } => EXIT_SOURCE_NOT_FOUND,
            Self::Format { .. } | Self::Pattern { .. } | Self::JsonSerialize(_) => {
                EXIT_FORMAT_ERROR
            }
            Self::UnsupportedExtension { .. } => EXIT_UNSUPPORTED_EXTENSION,
        }
    }
}

pub type Result<T> = std::result::Result<T, CommentCheckerError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

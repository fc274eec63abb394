use std::fmt::Write;

use crate::error::Result;

use super::{FileReport, OutputFormatter, ansi};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, value: usize, color: &str) -> String {
        if self.use_colors {
            format!("{color}{value}{}", ansi::RESET)
        } else {
            value.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &FileReport) -> Result<String> {
        let summary = &report.summary;
        let mut output = String::new();

        if self.verbose > 0 {
            writeln!(
                output,
                "{} ({})",
                report.path.display(),
                report.extension
            )
            .ok();
        }

        let todo_color = if summary.todo_count > 0 {
            ansi::YELLOW
        } else {
            ansi::CYAN
        };
        let rows = [
            ("Total # of lines", summary.total_lines, ansi::CYAN),
            ("Total # of comment lines", summary.comment_lines, ansi::CYAN),
            (
                "Total # of single line comments",
                summary.single_line_comments,
                ansi::CYAN,
            ),
            (
                "Total # of comment lines within block comments",
                summary.comment_lines_within_block,
                ansi::CYAN,
            ),
            (
                "Total # of block line comments",
                summary.block_line_comments,
                ansi::CYAN,
            ),
            ("Total # of TODO's ", summary.todo_count, todo_color),
        ];

        for (label, value, color) in rows {
            writeln!(output, "{label}: {}", self.colorize(value, color)).ok();
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

use serde::Serialize;

use crate::counter::LineSummary;
use crate::error::Result;

use super::{FileReport, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    file: String,
    extension: &'a str,
    #[serde(flatten)]
    summary: &'a LineSummary,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &FileReport) -> Result<String> {
        let output = JsonOutput {
            file: report.path.display().to_string(),
            extension: &report.extension,
            summary: &report.summary,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

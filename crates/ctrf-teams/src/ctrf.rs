use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level CTRF report as produced by CTRF-compatible reporters.
#[derive(Debug, Deserialize)]
pub struct Report {
    pub results: Results,
}

#[derive(Debug, Deserialize)]
pub struct Results {
    pub summary: Summary,
    #[serde(default)]
    pub environment: Option<Environment>,
    #[serde(default)]
    pub tests: Vec<Test>,
}

/// Aggregate counts plus run start/stop timestamps (epoch milliseconds).
#[derive(Debug, Deserialize)]
pub struct Summary {
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
    pub pending: u64,
    pub other: u64,
    pub start: u64,
    pub stop: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    #[serde(default)]
    pub build_name: Option<String>,
    #[serde(default)]
    pub build_number: Option<String>,
    #[serde(default)]
    pub build_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Test {
    pub name: String,
    pub status: TestStatus,
    #[serde(default)]
    pub flaky: bool,
    /// AI-generated failure summary, when a reporter attached one.
    #[serde(default)]
    pub ai: Option<String>,
    /// Failure message.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    Pending,
    #[serde(other)]
    Other,
}

/// Load and parse a CTRF report from a JSON file.
pub fn parse_file(path: &Path) -> Result<Report> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Reading CTRF report {}", path.display()))?;
    let report: Report = serde_json::from_str(&contents)
        .with_context(|| format!("Parsing CTRF report {}", path.display()))?;
    log::debug!(
        "parsed report: {} tests, {} failed",
        report.results.tests.len(),
        report.results.summary.failed
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_minimal_report() {
        let json = r#"{
            "results": {
                "summary": {
                    "passed": 3, "failed": 1, "skipped": 0,
                    "pending": 0, "other": 0,
                    "start": 1700000000000, "stop": 1700000005000
                },
                "tests": [
                    { "name": "login works", "status": "passed" },
                    { "name": "checkout fails", "status": "failed", "flaky": true, "message": "timeout" }
                ]
            }
        }"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let report = parse_file(file.path()).unwrap();
        assert_eq!(report.results.summary.failed, 1);
        assert!(report.results.environment.is_none());
        assert_eq!(report.results.tests.len(), 2);
        assert_eq!(report.results.tests[1].status, TestStatus::Failed);
        assert!(report.results.tests[1].flaky);
    }

    #[test]
    fn unknown_status_folds_into_other() {
        let status: TestStatus = serde_json::from_str("\"timedOut\"").unwrap();
        assert_eq!(status, TestStatus::Other);
    }

    #[test]
    fn malformed_report_errors_with_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        let err = parse_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Parsing CTRF report"));
    }
}

//! Validation reports.

use serde::Serialize;

use crate::check::CheckError;

/// All errors found on one row.
#[derive(Debug, Clone, Serialize)]
pub struct RowFinding {
    /// 1-based source line number (header is line 1).
    pub line: u64,
    /// Errors in check order.
    pub errors: Vec<CheckError>,
}

/// The exhaustive result of validating one resource.
///
/// `valid` is true iff no errors were found across all rows. The report is
/// the sole data-quality feedback channel: it enumerates every violation,
/// not merely the first.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub valid: bool,
    /// Number of data rows streamed.
    pub row_count: u64,
    pub findings: Vec<RowFinding>,
}

impl Report {
    pub(crate) fn new() -> Self {
        Self {
            valid: true,
            row_count: 0,
            findings: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, line: u64, errors: Vec<CheckError>) {
        if !errors.is_empty() {
            self.valid = false;
            self.findings.push(RowFinding { line, errors });
        }
    }

    /// Total number of errors across all findings.
    pub fn error_count(&self) -> usize {
        self.findings.iter().map(|f| f.errors.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_validity_tracks_findings() {
        let mut report = Report::new();
        assert!(report.valid);

        report.record(2, Vec::new());
        assert!(report.valid);
        assert!(report.findings.is_empty());

        report.record(3, vec![CheckError::row_scoped("column-count", "ragged")]);
        assert!(!report.valid);
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_report_serializes() {
        let mut report = Report::new();
        report.row_count = 1;
        report.record(
            2,
            vec![CheckError::field_scoped(
                "required-missing",
                "siteID",
                "Field siteID is required",
            )],
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["findings"][0]["line"], 2);
        assert_eq!(json["findings"][0]["errors"][0]["field"], "siteID");
    }
}

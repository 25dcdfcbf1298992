use crate::rules;
use crate::types::common::Severity;
use crate::types::error::ValidationReport;
use crate::types::manifest::Manifest;

/// Validate a loaded manifest.
/// Runs all rules and returns a consolidated report.
pub fn validate(manifest: &Manifest, file: &str) -> ValidationReport {
    let mut report = ValidationReport::success();

    rules::empty_names::check(manifest, file, &mut report);
    rules::unique_traces::check(manifest, file, &mut report);
    rules::name_length::check(manifest, file, &mut report);

    for entry in report.with_severity(Severity::Warning) {
        tracing::warn!(code = %entry.code, path = %entry.path, "{}", entry.message);
    }
    tracing::debug!(
        traces = manifest.len(),
        errors = report.count(Severity::Error),
        "validated manifest"
    );

    report
}

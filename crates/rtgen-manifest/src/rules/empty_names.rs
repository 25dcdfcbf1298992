use crate::types::error::{ErrorEntry, ValidationReport, E_EMPTY_NAME, W_EMPTY_TRACE_LIST};
use crate::types::manifest::Manifest;

/// Flag empty trace names and warn about an empty trace list.
pub fn check(manifest: &Manifest, file: &str, report: &mut ValidationReport) {
    if manifest.is_empty() {
        report.push(ErrorEntry::warning(
            W_EMPTY_TRACE_LIST,
            "Manifest lists no traces; generated enum will only hold sentinels",
            file,
            "$.traces",
        ));
    }

    for (i, name) in manifest.traces.iter().enumerate() {
        if name.is_empty() {
            report.push(ErrorEntry::error(
                E_EMPTY_NAME,
                "Trace name must not be empty",
                file,
                &format!("$.traces[{i}]"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::common::Severity;

    #[test]
    fn test_empty_list_is_only_a_warning() {
        let mut report = ValidationReport::success();
        check(&Manifest::default(), "m.json", &mut report);
        assert!(report.ok);
        assert_eq!(report.count(Severity::Warning), 1);
    }

    #[test]
    fn test_empty_name_is_error() {
        let mut report = ValidationReport::success();
        check(&Manifest::new(["foo", ""]), "m.json", &mut report);
        assert!(!report.ok);
        assert_eq!(report.errors[0].code, E_EMPTY_NAME);
        assert_eq!(report.errors[0].path, "$.traces[1]");
    }
}

use crate::types::error::{ErrorEntry, ValidationReport, E_NAME_TOO_LONG};
use crate::types::manifest::{Manifest, MAX_NAME_LEN};

/// Names are stored in a `char[MAX_NAME_LEN]`, which also holds the NUL
/// terminator.
pub fn check(manifest: &Manifest, file: &str, report: &mut ValidationReport) {
    let limit = MAX_NAME_LEN - 1;
    for (i, name) in manifest.traces.iter().enumerate() {
        if name.len() > limit {
            report.push(
                ErrorEntry::error(
                    E_NAME_TOO_LONG,
                    format!(
                        "Trace name '{name}' is {} bytes, the limit is {limit}",
                        name.len()
                    ),
                    file,
                    &format!("$.traces[{i}]"),
                )
                .with_suggestion("Shorten the trace name"),
            );
        }
    }
}

use std::collections::HashMap;

use crate::types::error::{ErrorEntry, ValidationReport, E_DUPLICATE_TRACE};
use crate::types::manifest::Manifest;

/// Every trace becomes an enum variant, so names must be unique.
pub fn check(manifest: &Manifest, file: &str, report: &mut ValidationReport) {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (i, name) in manifest.traces.iter().enumerate() {
        if let Some(first) = first_seen.get(name.as_str()) {
            report.push(
                ErrorEntry::error(
                    E_DUPLICATE_TRACE,
                    format!("Trace '{name}' is already listed at $.traces[{first}]"),
                    file,
                    &format!("$.traces[{i}]"),
                )
                .with_suggestion("Remove the repeated entry"),
            );
        } else {
            first_seen.insert(name, i);
        }
    }
}

/// Default manifest file name
pub const MANIFEST_FILE: &str = "restricted_traces.json";
/// Build fragment consumed by tests/BUILD.gn
pub const GNI_FILE: &str = "restricted_traces_autogen.gni";
/// Header with the trace enum, metadata table and dispatch functions
pub const HEADER_FILE: &str = "restricted_traces_autogen.h";
/// Name recorded in the generated-file banners
pub const SCRIPT_NAME: &str = "gen_restricted_traces";

/// File names for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub manifest_file: String,
    pub gni_file: String,
    pub header_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            manifest_file: MANIFEST_FILE.to_string(),
            gni_file: GNI_FILE.to_string(),
            header_file: HEADER_FILE.to_string(),
        }
    }
}

impl OutputConfig {
    /// Use a different manifest file name; outputs keep their fixed names.
    pub fn with_manifest(mut self, manifest_file: impl Into<String>) -> Self {
        self.manifest_file = manifest_file.into();
        self
    }

    pub fn inputs(&self) -> Vec<&str> {
        vec![self.manifest_file.as_str()]
    }

    pub fn outputs(&self) -> Vec<&str> {
        vec![self.gni_file.as_str(), self.header_file.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let config = OutputConfig::default();
        assert_eq!(config.inputs().join(","), "restricted_traces.json");
        assert_eq!(
            config.outputs().join(","),
            "restricted_traces_autogen.gni,restricted_traces_autogen.h"
        );
    }

    #[test]
    fn test_with_manifest_only_changes_input() {
        let config = OutputConfig::default().with_manifest("traces_subset.json");
        assert_eq!(config.inputs(), vec!["traces_subset.json"]);
        assert_eq!(config.outputs(), OutputConfig::default().outputs());
    }
}

use crate::config::{OutputConfig, SCRIPT_NAME};

/// Values substituted into every generated-file banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatContext {
    /// Tool that produced the file
    pub script_name: String,
    /// Manifest the file was generated from
    pub data_source_name: String,
}

impl FormatContext {
    pub fn new(script_name: impl Into<String>, data_source_name: impl Into<String>) -> Self {
        Self {
            script_name: script_name.into(),
            data_source_name: data_source_name.into(),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(SCRIPT_NAME, config.manifest_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_manifest_name() {
        let config = OutputConfig::default().with_manifest("other.json");
        let ctx = FormatContext::from_config(&config);
        assert_eq!(ctx.script_name, "gen_restricted_traces");
        assert_eq!(ctx.data_source_name, "other.json");
    }
}

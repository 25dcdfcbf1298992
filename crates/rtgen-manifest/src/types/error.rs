use serde::Serialize;

use super::common::Severity;

// ── Error code constants ──

pub const E_PARSE_ERROR: &str = "E_PARSE_ERROR";
pub const E_DUPLICATE_KEY: &str = "E_DUPLICATE_KEY";
pub const E_MISSING_FIELD: &str = "E_MISSING_FIELD";
pub const E_INVALID_TYPE: &str = "E_INVALID_TYPE";
pub const E_DUPLICATE_TRACE: &str = "E_DUPLICATE_TRACE";
pub const E_NAME_TOO_LONG: &str = "E_NAME_TOO_LONG";
pub const E_EMPTY_NAME: &str = "E_EMPTY_NAME";
pub const W_EMPTY_TRACE_LIST: &str = "W_EMPTY_TRACE_LIST";

/// One diagnostic about a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    pub code: String,
    pub severity: Severity,
    pub message: String,
    /// Manifest file name, as the build system knows it
    pub file: String,
    /// `$.traces[3]`, or `$.line:L:col:C` when the JSON itself is broken
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorEntry {
    fn new(severity: Severity, code: &str, message: String, file: &str, path: &str) -> Self {
        Self {
            code: code.to_string(),
            severity,
            message,
            file: file.to_string(),
            path: path.to_string(),
            suggestion: None,
        }
    }

    pub fn error(code: &str, message: impl Into<String>, file: &str, path: &str) -> Self {
        Self::new(Severity::Error, code, message.into(), file, path)
    }

    pub fn warning(code: &str, message: impl Into<String>, file: &str, path: &str) -> Self {
        Self::new(Severity::Warning, code, message.into(), file, path)
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Diagnostics gathered over one manifest, in the order the rules found them.
///
/// Serialized as `{ "ok": bool, "errors": [...] }` for `--json` output;
/// `ok` turns false as soon as an error-severity entry is pushed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub ok: bool,
    pub errors: Vec<ErrorEntry>,
}

impl ValidationReport {
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
        }
    }

    /// A failed report holding the one entry that stopped loading.
    pub fn single(entry: ErrorEntry) -> Self {
        let mut report = Self::success();
        report.push(entry);
        report
    }

    pub fn push(&mut self, entry: ErrorEntry) {
        self.ok &= entry.severity != Severity::Error;
        self.errors.push(entry);
    }

    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &ErrorEntry> {
        self.errors.iter().filter(move |e| e.severity == severity)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.with_severity(severity).count()
    }

    pub fn has_errors(&self) -> bool {
        !self.ok
    }
}

impl std::fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} ({}:{})",
            self.code, self.message, self.file, self.path
        )
    }
}

/// Errors that prevent a manifest from being loaded at all
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("manifest not found: {0}")]
    NotFound(String),

    #[error("I/O error reading {0}: {1}")]
    Io(String, std::io::Error),

    #[error("malformed manifest: {0}")]
    Parse(ErrorEntry),

    #[error("duplicate key in manifest: {0}")]
    DuplicateKey(ErrorEntry),

    #[error("missing required field: {0}")]
    MissingField(ErrorEntry),

    #[error("invalid field type: {0}")]
    InvalidType(ErrorEntry),
}

impl ManifestError {
    /// The structured entry behind this error, if it has one.
    pub fn entry(&self) -> Option<&ErrorEntry> {
        match self {
            ManifestError::Parse(e)
            | ManifestError::DuplicateKey(e)
            | ManifestError::MissingField(e)
            | ManifestError::InvalidType(e) => Some(e),
            ManifestError::NotFound(_) | ManifestError::Io(..) => None,
        }
    }
}

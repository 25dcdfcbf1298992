use std::path::Path;

use crate::parser;
use crate::types::error::ManifestError;
use crate::types::manifest::Manifest;

/// Read and parse a manifest file.
///
/// Errors carry the file name (not the full path) so diagnostics match the
/// name the build system knows the input by.
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let display = path.to_string_lossy().into_owned();
    if !path.is_file() {
        return Err(ManifestError::NotFound(display));
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ManifestError::Io(display.clone(), e))?;

    let file_label = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or(display);

    tracing::debug!(path = %path.display(), bytes = content.len(), "loading manifest");
    parser::parse_manifest(&content, &file_label)
}

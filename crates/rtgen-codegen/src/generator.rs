use std::path::Path;

use rtgen_manifest::Manifest;

use crate::config::OutputConfig;
use crate::context::FormatContext;
use crate::error::CodegenError;
use crate::gni::GniRenderer;
use crate::header::HeaderRenderer;
use crate::traits::Renderer;

/// Rendered files, in the order they are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
    files: Vec<(String, String)>,
}

/// Why an output on disk does not match what would be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    Missing,
    Differs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleFile {
    pub name: String,
    pub reason: StaleReason,
}

impl GeneratedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.files.push((name.into(), content.into()));
    }

    pub fn files(&self) -> &[(String, String)] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Write every file into `output_dir`, overwriting existing files.
    /// Stops at the first failure; files already written are left in place.
    pub fn write_to_disk(&self, output_dir: &Path) -> Result<(), CodegenError> {
        std::fs::create_dir_all(output_dir).map_err(|source| CodegenError::Write {
            path: output_dir.to_path_buf(),
            source,
        })?;

        for (name, content) in &self.files {
            let path = output_dir.join(name);
            std::fs::write(&path, content).map_err(|source| CodegenError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
        }
        Ok(())
    }

    /// Compare against the files in `output_dir` without writing anything.
    pub fn check_against_disk(&self, output_dir: &Path) -> Result<Vec<StaleFile>, CodegenError> {
        let mut stale = Vec::new();
        for (name, content) in &self.files {
            let path = output_dir.join(name);
            let reason = match std::fs::read_to_string(&path) {
                Ok(existing) if existing == *content => continue,
                Ok(_) => StaleReason::Differs,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => StaleReason::Missing,
                Err(source) => return Err(CodegenError::Read { path, source }),
            };
            stale.push(StaleFile {
                name: name.clone(),
                reason,
            });
        }
        Ok(stale)
    }
}

/// Renders every output for a manifest.
pub struct Generator {
    renderers: Vec<Box<dyn Renderer>>,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("outputs", &self.output_names())
            .finish()
    }
}

impl Generator {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            renderers: vec![
                Box::new(GniRenderer::new(config.gni_file.clone())),
                Box::new(HeaderRenderer::new(config.header_file.clone())),
            ],
        }
    }

    pub fn output_names(&self) -> Vec<&str> {
        self.renderers.iter().map(|r| r.file_name()).collect()
    }

    /// Render all outputs. Nothing touches the filesystem here.
    pub fn generate(&self, manifest: &Manifest, ctx: &FormatContext) -> GeneratedFiles {
        let mut output = GeneratedFiles::new();
        for renderer in &self.renderers {
            let content = renderer.render(manifest.traces(), ctx);
            tracing::debug!(file = renderer.file_name(), bytes = content.len(), "rendered");
            output.add_file(renderer.file_name(), content);
        }
        output
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(&OutputConfig::default())
    }
}

pub mod loader;
pub mod parser;
pub mod rules;
pub mod types;
pub mod validator;

// Re-exports
pub use loader::load_manifest;
pub use types::error::{ErrorEntry, ManifestError, ValidationReport};
pub use types::manifest::{Manifest, MAX_NAME_LEN};
pub use validator::validate;

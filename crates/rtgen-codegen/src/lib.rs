pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod generator;
pub mod gni;
pub mod header;
pub mod traits;

// Re-exports
pub use config::OutputConfig;
pub use context::FormatContext;
pub use error::CodegenError;
pub use generator::{GeneratedFiles, Generator, StaleFile, StaleReason};
pub use traits::Renderer;

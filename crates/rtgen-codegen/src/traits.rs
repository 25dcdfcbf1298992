use crate::context::FormatContext;

/// Produces one generated file from the ordered trace list.
///
/// Rendering is pure: the same traces and context always yield the same
/// text, and every per-trace list follows manifest order.
pub trait Renderer {
    /// Output file name, relative to the output directory.
    fn file_name(&self) -> &str;

    /// Render the complete file contents.
    fn render(&self, traces: &[String], ctx: &FormatContext) -> String;
}

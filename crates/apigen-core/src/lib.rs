pub mod codegen;
pub mod config;
pub mod decorate;
pub mod document;
pub mod error;
pub mod extensions;
pub mod grouping;
pub mod naming;
pub mod pipeline;
pub mod short_name;
pub mod types;

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for template engines that turn a decorated data context into text.
///
/// The core never renders anything itself; it only produces the context
/// (see [`pipeline::GenerationContext`]) that implementations consume.
pub trait TemplateRenderer {
    type Error: std::error::Error;
    fn render(
        &self,
        template_name: &str,
        context: &serde_json::Value,
    ) -> Result<String, Self::Error>;
}

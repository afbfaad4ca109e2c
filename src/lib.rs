//! Generate type declarations from sample JSON documents.
//!
//! The pipeline decodes JSON text, infers a tree of named records from the
//! decoded value, and renders those records in a target language:
//!
//! ```
//! let ts = json_classgen::generate_typescript(r#"{"id": 1, "tags": ["a"]}"#, "Item").unwrap();
//! assert_eq!(ts, "export interface Item {\n  id: number;\n  tags: string[];\n}\n");
//! ```

pub mod error;
pub mod infer;
pub mod naming;
pub mod render;

pub use error::{GenerateError, Result};
pub use infer::{InferredType, Schema, TypeInferrer};
pub use render::{
    CSharpOptions, CSharpRenderer, JavaRenderer, PythonRenderer, Renderer, TypeScriptRenderer,
};

use log::debug;
use serde_json::Value;

/// Root type name used when the caller does not pick one.
pub const DEFAULT_ROOT_NAME: &str = "Root";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
    #[value(name = "csharp", alias = "cs")]
    CSharp,
    Java,
    #[value(alias = "py")]
    Python,
}

impl Language {
    pub fn generate(self, json_text: &str, root_name: &str) -> Result<String> {
        match self {
            Language::TypeScript => generate_typescript(json_text, root_name),
            Language::CSharp => generate_csharp(json_text, root_name),
            Language::Java => generate_java(json_text, root_name),
            Language::Python => generate_python(json_text, root_name),
        }
    }
}

/// Decode `json_text` and infer its records, naming the top-level type `root_name`.
pub fn infer_schema(json_text: &str, root_name: &str) -> Result<Schema> {
    let value: Value = serde_json::from_str(json_text)?;
    Ok(TypeInferrer::new().infer(&value, root_name))
}

fn generate_with<R: Renderer>(renderer: &R, json_text: &str, root_name: &str) -> Result<String> {
    let schema = infer_schema(json_text, root_name)?;
    let output = renderer.render(&schema);
    debug!(
        "rendered {} record(s) into {} bytes",
        schema.records.len(),
        output.len()
    );
    Ok(output)
}

/// Generate TypeScript interfaces.
pub fn generate_typescript(json_text: &str, root_name: &str) -> Result<String> {
    generate_with(&TypeScriptRenderer::new(), json_text, root_name)
}

/// Generate C# classes without a namespace or serializer attributes.
pub fn generate_csharp(json_text: &str, root_name: &str) -> Result<String> {
    generate_csharp_with_options(json_text, root_name, &CSharpOptions::default())
}

pub fn generate_csharp_with_options(
    json_text: &str,
    root_name: &str,
    options: &CSharpOptions,
) -> Result<String> {
    generate_with(&CSharpRenderer::new(options.clone()), json_text, root_name)
}

/// Generate Java classes with getters and setters.
pub fn generate_java(json_text: &str, root_name: &str) -> Result<String> {
    generate_with(&JavaRenderer::new(), json_text, root_name)
}

/// Generate Python classes that read their fields from a `dict`.
pub fn generate_python(json_text: &str, root_name: &str) -> Result<String> {
    generate_with(&PythonRenderer::new(), json_text, root_name)
}

//! Per-language renderers turning an inferred [`Schema`] into source text.

mod csharp;
mod java;
mod python;
mod typescript;

pub use csharp::{CSharpOptions, CSharpRenderer};
pub use java::JavaRenderer;
pub use python::PythonRenderer;
pub use typescript::TypeScriptRenderer;

use crate::infer::{InferredType, Schema};

pub trait Renderer {
    /// Render every record of `schema`, deepest first and root last.
    fn render(&self, schema: &Schema) -> String;
}

/// Join rendered declarations with a blank line between each.
pub(crate) fn join_declarations(declarations: Vec<String>) -> String {
    declarations.join("\n")
}

pub(crate) fn uses_list(schema: &Schema) -> bool {
    schema
        .field_types()
        .any(|ty| matches!(ty, InferredType::List(_)))
}

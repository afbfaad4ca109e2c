use super::{Renderer, join_declarations};
use crate::infer::{InferredType, Primitive, Record, Schema};

/// Renders records as `export interface` declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptRenderer;

impl TypeScriptRenderer {
    pub fn new() -> Self {
        Self
    }

    fn type_ref(ty: &InferredType) -> String {
        match ty {
            InferredType::Primitive(p) => match p {
                Primitive::String => "string".to_string(),
                Primitive::Integer { .. } | Primitive::Float => "number".to_string(),
                Primitive::Boolean => "boolean".to_string(),
                Primitive::Any => "any".to_string(),
            },
            InferredType::List(inner) => format!("{}[]", Self::type_ref(inner)),
            InferredType::Record(name) => name.clone(),
        }
    }

    fn property_key(key: &str) -> String {
        let mut chars = key.chars();
        let valid = match chars.next() {
            Some(first) => {
                (first.is_alphabetic() || first == '_' || first == '$')
                    && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
            }
            None => false,
        };

        if valid {
            key.to_string()
        } else {
            format!("\"{}\"", key.replace('\\', "\\\\").replace('"', "\\\""))
        }
    }

    fn render_record(record: &Record) -> String {
        let mut output = format!("export interface {} {{\n", record.name);
        for field in &record.fields {
            output.push_str(&format!(
                "  {}: {};\n",
                Self::property_key(&field.name),
                Self::type_ref(&field.ty)
            ));
        }
        output.push_str("}\n");
        output
    }
}

impl Renderer for TypeScriptRenderer {
    fn render(&self, schema: &Schema) -> String {
        let declarations = schema.emission_order().map(Self::render_record).collect();
        join_declarations(declarations)
    }
}

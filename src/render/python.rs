use super::Renderer;
use crate::infer::{InferredType, Primitive, Record, Schema};
use std::collections::BTreeSet;

/// Renders records as plain Python classes built from a `dict`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonRenderer;

impl PythonRenderer {
    pub fn new() -> Self {
        Self
    }

    fn type_ref(ty: &InferredType) -> String {
        match ty {
            InferredType::Primitive(p) => match p {
                Primitive::String => "str".to_string(),
                Primitive::Integer { .. } | Primitive::Float => "float".to_string(),
                Primitive::Boolean => "bool".to_string(),
                Primitive::Any => "Any".to_string(),
            },
            InferredType::List(inner) => format!("List[{}]", Self::type_ref(inner)),
            InferredType::Record(name) => name.clone(),
        }
    }

    fn typing_imports(schema: &Schema) -> Vec<&'static str> {
        let mut names = BTreeSet::new();
        names.insert("Any");
        for ty in schema.field_types() {
            if let InferredType::List(_) = ty {
                names.insert("List");
            }
        }
        names.into_iter().collect()
    }

    fn render_record(record: &Record) -> String {
        let mut output = format!("class {}:\n", record.name);

        for field in &record.fields {
            output.push_str(&format!(
                "    {}: {}\n",
                field.name,
                Self::type_ref(&field.ty)
            ));
        }
        if !record.fields.is_empty() {
            output.push('\n');
        }

        output.push_str("    def __init__(self, data: dict):\n");
        if record.fields.is_empty() {
            output.push_str("        pass\n");
        }
        for field in &record.fields {
            let quoted = field.name.replace('\\', "\\\\").replace('\'', "\\'");
            output.push_str(&format!(
                "        self.{} = data.get('{}')\n",
                field.name, quoted
            ));
        }

        output
    }
}

impl Renderer for PythonRenderer {
    fn render(&self, schema: &Schema) -> String {
        if schema.is_empty() {
            return String::new();
        }

        // Postponed evaluation lets annotations name classes emitted further down.
        let mut output = format!(
            "from __future__ import annotations\n\nfrom typing import {}\n\n\n",
            Self::typing_imports(schema).join(", ")
        );

        // PEP 8 wants two blank lines between top-level classes.
        let classes: Vec<String> = schema.emission_order().map(Self::render_record).collect();
        output.push_str(&classes.join("\n\n"));
        output
    }
}

use super::{Renderer, uses_list};
use crate::infer::{InferredType, Primitive, Record, Schema};
use crate::naming::pascal_member;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CSharpOptions {
    /// Wrap every class in `namespace <name> { ... }` when set.
    pub namespace: Option<String>,
    /// Decorate properties with `[JsonPropertyName("key")]`.
    pub json_attributes: bool,
}

/// Renders records as C# classes with auto-properties.
#[derive(Debug, Clone, Default)]
pub struct CSharpRenderer {
    options: CSharpOptions,
}

impl CSharpRenderer {
    pub fn new(options: CSharpOptions) -> Self {
        Self { options }
    }

    fn type_ref(ty: &InferredType) -> String {
        match ty {
            InferredType::Primitive(p) => match p {
                Primitive::String => "string".to_string(),
                Primitive::Integer { wide: false } => "int".to_string(),
                Primitive::Integer { wide: true } => "long".to_string(),
                Primitive::Float => "double".to_string(),
                Primitive::Boolean => "bool".to_string(),
                Primitive::Any => "object".to_string(),
            },
            InferredType::List(inner) => format!("List<{}>", Self::type_ref(inner)),
            InferredType::Record(name) => name.clone(),
        }
    }

    /// Members may not share the name of their enclosing type (CS0542).
    fn property_name(key: &str, class_name: &str) -> String {
        let name = pascal_member(key);
        if name == class_name {
            format!("{}Value", name)
        } else {
            name
        }
    }

    fn render_record(&self, record: &Record, indent: &str) -> String {
        let mut output = format!("{indent}public class {}\n{indent}{{\n", record.name);

        for field in &record.fields {
            if self.options.json_attributes {
                output.push_str(&format!(
                    "{indent}    [JsonPropertyName(\"{}\")]\n",
                    field.name.replace('\\', "\\\\").replace('"', "\\\"")
                ));
            }
            output.push_str(&format!(
                "{indent}    public {} {} {{ get; set; }}\n",
                Self::type_ref(&field.ty),
                Self::property_name(&field.name, &record.name)
            ));
        }

        output.push_str(&format!("{indent}}}\n"));
        output
    }
}

impl Renderer for CSharpRenderer {
    fn render(&self, schema: &Schema) -> String {
        if schema.is_empty() {
            return String::new();
        }

        let mut output = String::new();

        let mut usings = Vec::new();
        if uses_list(schema) {
            usings.push("using System.Collections.Generic;");
        }
        if self.options.json_attributes {
            usings.push("using System.Text.Json.Serialization;");
        }
        if !usings.is_empty() {
            output.push_str(&usings.join("\n"));
            output.push_str("\n\n");
        }

        let indent = if self.options.namespace.is_some() {
            "    "
        } else {
            ""
        };

        let classes: Vec<String> = schema
            .emission_order()
            .map(|record| self.render_record(record, indent))
            .collect();

        match &self.options.namespace {
            Some(namespace) => {
                output.push_str(&format!("namespace {}\n{{\n", namespace));
                output.push_str(&classes.join("\n"));
                output.push_str("}\n");
            }
            None => output.push_str(&classes.join("\n")),
        }

        output
    }
}

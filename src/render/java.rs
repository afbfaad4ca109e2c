use super::{Renderer, join_declarations, uses_list};
use crate::infer::{InferredType, Primitive, Record, Schema};
use crate::naming::{camel_member, pascal_member};

const KEYWORDS: [&str; 53] = [
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
    "throw", "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// Renders records as Java classes with private fields and accessors.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaRenderer;

impl JavaRenderer {
    pub fn new() -> Self {
        Self
    }

    fn type_ref(ty: &InferredType) -> String {
        match ty {
            InferredType::Primitive(p) => match p {
                Primitive::String => "String".to_string(),
                Primitive::Integer { wide: false } => "int".to_string(),
                Primitive::Integer { wide: true } => "long".to_string(),
                Primitive::Float => "double".to_string(),
                Primitive::Boolean => "boolean".to_string(),
                Primitive::Any => "Object".to_string(),
            },
            InferredType::List(inner) => format!("List<{}>", Self::boxed_ref(inner)),
            InferredType::Record(name) => name.clone(),
        }
    }

    /// Generic arguments cannot be primitives.
    fn boxed_ref(ty: &InferredType) -> String {
        match ty {
            InferredType::Primitive(Primitive::Integer { wide: false }) => "Integer".to_string(),
            InferredType::Primitive(Primitive::Integer { wide: true }) => "Long".to_string(),
            InferredType::Primitive(Primitive::Float) => "Double".to_string(),
            InferredType::Primitive(Primitive::Boolean) => "Boolean".to_string(),
            other => Self::type_ref(other),
        }
    }

    /// Field and accessor suffix for `key`. Keywords get a `Value` suffix, which
    /// also keeps `getClass()` from hiding `Object.getClass()`.
    fn member_names(key: &str) -> (String, String) {
        let field = camel_member(key);
        let accessor = pascal_member(key);
        if KEYWORDS.contains(&field.as_str()) || accessor == "Class" {
            (format!("{}Value", field), format!("{}Value", accessor))
        } else {
            (field, accessor)
        }
    }

    fn render_record(record: &Record) -> String {
        let mut output = format!("public class {} {{\n", record.name);

        let members: Vec<(String, String, String)> = record
            .fields
            .iter()
            .map(|field| {
                let (field_name, accessor) = Self::member_names(&field.name);
                (Self::type_ref(&field.ty), field_name, accessor)
            })
            .collect();

        for (ty, field, _) in &members {
            output.push_str(&format!("    private {} {};\n", ty, field));
        }

        for (ty, field, accessor) in &members {
            output.push_str(&format!(
                "\n    public {ty} get{accessor}() {{\n        return {field};\n    }}\n"
            ));
            output.push_str(&format!(
                "\n    public void set{accessor}({ty} {field}) {{\n        this.{field} = {field};\n    }}\n"
            ));
        }

        output.push_str("}\n");
        output
    }
}

impl Renderer for JavaRenderer {
    fn render(&self, schema: &Schema) -> String {
        if schema.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        if uses_list(schema) {
            output.push_str("import java.util.List;\n\n");
        }

        let declarations = schema.emission_order().map(Self::render_record).collect();
        output.push_str(&join_declarations(declarations));
        output
    }
}

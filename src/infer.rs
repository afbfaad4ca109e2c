use crate::naming::{singularize, to_type_name};
use log::debug;
use serde::Serialize;
use serde_json::{Number, Value};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    String,
    /// Integral JSON number. `wide` is set when it does not fit in an i32.
    Integer { wide: bool },
    Float,
    Boolean,
    /// `null`, or the element of an empty array.
    Any,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "type", rename_all = "lowercase")]
pub enum InferredType {
    Primitive(Primitive),
    List(Box<InferredType>),
    /// Reference to a [`Record`] by its type name.
    Record(String),
}

impl InferredType {
    pub fn any() -> Self {
        InferredType::Primitive(Primitive::Any)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: InferredType,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub fields: Vec<Field>,
}

/// Result of one inference run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Schema {
    pub root: InferredType,
    /// Records in discovery order, parents before children.
    pub records: Vec<Record>,
}

impl Schema {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in emission order: deepest first, root last.
    pub fn emission_order(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().rev()
    }

    /// Every field type across all records, including nested list elements.
    pub fn field_types(&self) -> impl Iterator<Item = &InferredType> {
        self.records
            .iter()
            .flat_map(|record| record.fields.iter())
            .flat_map(|field| Walk { next: Some(&field.ty) })
    }
}

struct Walk<'a> {
    next: Option<&'a InferredType>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a InferredType;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if let InferredType::List(inner) = current {
            self.next = Some(inner);
        }
        Some(current)
    }
}

/// Walks a decoded JSON value and collects named records.
///
/// One inferrer is built per generation call, so the set of generated type
/// names never leaks between calls.
pub struct TypeInferrer {
    records: Vec<Record>,
    generated_types: HashSet<String>,
}

impl TypeInferrer {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            generated_types: HashSet::new(),
        }
    }

    pub fn infer(mut self, value: &Value, root_name: &str) -> Schema {
        let root = self.infer_root(value, root_name);
        debug!(
            "inferred {} record(s) for root {}",
            self.records.len(),
            root_name
        );
        Schema {
            root,
            records: self.records,
        }
    }

    /// Top-level arrays keep the caller's name for their element type.
    fn infer_root(&mut self, value: &Value, root_name: &str) -> InferredType {
        match value {
            Value::Array(items) => {
                let element = match items.first() {
                    Some(first) => self.infer_root(first, root_name),
                    None => InferredType::any(),
                };
                InferredType::List(Box::new(element))
            }
            other => self.infer_value(other, root_name),
        }
    }

    fn infer_value(&mut self, value: &Value, name: &str) -> InferredType {
        match value {
            Value::Null => InferredType::any(),
            Value::Bool(_) => InferredType::Primitive(Primitive::Boolean),
            Value::String(_) => InferredType::Primitive(Primitive::String),
            Value::Number(n) => InferredType::Primitive(Self::number_type(n)),
            Value::Array(items) => {
                let element = match items.first() {
                    Some(first) => self.infer_value(first, &singularize(name)),
                    None => InferredType::any(),
                };
                InferredType::List(Box::new(element))
            }
            Value::Object(map) => {
                let type_name = to_type_name(name);
                if !self.generated_types.insert(type_name.clone()) {
                    debug!("type {} already generated, reusing it", type_name);
                    return InferredType::Record(type_name);
                }

                // Reserve the slot first so parents precede their children.
                let index = self.records.len();
                self.records.push(Record {
                    name: type_name.clone(),
                    fields: Vec::with_capacity(map.len()),
                });
                debug!("registered type {}", type_name);

                let fields = map
                    .iter()
                    .map(|(key, field_value)| Field {
                        name: key.clone(),
                        ty: self.infer_value(field_value, key),
                    })
                    .collect();
                self.records[index].fields = fields;

                InferredType::Record(type_name)
            }
        }
    }

    fn number_type(n: &Number) -> Primitive {
        if let Some(i) = n.as_i64() {
            Primitive::Integer {
                wide: i32::try_from(i).is_err(),
            }
        } else if n.is_u64() {
            Primitive::Integer { wide: true }
        } else {
            Primitive::Float
        }
    }
}

impl Default for TypeInferrer {
    fn default() -> Self {
        Self::new()
    }
}

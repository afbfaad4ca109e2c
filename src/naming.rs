use convert_case::{Case, Casing};

/// Convert a JSON key into a type name.
///
/// The first character is upper-cased, and every underscore is dropped with
/// the character after it upper-cased. Everything else passes through, so
/// keys that are not legal identifiers stay that way.
pub fn to_type_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut capitalize = true;

    for c in key.chars() {
        if c == '_' {
            capitalize = true;
            continue;
        }
        if capitalize {
            out.extend(c.to_uppercase());
            capitalize = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// Words whose singular and plural forms are the same.
const INVARIANT_PLURALS: [&str; 5] = ["series", "species", "news", "data", "info"];

/// Derive the element name for an array stored under `key`.
pub fn singularize(key: &str) -> String {
    let lower = key.to_lowercase();
    if INVARIANT_PLURALS.iter().any(|word| lower.ends_with(word)) {
        return key.to_string();
    }
    if key.len() > 3 {
        if let Some(stem) = key.strip_suffix("ies") {
            return format!("{}y", stem);
        }
    }
    if let Some(stem) = key.strip_suffix("sses") {
        return format!("{}ss", stem);
    }
    if let Some(stem) = key.strip_suffix("uses") {
        return format!("{}us", stem);
    }
    // Latin-style singulars: status, census, analysis, axis.
    if key.ends_with("ss") || key.ends_with("us") || key.ends_with("is") {
        return key.to_string();
    }
    if key.len() > 1 {
        if let Some(stem) = key.strip_suffix('s') {
            return stem.to_string();
        }
    }
    key.to_string()
}

/// PascalCase member name, e.g. C# properties and Java accessor suffixes.
pub fn pascal_member(key: &str) -> String {
    let converted = key.to_case(Case::Pascal);
    if converted.is_empty() {
        key.to_string()
    } else {
        converted
    }
}

/// camelCase member name for Java fields.
pub fn camel_member(key: &str) -> String {
    let converted = key.to_case(Case::Camel);
    if converted.is_empty() {
        key.to_string()
    } else {
        converted
    }
}

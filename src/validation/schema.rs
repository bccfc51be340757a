use jsonschema::Validator;
use serde_json::{json, Value};

/// A compiled JSON Schema for one backend response.
///
/// Formats (`date-time`) are asserted, not just annotated.
#[derive(Debug)]
pub struct Schema {
    name: &'static str,
    definition: Value,
    validator: Result<Validator, String>,
}

impl Schema {
    pub fn new(name: &'static str, definition: Value) -> Self {
        let validator = jsonschema::options()
            .should_validate_formats(true)
            .build(&definition)
            .map_err(|e| {
                tracing::error!("Schema '{}' does not compile: {}", name, e);
                e.to_string()
            });

        Self { name, definition, validator }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn definition(&self) -> &Value {
        &self.definition
    }

    pub(crate) fn validator(&self) -> Result<&Validator, &str> {
        self.validator.as_ref().map_err(String::as_str)
    }
}

// Building blocks for the DTO schemas in `models`.

pub fn string() -> Value {
    json!({ "type": "string" })
}

pub fn boolean() -> Value {
    json!({ "type": "boolean" })
}

/// Any JSON number.
pub fn number() -> Value {
    json!({ "type": "number" })
}

/// An integer that fits the `u32` fields it is decoded into.
pub fn count() -> Value {
    json!({ "type": "integer", "minimum": 0, "maximum": u32::MAX })
}

/// A non-negative integer for `u64` fields.
pub fn unsigned() -> Value {
    json!({ "type": "integer", "minimum": 0, "maximum": u64::MAX })
}

/// An integer that fits `i64`.
pub fn integer() -> Value {
    json!({ "type": "integer", "minimum": i64::MIN, "maximum": i64::MAX })
}

/// A monetary amount: a JSON number, or a string holding a plain decimal.
pub fn decimal() -> Value {
    json!({ "type": ["number", "string"], "pattern": "^-?[0-9]+(\\.[0-9]+)?$" })
}

/// An RFC 3339 timestamp.
pub fn timestamp() -> Value {
    json!({ "type": "string", "format": "date-time" })
}

pub fn one_of(values: &[&str]) -> Value {
    json!({ "enum": values })
}

pub fn array(items: Value) -> Value {
    json!({ "type": "array", "items": items })
}

/// Object with `required` and `optional` properties. Other keys are allowed.
pub fn object(required: &[(&str, Value)], optional: &[(&str, Value)]) -> Value {
    let properties: serde_json::Map<String, Value> = required
        .iter()
        .chain(optional)
        .map(|(name, schema)| (name.to_string(), schema.clone()))
        .collect();
    let names: Vec<&str> = required.iter().map(|(name, _)| *name).collect();

    json!({ "type": "object", "properties": properties, "required": names })
}

/// Also accept `null`.
pub fn nullable(mut schema: Value) -> Value {
    if let Some(options) = schema.get_mut("enum").and_then(Value::as_array_mut) {
        options.push(Value::Null);
        return schema;
    }
    match schema.get_mut("type") {
        Some(Value::Array(types)) => types.push(json!("null")),
        Some(single) => *single = json!([single.take(), "null"]),
        None => return json!({ "anyOf": [{ "type": "null" }, schema] }),
    }
    schema
}

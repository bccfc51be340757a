//! Contract checks for backend responses.
//!
//! The backend owns every DTO; the JSON Schemas next to each model only guard
//! the assumptions the portal makes about them. A failure means the backend
//! contract moved, so callers surface it as a server error rather than a
//! client error.

pub mod issue;
pub mod schema;

use jsonschema::error::{TypeKind, ValidationErrorKind};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use issue::{IssueCode, PathSegment, ValidationError, ValidationIssue};
pub use schema::Schema;

/// Check `value` against `schema`, collecting every issue found.
///
/// Issues are ordered by path.
pub fn check(value: &Value, schema: &Schema) -> Result<(), ValidationError> {
    let validator = match schema.validator() {
        Ok(validator) => validator,
        Err(reason) => {
            return Err(ValidationError {
                issues: vec![ValidationIssue {
                    path: Vec::new(),
                    code: IssueCode::Custom,
                    expected: schema.name().to_string(),
                    received: type_name(value).to_string(),
                    message: format!("schema '{}' is unusable: {}", schema.name(), reason),
                }],
            })
        }
    };

    let mut issues: Vec<ValidationIssue> = validator
        .iter_errors(value)
        .map(|error| to_issue(value, error))
        .collect();

    if issues.is_empty() {
        return Ok(());
    }
    issues.sort_by(|a, b| a.path.cmp(&b.path));
    Err(ValidationError { issues })
}

/// Check `value` against `schema`, then convert it into the typed DTO.
pub fn parse<T: DeserializeOwned>(value: Value, schema: &Schema) -> Result<T, ValidationError> {
    check(&value, schema)?;
    serde_json::from_value(value).map_err(|e| ValidationError {
        issues: vec![ValidationIssue {
            path: Vec::new(),
            code: IssueCode::Custom,
            expected: schema.name().to_string(),
            received: "incompatible value".to_string(),
            message: e.to_string(),
        }],
    })
}

/// JSON type name used in issue reports.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn to_issue(root: &Value, error: jsonschema::ValidationError<'_>) -> ValidationIssue {
    let mut path = segments(root, &error.instance_path.to_string());
    let received = type_name(&error.instance).to_string();
    let message = error.to_string();

    let (code, expected, message) = match &error.kind {
        ValidationErrorKind::Type { kind } => {
            let expected = match kind {
                TypeKind::Single(single) => single.to_string(),
                TypeKind::Multiple(types) => (*types)
                    .into_iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(" | "),
            };
            let message = format!("expected {}, received {}", expected, received);
            (IssueCode::InvalidType, expected, message)
        }
        ValidationErrorKind::Enum { options } => (IssueCode::InvalidEnumValue, options.to_string(), message),
        ValidationErrorKind::Required { property } => {
            let name = property.as_str().map(str::to_string).unwrap_or_else(|| property.to_string());
            path.push(PathSegment::Key(name));
            return ValidationIssue {
                path,
                code: IssueCode::Required,
                expected: "present".to_string(),
                received: "undefined".to_string(),
                message: "required".to_string(),
            };
        }
        ValidationErrorKind::Format { format } => (IssueCode::InvalidFormat, format.clone(), message),
        ValidationErrorKind::Pattern { pattern } => (IssueCode::InvalidFormat, pattern.clone(), message),
        ValidationErrorKind::Minimum { limit } | ValidationErrorKind::ExclusiveMinimum { limit } => {
            (IssueCode::TooSmall, limit.to_string(), message)
        }
        ValidationErrorKind::Maximum { limit } | ValidationErrorKind::ExclusiveMaximum { limit } => {
            (IssueCode::TooBig, limit.to_string(), message)
        }
        _ => (IssueCode::Custom, error.schema_path.to_string(), message),
    };

    ValidationIssue { path, code, expected, received, message }
}

/// Turn a JSON pointer into path segments, using the document to tell array
/// indexes from object keys.
fn segments(root: &Value, pointer: &str) -> Vec<PathSegment> {
    let mut path = Vec::new();
    let mut current = Some(root);

    for raw in pointer.split('/').skip(1) {
        let token = raw.replace("~1", "/").replace("~0", "~");
        match (current, token.parse::<usize>()) {
            (Some(Value::Array(items)), Ok(index)) => {
                current = items.get(index);
                path.push(PathSegment::Index(index));
            }
            (parent, _) => {
                current = parent.and_then(|p| p.get(&token));
                path.push(PathSegment::Key(token));
            }
        }
    }
    path
}

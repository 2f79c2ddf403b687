use serde_json::Value;

/// Utility enum that covers all possible errors while handling DTOs
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field name that the DTO does not declare, in either spelling.
    #[error("No such field {field} on {dto}")]
    UnknownField { dto: &'static str, field: String },

    /// A value that could not be decoded into the field's declared type.
    #[error("Field {field}: value {value}({kind}) couldn't be cast to type {expected}")]
    TypeMismatch {
        field: &'static str,
        value: Value,
        kind: &'static str,
        expected: String,
    },

    /// A read of a field that was never set, or was cleared.
    #[error("Field {field} not set on {dto}")]
    FieldNotPresent { dto: &'static str, field: &'static str },

    /// Every failed assignment from a single `load_map` call.
    #[error("{}", join_errors(.errors))]
    LoadMap { errors: Vec<Error> },

    /// A string that names none of an enum's wire values.
    #[error("No {kind} named {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("A {target} cannot copy the values from a different type")]
    Absorb { target: &'static str },

    #[error("Invalid task id: {0}")]
    InvalidTaskId(String),

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Regex error: {source}")]
    RegexError {
        #[from]
        source: regex::Error,
    },
}

fn join_errors(errors: &[Error]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

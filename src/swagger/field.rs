use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::error::Error;

/// Whether `name` refers to the field serialized as `wire`: either the wire
/// name itself or its exported form with the first letter capitalized.
pub fn matches(name: &str, wire: &str) -> bool {
    if name == wire {
        return true;
    }

    let mut given = name.chars();
    let mut declared = wire.chars();
    match (given.next(), declared.next()) {
        (Some(g), Some(d)) => {
            g.is_ascii_uppercase() && g.to_ascii_lowercase() == d && given.eq(declared)
        }
        _ => false,
    }
}

/// Behaviour shared by every type a DTO field can hold.
pub trait FieldValue: Sized {
    /// Overlays a freshly decoded value. Records merge field by field;
    /// everything else is replaced.
    fn merge_value(&mut self, other: Self) {
        *self = other;
    }

    /// False if an enum value anywhere inside is outside the declared set.
    fn is_recognized(&self) -> bool {
        true
    }

    /// True only for a record with no fields present.
    fn is_empty_record(&self) -> bool {
        false
    }
}

impl FieldValue for String {}
impl FieldValue for bool {}
impl FieldValue for i32 {}
impl FieldValue for i64 {}
impl FieldValue for f64 {}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn is_recognized(&self) -> bool {
        self.iter().all(FieldValue::is_recognized)
    }
}

impl<T: FieldValue> FieldValue for HashMap<String, T> {
    fn is_recognized(&self) -> bool {
        self.values().all(FieldValue::is_recognized)
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    fn merge_value(&mut self, other: Self) {
        (**self).merge_value(*other)
    }

    fn is_recognized(&self) -> bool {
        (**self).is_recognized()
    }

    fn is_empty_record(&self) -> bool {
        (**self).is_empty_record()
    }
}

/// Decodes `value` as the field's declared type, `expected` being that type
/// as written in the declaration.
///
/// Stricter than decoding a payload: enum values must be declared ones, and
/// a non-empty object must set at least one field of a record.
pub fn cast<T: DeserializeOwned + FieldValue>(
    field: &'static str,
    expected: &'static str,
    value: Value,
) -> Result<T, Error> {
    match T::deserialize(&value) {
        Ok(cast) if accepts(&value, &cast) => Ok(cast),
        _ => Err(Error::TypeMismatch {
            field,
            kind: kind(&value),
            expected: expected.replace(' ', ""),
            value,
        }),
    }
}

fn accepts<T: FieldValue>(value: &Value, cast: &T) -> bool {
    let has_keys = value.as_object().map_or(false, |map| !map.is_empty());
    cast.is_recognized() && !(has_keys && cast.is_empty_record())
}

pub fn to_value<T: Serialize>(value: &T) -> Result<Value, Error> {
    Ok(serde_json::to_value(value)?)
}

pub fn unknown(dto: &'static str, field: &str) -> Error {
    Error::UnknownField {
        dto,
        field: field.to_string(),
    }
}

/// Short name of a JSON value's runtime type.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::{cast, kind, matches};
    use crate::models::container::DockerNetworkType;
    use crate::models::task::SingularityTaskId;
    use crate::utils::error::Error;

    #[test]
    fn matches_wire_and_exported_names() {
        assert!(matches("deployId", "deployId"));
        assert!(matches("DeployId", "deployId"));
        assert!(matches("Id", "id"));

        assert!(!matches("deployid", "deployId"));
        assert!(!matches("deploy_id", "deployId"));
        assert!(!matches("DEPLOYID", "deployId"));
        assert!(!matches("", "deployId"));
        assert!(!matches("Deploy", "deployId"));
    }

    #[test]
    fn kinds_of_values() {
        assert_eq!(kind(&json!(null)), "null");
        assert_eq!(kind(&json!(true)), "bool");
        assert_eq!(kind(&json!(7)), "integer");
        assert_eq!(kind(&json!(-7)), "integer");
        assert_eq!(kind(&json!(0.5)), "float");
        assert_eq!(kind(&json!("x")), "string");
        assert_eq!(kind(&json!([1])), "array");
        assert_eq!(kind(&json!({"a": 1})), "object");
    }

    #[test]
    fn cast_decodes_declared_type() {
        let cpus: f64 = cast("cpus", "f64", json!(2)).unwrap();
        assert_eq!(cpus, 2.0);

        let env: HashMap<String, String> =
            cast("env", "HashMap<String, String>", json!({"PORT": "8080"})).unwrap();
        assert_eq!(env.get("PORT").map(String::as_str), Some("8080"));
    }

    #[test]
    fn cast_reports_mismatch() {
        let err = cast::<HashMap<String, String>>(
            "env",
            "HashMap < String, String >",
            json!({"PORT": 8080}),
        )
        .unwrap_err();

        match err {
            Error::TypeMismatch {
                field,
                kind,
                expected,
                ..
            } => {
                assert_eq!(field, "env");
                assert_eq!(kind, "object");
                assert_eq!(expected, "HashMap<String,String>");
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn cast_rejects_undeclared_enum_values() {
        let network: DockerNetworkType =
            cast("network", "DockerNetworkType", json!("BRIDGE")).unwrap();
        assert_eq!(network, DockerNetworkType::Bridge);

        let overlay = cast::<DockerNetworkType>("network", "DockerNetworkType", json!("OVERLAY"));
        assert!(overlay.is_err());
        assert!(cast::<Vec<DockerNetworkType>>(
            "networks",
            "Vec<DockerNetworkType>",
            json!(["HOST", "OVERLAY"])
        )
        .is_err());
    }

    #[test]
    fn cast_rejects_objects_that_set_no_field() {
        let err = cast::<SingularityTaskId>("taskId", "SingularityTaskId", json!({"bogus": 1}))
            .unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { kind: "object", .. }));

        let empty: SingularityTaskId = cast("taskId", "SingularityTaskId", json!({})).unwrap();
        assert_eq!(empty, SingularityTaskId::default());

        let task_id: SingularityTaskId = cast(
            "taskId",
            "SingularityTaskId",
            json!({"bogus": 1, "host": "node-1"}),
        )
        .unwrap();
        assert_eq!(task_id.host.as_deref(), Some("node-1"));
    }
}

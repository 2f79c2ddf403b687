use log::warn;
use serde::Serialize;
use serde_json::Value;

use super::Fielder;

/// Pretty-printed JSON with two-space indentation.
pub fn format_json<T: Serialize + ?Sized>(dto: &T) -> String {
    match serde_json::to_string_pretty(dto) {
        Ok(json) => json,
        Err(err) => {
            warn!("could not format DTO as JSON: {}", err);
            String::from("<unformattable>")
        }
    }
}

/// `Name{field:value field:value}` over the present fields.
pub fn format_fields<F: Fielder + ?Sized>(dto: &F) -> String {
    let fields = dto
        .fields_present()
        .into_iter()
        .filter_map(|name| {
            dto.get_field(name)
                .ok()
                .map(|value| format!("{}:{}", name, text_value(&value)))
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("{}{{{}}}", dto.dto_name(), fields)
}

fn text_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

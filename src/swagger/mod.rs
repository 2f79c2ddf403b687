//! Generic support for the generated DTOs: name-based field access, JSON
//! population and the text/JSON debug formats.
//!
//! JSON interfaces often treat the absence of a field very differently from
//! its presence, whatever the value. `{ "name": "webapp" }` is not the same
//! payload as `{ "name": "webapp", "owners": [] }`. Every DTO field is an
//! `Option`, and `None` is the only way a field is absent.

#[macro_use]
mod macros;

pub mod field;
pub mod format;
pub mod list;
pub mod populate;

use std::any::Any;
use std::io::Read;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::utils::error::Error;

/// Runtime access to a record's fields by wire name (`requestId`) or
/// exported name (`RequestId`).
pub trait Fielder {
    /// Type name used in error messages and the text format.
    fn dto_name(&self) -> &'static str;

    /// Wire names of the fields currently present, in declaration order.
    fn fields_present(&self) -> Vec<&'static str>;

    fn get_field(&self, name: &str) -> Result<Value, Error>;

    /// Decodes `value` into the field's declared type and marks the field
    /// present. A value of the wrong type leaves the field untouched.
    fn set_field(&mut self, name: &str, value: Value) -> Result<(), Error>;

    fn clear_field(&mut self, name: &str) -> Result<(), Error>;

    /// Applies every entry through `set_field`. Failed entries do not stop
    /// the rest from loading; they are reported together afterwards.
    fn load_map(&mut self, from: Map<String, Value>) -> Result<(), Error> {
        let mut errors = Vec::new();
        for (name, value) in from {
            if let Err(err) = self.set_field(&name, value) {
                errors.push(err);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::LoadMap { errors })
        }
    }
}

/// Overlays the present parts of `other` onto `self`, the way decoding JSON
/// into an existing record does.
pub trait Merge {
    fn merge_from(&mut self, other: Self);
}

/// The one-line text form used when printing lists.
pub trait FormatText {
    fn format_text(&self) -> String;
}

impl FormatText for String {
    fn format_text(&self) -> String {
        self.clone()
    }
}

/// A data transfer object: something that can be read from a JSON stream and
/// written back out.
pub trait Dto: FormatText + Merge + Serialize + DeserializeOwned + Clone + 'static {
    /// Reads `reader` to the end and overlays the decoded payload. Empty input
    /// leaves `self` unchanged.
    fn populate<R: Read>(&mut self, reader: R) -> Result<(), Error> {
        populate::read_populate(reader, self)
    }

    /// Copies every value from `other` if it has the same type.
    fn absorb(&mut self, other: &dyn Any) -> Result<(), Error> {
        match other.downcast_ref::<Self>() {
            Some(like) => {
                *self = like.clone();
                Ok(())
            }
            None => Err(Error::Absorb {
                target: std::any::type_name::<Self>(),
            }),
        }
    }

    /// Compact JSON holding exactly the present fields.
    fn marshal_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    fn format_json(&self) -> String {
        format::format_json(self)
    }
}

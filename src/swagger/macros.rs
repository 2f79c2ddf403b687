/// Declares a DTO: a struct of optional fields keyed by wire name, its list
/// alias, and the `Fielder`, `Merge`, `FormatText` and `Dto` impls.
///
/// ```ignore
/// dto! {
///     pub struct SingularityDockerParameter {
///         key: String = "key",
///         value: String = "value",
///     }
///     list SingularityDockerParameterList;
/// }
/// ```
macro_rules! dto {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $ty:ty = $wire:literal
            ),* $(,)?
        }
        list $list:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Debug,
            Default,
            PartialEq,
            serde::Serialize,
            serde::Deserialize,
            schemars::JsonSchema,
        )]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(rename = $wire, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        #[doc = concat!("A list of [`", stringify!($name), "`] records.")]
        pub type $list = $crate::swagger::list::DtoList<$name>;

        impl $name {
            /// Wire names of every field, in declaration order.
            pub const FIELDS: &'static [&'static str] = &[$($wire),*];
        }

        impl $crate::swagger::Fielder for $name {
            fn dto_name(&self) -> &'static str {
                stringify!($name)
            }

            fn fields_present(&self) -> Vec<&'static str> {
                let mut present = Vec::new();
                $(
                    if self.$field.is_some() {
                        present.push($wire);
                    }
                )*
                present
            }

            fn get_field(
                &self,
                name: &str,
            ) -> Result<serde_json::Value, $crate::utils::error::Error> {
                $(
                    if $crate::swagger::field::matches(name, $wire) {
                        return match &self.$field {
                            Some(value) => $crate::swagger::field::to_value(value),
                            None => Err($crate::utils::error::Error::FieldNotPresent {
                                dto: stringify!($name),
                                field: $wire,
                            }),
                        };
                    }
                )*
                Err($crate::swagger::field::unknown(stringify!($name), name))
            }

            fn set_field(
                &mut self,
                name: &str,
                value: serde_json::Value,
            ) -> Result<(), $crate::utils::error::Error> {
                $(
                    if $crate::swagger::field::matches(name, $wire) {
                        let cast = $crate::swagger::field::cast::<$ty>(
                            $wire,
                            stringify!($ty),
                            value,
                        )?;
                        log::trace!("{}: set {}", stringify!($name), $wire);
                        self.$field = Some(cast);
                        return Ok(());
                    }
                )*
                Err($crate::swagger::field::unknown(stringify!($name), name))
            }

            fn clear_field(&mut self, name: &str) -> Result<(), $crate::utils::error::Error> {
                $(
                    if $crate::swagger::field::matches(name, $wire) {
                        self.$field = None;
                        return Ok(());
                    }
                )*
                Err($crate::swagger::field::unknown(stringify!($name), name))
            }
        }

        impl $crate::swagger::Merge for $name {
            fn merge_from(&mut self, other: Self) {
                $(
                    if let Some(value) = other.$field {
                        match self.$field.as_mut() {
                            Some(current) => {
                                $crate::swagger::field::FieldValue::merge_value(current, value)
                            }
                            None => self.$field = Some(value),
                        }
                    }
                )*
            }
        }

        impl $crate::swagger::field::FieldValue for $name {
            fn merge_value(&mut self, other: Self) {
                $crate::swagger::Merge::merge_from(self, other)
            }

            fn is_recognized(&self) -> bool {
                true $(
                    && self
                        .$field
                        .as_ref()
                        .map_or(true, $crate::swagger::field::FieldValue::is_recognized)
                )*
            }

            fn is_empty_record(&self) -> bool {
                true $(&& self.$field.is_none())*
            }
        }

        impl $crate::swagger::FormatText for $name {
            fn format_text(&self) -> String {
                $crate::swagger::format::format_fields(self)
            }
        }

        impl $crate::swagger::Dto for $name {}
    };
}

/// Declares a string enum whose variants serialize to the given wire values.
///
/// Decoding never fails on an unlisted string: it lands in `Other` and is
/// written back unchanged. `FromStr` and `set_field` only take declared
/// values.
macro_rules! dto_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// A value sent by the server that this client does not know.
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)*
                    $name::Other(value) => value.as_str(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::utils::error::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)*
                    _ => Err($crate::utils::error::Error::UnknownVariant {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                match value.parse::<$name>() {
                    Ok(known) => Ok(known),
                    Err(_) => {
                        log::debug!("{}: keeping undeclared value {}", stringify!($name), value);
                        Ok($name::Other(value))
                    }
                }
            }
        }

        impl schemars::JsonSchema for $name {
            fn schema_name() -> String {
                stringify!($name).to_string()
            }

            fn json_schema(_: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
                schemars::schema::SchemaObject {
                    instance_type: Some(schemars::schema::InstanceType::String.into()),
                    enum_values: Some(vec![$(serde_json::Value::from($wire)),*]),
                    ..Default::default()
                }
                .into()
            }
        }

        impl $crate::swagger::field::FieldValue for $name {
            fn is_recognized(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }
    };
}

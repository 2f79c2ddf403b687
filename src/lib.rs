//! Data transfer objects for the Singularity scheduler's REST API.
//!
//! Every record keeps track of which of its fields are present, so a payload
//! that leaves a field out is never confused with one that sends its zero
//! value. Fields can be read and written statically through the `Option`
//! members, or by name at runtime through [`swagger::Fielder`].

#[macro_use]
pub mod swagger;

pub mod models;
pub mod utils;

pub use swagger::list::{DtoList, StringList};
pub use swagger::{Dto, Fielder, FormatText, Merge};
pub use utils::error::Error;

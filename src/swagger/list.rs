use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{Dto, FormatText, Merge};

/// A JSON array of records, e.g. the body of a list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct DtoList<T>(pub Vec<T>);

/// A list of plain strings.
pub type StringList = DtoList<String>;

impl<T> DtoList<T> {
    pub fn new() -> Self {
        DtoList(Vec::new())
    }

    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for DtoList<T> {
    fn default() -> Self {
        DtoList::new()
    }
}

impl<T> Deref for DtoList<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        &self.0
    }
}

impl<T> DerefMut for DtoList<T> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for DtoList<T> {
    fn from(items: Vec<T>) -> Self {
        DtoList(items)
    }
}

impl<T> FromIterator<T> for DtoList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        DtoList(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for DtoList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DtoList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A decoded list replaces the old one outright.
impl<T> Merge for DtoList<T> {
    fn merge_from(&mut self, other: Self) {
        *self = other;
    }
}

impl<T: FormatText> FormatText for DtoList<T> {
    fn format_text(&self) -> String {
        self.0
            .iter()
            .map(FormatText::format_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<T> Dto for DtoList<T> where T: FormatText + Serialize + DeserializeOwned + Clone + 'static {}

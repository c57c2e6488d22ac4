//! Placemark projection
//!
//! A [`Listing`] is the flat record the converter emits for each placemark:
//! name, address, description and the `ExtendedData` entries. Styles and
//! geometry are dropped.

use crate::schema::{DataEntry, Document, Placemark};
use serde::Serialize;

/// Projected view of one placemark, borrowing from the decoded [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Listing<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub description: &'a str,
    /// Serialized as an array of `{"Name", "Value"}` objects, `[]` when empty
    pub extended_data: &'a [DataEntry],
}

impl<'a> From<&'a Placemark> for Listing<'a> {
    fn from(placemark: &'a Placemark) -> Self {
        Self {
            name: &placemark.name,
            address: &placemark.address,
            description: &placemark.description,
            extended_data: &placemark.extended_data,
        }
    }
}

impl<'a> Listing<'a> {
    /// Value of the first `ExtendedData` entry with the given name
    #[inline]
    #[must_use]
    pub fn data_value(&self, name: &str) -> Option<&'a str> {
        self.extended_data
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.as_str())
    }
}

/// Project every placemark of a document into a [`Listing`], in document order
#[must_use]
pub fn project(document: &Document) -> Vec<Listing<'_>> {
    let listings: Vec<Listing<'_>> = document.placemarks.iter().map(Listing::from).collect();
    log::debug!("Projected {} listings", listings.len());
    listings
}

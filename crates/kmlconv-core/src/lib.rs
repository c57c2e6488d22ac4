//! # kmlconv-core
//!
//! KML placemark extraction for kmlconv.
//!
//! This crate decodes a KML document into a small typed schema and
//! re-encodes its placemarks as JSON or CSV. The pipeline is linear:
//!
//! 1. [`decode`] / [`load_document`]: XML bytes → [`Document`]
//! 2. [`project`]: [`Document`] → [`Listing`] records
//! 3. [`write_json`] / [`write_csv`]: listings (or the whole document) → output
//!
//! ## Quick Start
//!
//! ### Placemarks as JSON
//!
//! ```no_run
//! use kmlconv_core::{load_document, project, write_json, DecodeOptions, JsonStyle};
//!
//! let document = load_document("landmarks.kml", &DecodeOptions::default())?;
//! let listings = project(&document);
//! write_json(std::io::stdout().lock(), listings.as_slice(), JsonStyle::Compact)?;
//! # Ok::<(), kmlconv_core::KmlError>(())
//! ```
//!
//! ### Placemarks as CSV
//!
//! ```no_run
//! use kmlconv_core::{load_document, project, write_csv_file, CsvOptions, DecodeOptions};
//!
//! let document = load_document("landmarks.kml", &DecodeOptions::default())?;
//! write_csv_file("landmarks.csv", &project(&document), &CsvOptions::default())?;
//! # Ok::<(), kmlconv_core::KmlError>(())
//! ```
//!
//! ## Schema
//!
//! ### `Document`
//!
//! | Field | Type | Description |
//! |-------|------|-------------|
//! | `xmlns` | `String` | Namespace URI of the `<kml>` root |
//! | `name` | `String` | Document name |
//! | `styles` | `Vec<Style>` | Style definitions |
//! | `style_map` | `Option<StyleMap>` | Style state mapping |
//! | `placemarks` | `Vec<Placemark>` | Placemarks |
//!
//! ### `Listing`
//!
//! | Field | JSON key | Description |
//! |-------|----------|-------------|
//! | `name` | `Name` | Placemark name |
//! | `address` | `Address` | Placemark address |
//! | `description` | `Description` | Placemark description |
//! | `extended_data` | `ExtendedData` | `[{"Name", "Value"}]`, `[]` when absent |
//!
//! Missing elements decode to empty strings, never errors. Coordinates and
//! geometry are not decoded.
//!
//! ## Error Handling
//!
//! ```no_run
//! use kmlconv_core::{load_document, DecodeOptions, KmlError};
//!
//! match load_document("places.kml", &DecodeOptions::default()) {
//!     Ok(doc) => println!("Parsed {} placemarks", doc.placemarks.len()),
//!     Err(KmlError::PathNotFound(path)) => println!("{} doesn't exist", path.display()),
//!     Err(KmlError::MalformedInput(e)) => println!("Parse error: {}", e),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod listing;
pub mod paths;
pub mod schema;

pub use decode::{decode, decode_str, load_document, DecodeOptions};
pub use encode::{write_csv, write_csv_file, write_json, CsvOptions, JsonStyle, CSV_HEADER};
pub use error::{KmlError, Result};
pub use listing::{project, Listing};
pub use schema::{
    DataEntry, Document, HotSpot, Icon, IconStyle, LabelStyle, Placemark, Style, StyleMap,
    StylePair,
};

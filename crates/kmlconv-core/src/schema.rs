//! KML document schema
//!
//! Named record types for the subset of KML the converter understands. Each
//! node keeps its own direct character content in a `text` field; that field
//! is never serialized, since inter-element whitespace carries no meaning in
//! the JSON output.
//!
//! JSON keys follow KML's element naming (`Name`, `StyleUrl` spelled
//! `StyleURL`, `ID` for the `id` attribute).

use serde::Serialize;

/// Root `<kml>` element flattened with its single `<Document>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Document {
    /// Namespace URI of the `<kml>` root (usually `http://www.opengis.net/kml/2.2`)
    pub xmlns: String,
    /// `<Document><name>`
    pub name: String,
    /// `<Style>` definitions, in document order
    #[serde(rename = "Style")]
    pub styles: Vec<Style>,
    /// `<StyleMap>`, if present
    pub style_map: Option<StyleMap>,
    /// `<Placemark>` entries, in document order
    #[serde(rename = "Placemark")]
    pub placemarks: Vec<Placemark>,
    #[serde(skip)]
    pub text: String,
}

/// A `<Style id="...">` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Style {
    #[serde(rename = "ID")]
    pub id: String,
    pub icon_style: IconStyle,
    pub label_style: LabelStyle,
    #[serde(skip)]
    pub text: String,
}

/// `<IconStyle>`: icon colour, scale, image and anchor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IconStyle {
    pub color: String,
    pub scale: String,
    pub icon: Icon,
    pub hot_spot: HotSpot,
    #[serde(skip)]
    pub text: String,
}

/// `<Icon><href>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Icon {
    pub href: String,
    #[serde(skip)]
    pub text: String,
}

/// `<hotSpot x=".." xunits=".." y=".." yunits=".."/>`
///
/// All four values are attributes; the element has no content of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HotSpot {
    pub x: String,
    pub xunits: String,
    pub y: String,
    pub yunits: String,
    #[serde(skip)]
    pub text: String,
}

/// `<LabelStyle><scale>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LabelStyle {
    pub scale: String,
    #[serde(skip)]
    pub text: String,
}

/// A `<StyleMap id="...">` with its `<Pair>` entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StyleMap {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Pair")]
    pub pairs: Vec<StylePair>,
    #[serde(skip)]
    pub text: String,
}

/// One `<Pair>` mapping a style state key (`normal`, `highlight`) to a style URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StylePair {
    pub key: String,
    #[serde(rename = "StyleURL")]
    pub style_url: String,
    #[serde(skip)]
    pub text: String,
}

/// A `<Placemark>` entry
///
/// Geometry is not modeled; only the free-text fields, the style reference
/// and `ExtendedData` survive decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Placemark {
    pub name: String,
    pub address: String,
    /// Description (may contain HTML as literal text)
    pub description: String,
    /// Style reference, kept verbatim (not resolved against `Document::styles`)
    #[serde(rename = "StyleURL")]
    pub style_url: String,
    /// `<ExtendedData><Data>` entries, in document order
    pub extended_data: Vec<DataEntry>,
    #[serde(skip)]
    pub text: String,
}

/// `<Data name="..."><value>...</value></Data>`
///
/// Names are not unique within a placemark; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataEntry {
    pub name: String,
    pub value: String,
    #[serde(skip)]
    pub text: String,
}

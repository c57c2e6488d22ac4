//! KML decoding
//!
//! Maps an XML byte buffer onto the [`Document`] schema using a `roxmltree`
//! tree walk.
//!
//! Decoding contract:
//! - The buffer must be well-formed UTF-8 XML whose root element is `kml`.
//!   Anything else is [`KmlError::MalformedInput`] carrying the parser's
//!   diagnostic (line and column included).
//! - Elements are matched by local name, case-sensitively. Elements outside
//!   the schema (geometry, `Folder`, `LookAt`, vendor extensions, ...) are
//!   skipped without error so newer KML producers keep working.
//! - A repeated singular element (`Document`, `StyleMap`, `ExtendedData`,
//!   `IconStyle`, ...) merges into one value: its list children (`Style`,
//!   `Pair`, `Placemark`, `Data`) accumulate across every occurrence in
//!   document order, while text fields and attributes take the last
//!   occurrence that provides them.
//! - Text fields hold the element's own character data: entities decoded,
//!   CDATA included, whitespace untouched. Text inside nested elements is
//!   not part of the parent's value.

use crate::error::{KmlError, Result};
use crate::schema::{
    DataEntry, Document, HotSpot, Icon, IconStyle, LabelStyle, Placemark, Style, StyleMap,
    StylePair,
};
use crate::paths::ensure_source_file;
use roxmltree::Node;
use std::fs;
use std::path::Path;

/// Options controlling how the raw buffer is prepared before parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
    /// Remove every `\n` from the buffer before parsing.
    ///
    /// `roxmltree` handles whitespace-only text between elements, so this is
    /// off by default. Turning it on also removes line breaks inside
    /// descriptions and other text fields.
    pub strip_newlines: bool,
}

/// Decode a KML buffer into a [`Document`]
///
/// # Errors
///
/// Returns [`KmlError::MalformedInput`] if the buffer is not valid UTF-8, is
/// not well-formed XML, or its root element is not `<kml>`.
pub fn decode(bytes: &[u8], options: &DecodeOptions) -> Result<Document> {
    let xml = std::str::from_utf8(bytes)
        .map_err(|e| KmlError::MalformedInput(format!("invalid UTF-8: {e}")))?;

    if options.strip_newlines {
        let flattened = xml.replace('\n', "");
        decode_str(&flattened)
    } else {
        decode_str(xml)
    }
}

/// Decode KML text with default options
///
/// # Errors
///
/// Returns [`KmlError::MalformedInput`] if the text is not well-formed XML or
/// its root element is not `<kml>`.
pub fn decode_str(xml: &str) -> Result<Document> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);

    let parse_options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let tree = roxmltree::Document::parse_with_options(xml, parse_options)?;

    let root = tree.root_element();
    if root.tag_name().name() != "kml" {
        return Err(KmlError::MalformedInput(format!(
            "expected element <kml> but found <{}>",
            root.tag_name().name()
        )));
    }

    let documents: Vec<Node> = elements(root, "Document").collect();
    let mut document = if documents.is_empty() {
        log::warn!("KML has no <Document> element, producing an empty document");
        Document::default()
    } else {
        for node in &documents {
            warn_on_nested_placemarks(*node);
        }
        read_document(&documents)
    };
    document.xmlns = root.tag_name().namespace().unwrap_or_default().to_string();

    log::debug!(
        "Decoded KML document {:?}: {} styles, {} placemarks",
        document.name,
        document.styles.len(),
        document.placemarks.len()
    );

    Ok(document)
}

/// Read and decode a KML file
///
/// The whole file is read into memory before decoding.
///
/// # Errors
///
/// Returns [`KmlError::PathNotFound`] or [`KmlError::PathIsDirectory`] if
/// `path` is not a readable file, [`KmlError::Io`] if reading fails, and
/// [`KmlError::MalformedInput`] if decoding fails.
#[must_use = "this function returns the decoded KML document"]
pub fn load_document<P: AsRef<Path>>(path: P, options: &DecodeOptions) -> Result<Document> {
    let path = path.as_ref();
    ensure_source_file(path)?;

    let bytes = fs::read(path)?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    decode(&bytes, options)
}

fn read_document(documents: &[Node]) -> Document {
    let style_maps = occurrences(documents, "StyleMap");
    Document {
        xmlns: String::new(),
        name: child_text(documents, "name"),
        styles: occurrences(documents, "Style")
            .into_iter()
            .map(|style| read_style(&[style]))
            .collect(),
        style_map: (!style_maps.is_empty()).then(|| read_style_map(&style_maps)),
        placemarks: occurrences(documents, "Placemark")
            .into_iter()
            .map(|placemark| read_placemark(&[placemark]))
            .collect(),
        text: chardata(documents),
    }
}

fn read_style(styles: &[Node]) -> Style {
    let label_styles = occurrences(styles, "LabelStyle");
    Style {
        id: attribute(styles, "id"),
        icon_style: read_icon_style(&occurrences(styles, "IconStyle")),
        label_style: LabelStyle {
            scale: child_text(&label_styles, "scale"),
            text: chardata(&label_styles),
        },
        text: chardata(styles),
    }
}

fn read_icon_style(icon_styles: &[Node]) -> IconStyle {
    let icons = occurrences(icon_styles, "Icon");
    let hot_spots = occurrences(icon_styles, "hotSpot");
    IconStyle {
        color: child_text(icon_styles, "color"),
        scale: child_text(icon_styles, "scale"),
        icon: Icon {
            href: child_text(&icons, "href"),
            text: chardata(&icons),
        },
        hot_spot: HotSpot {
            x: attribute(&hot_spots, "x"),
            xunits: attribute(&hot_spots, "xunits"),
            y: attribute(&hot_spots, "y"),
            yunits: attribute(&hot_spots, "yunits"),
            text: chardata(&hot_spots),
        },
        text: chardata(icon_styles),
    }
}

fn read_style_map(style_maps: &[Node]) -> StyleMap {
    StyleMap {
        id: attribute(style_maps, "id"),
        pairs: occurrences(style_maps, "Pair")
            .into_iter()
            .map(|pair| StylePair {
                key: child_text(&[pair], "key"),
                style_url: child_text(&[pair], "styleUrl"),
                text: chardata(&[pair]),
            })
            .collect(),
        text: chardata(style_maps),
    }
}

fn read_placemark(placemarks: &[Node]) -> Placemark {
    let extended_data = occurrences(placemarks, "ExtendedData");
    Placemark {
        name: child_text(placemarks, "name"),
        address: child_text(placemarks, "address"),
        description: child_text(placemarks, "description"),
        style_url: child_text(placemarks, "styleUrl"),
        extended_data: occurrences(&extended_data, "Data")
            .into_iter()
            .map(|entry| DataEntry {
                name: attribute(&[entry], "name"),
                value: child_text(&[entry], "value"),
                text: chardata(&[entry]),
            })
            .collect(),
        text: chardata(placemarks),
    }
}

/// Placemarks inside `<Folder>` are outside the schema; say so instead of
/// dropping them silently.
fn warn_on_nested_placemarks(document: Node) {
    let nested = document
        .descendants()
        .filter(|n| is_element(*n, "Placemark") && n.parent() != Some(document))
        .count();
    if nested > 0 {
        log::warn!("Ignoring {nested} placemark(s) nested below <Document> (e.g. in <Folder>)");
    }
}

#[inline]
fn is_element(node: Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

/// Direct child elements with the given local name
fn elements<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |n| is_element(*n, name))
}

/// Child elements named `name` across every occurrence of a repeated
/// parent, in document order
fn occurrences<'a, 'input>(
    parents: &[Node<'a, 'input>],
    name: &'static str,
) -> Vec<Node<'a, 'input>> {
    parents
        .iter()
        .flat_map(|parent| elements(*parent, name))
        .collect()
}

/// Direct text of the last occurrence
fn chardata(nodes: &[Node]) -> String {
    nodes
        .last()
        .map(|node| {
            node.children()
                .filter(|n| n.is_text())
                .filter_map(|n| n.text())
                .collect::<String>()
        })
        .unwrap_or_default()
}

fn child_text(parents: &[Node], name: &'static str) -> String {
    chardata(&occurrences(parents, name))
}

/// Value from the last occurrence that carries the attribute
fn attribute(nodes: &[Node], name: &str) -> String {
    nodes
        .iter()
        .rev()
        .find_map(|node| node.attribute(name))
        .unwrap_or_default()
        .to_string()
}

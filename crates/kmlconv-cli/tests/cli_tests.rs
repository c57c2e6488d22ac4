//! Integration tests for the kmlconv binary
//!
//! Runs the real executable against KML files written to temp directories.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a CLI command
fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_kmlconv"))
}

const CIVIC_KML: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>Civic Buildings</name>
    <Style id="icon-normal">
      <IconStyle>
        <color>ffd18802</color>
        <scale>1</scale>
        <Icon>
          <href>images/icon-1.png</href>
        </Icon>
        <hotSpot x="32" xunits="pixels" y="64" yunits="insetPixels"/>
      </IconStyle>
      <LabelStyle>
        <scale>0</scale>
      </LabelStyle>
    </Style>
    <StyleMap id="icon">
      <Pair>
        <key>normal</key>
        <styleUrl>#icon-normal</styleUrl>
      </Pair>
    </StyleMap>
    <Placemark>
      <name>City Hall</name>
      <address>1 Main St</address>
      <description>Open 9-5</description>
      <styleUrl>#icon</styleUrl>
      <ExtendedData>
        <Data name="Registry Number">
          <value>R-100</value>
        </Data>
      </ExtendedData>
      <Point>
        <coordinates>-122.08,37.42,0</coordinates>
      </Point>
    </Placemark>
    <Placemark>
      <name>Annex</name>
      <address>2 Main St</address>
      <description>Building A, Suite 2</description>
    </Placemark>
  </Document>
</kml>
"##;

/// Write a KML file into the temp dir and return its path
fn write_kml(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============ USAGE ============

#[test]
fn test_no_arguments_prints_usage() {
    cli()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_question_mark_prints_usage() {
    cli()
        .arg("-?")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--kml"));
}

#[test]
fn test_missing_kml_flag() {
    let dir = TempDir::new().unwrap();
    cli()
        .arg("-csv")
        .arg(dir.path().join("out.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no KML file given"))
        .stderr(predicate::str::contains("Usage"));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_unknown_flag() {
    cli()
        .arg("-kml")
        .arg("places.kml")
        .arg("-bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_flag() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert KML placemarks to JSON or CSV"));
}

#[test]
fn test_unknown_flag_message_on_stderr() {
    cli()
        .arg("-kml")
        .arg("places.kml")
        .arg("-bogus")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_repeated_kml_flag_uses_last() {
    let dir = TempDir::new().unwrap();
    let kml = write_kml(&dir, "civic.kml", CIVIC_KML);
    cli()
        .current_dir(dir.path())
        .arg("-kml")
        .arg("missing.xml")
        .arg("-kml")
        .arg(&kml)
        .assert()
        .success()
        .stdout(predicate::str::contains("City Hall"));
}

#[test]
fn test_arguments_after_positional_are_ignored() {
    let dir = TempDir::new().unwrap();
    let kml = write_kml(&dir, "civic.kml", CIVIC_KML);
    let csv = dir.path().join("civic.csv");
    cli()
        .arg("-kml")
        .arg(&kml)
        .arg("stray")
        .arg("-csv")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("City Hall"))
        .stderr(predicate::str::contains("Ignoring 3 argument(s)"));
    assert!(!csv.exists());
}

// ============ FATAL PATHS ============

#[test]
fn test_missing_kml_file() {
    let dir = TempDir::new().unwrap();
    cli()
        .current_dir(dir.path())
        .arg("-kml")
        .arg("missing.xml")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("doesn't exist"));
}

#[test]
fn test_kml_path_is_directory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("somedir")).unwrap();
    cli()
        .current_dir(dir.path())
        .arg("-kml")
        .arg("./somedir")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is a directory"));
}

#[test]
fn test_unclosed_tag() {
    let dir = TempDir::new().unwrap();
    let kml = write_kml(
        &dir,
        "broken.kml",
        "<kml><Document><Placemark><name>x</name></Document></kml>",
    );
    cli()
        .arg("-kml")
        .arg(&kml)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("malformed KML"));
}

#[test]
fn test_csv_path_is_directory() {
    let dir = TempDir::new().unwrap();
    let kml = write_kml(&dir, "civic.kml", CIVIC_KML);
    cli()
        .arg("-kml")
        .arg(&kml)
        .arg("-csv")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is a directory"));
}

// ============ JSON OUTPUT ============

#[test]
fn test_single_placemark_json() {
    let dir = TempDir::new().unwrap();
    let kml = write_kml(
        &dir,
        "city.kml",
        "<kml><Document><Placemark><name>City Hall</name><address>1 Main St</address>\
         <description>Open 9-5</description></Placemark></Document></kml>",
    );
    cli()
        .arg("-kml")
        .arg(&kml)
        .assert()
        .success()
        .stdout(
            "[{\"Name\":\"City Hall\",\"Address\":\"1 Main St\",\"Description\":\"Open 9-5\",\"ExtendedData\":[]}]\n",
        );
}

#[test]
fn test_listings_json_order_and_extended_data() {
    let dir = TempDir::new().unwrap();
    let kml = write_kml(&dir, "civic.kml", CIVIC_KML);

    let output = cli().arg("--kml").arg(&kml).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let listings = value.as_array().unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0]["Name"], "City Hall");
    assert_eq!(listings[0]["ExtendedData"][0]["Name"], "Registry Number");
    assert_eq!(listings[0]["ExtendedData"][0]["Value"], "R-100");
    assert_eq!(listings[1]["Description"], "Building A, Suite 2");
    // Styles and geometry are not part of listings
    assert!(listings[0].get("StyleURL").is_none());
}

#[test]
fn test_empty_document_json() {
    let dir = TempDir::new().unwrap();
    let kml = write_kml(&dir, "empty.kml", "<kml><Document><name>Empty</name></Document></kml>");
    cli().arg("-kml").arg(&kml).assert().success().stdout("[]\n");
}

#[test]
fn test_full_document_json() {
    let dir = TempDir::new().unwrap();
    let kml = write_kml(&dir, "civic.kml", CIVIC_KML);

    let output = cli()
        .arg(format!("-kml={}", kml.display()))
        .arg("-full")
        .arg("-pretty")
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.lines().count() > 1);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["Xmlns"], "http://www.opengis.net/kml/2.2");
    assert_eq!(value["Name"], "Civic Buildings");
    assert_eq!(value["Style"][0]["ID"], "icon-normal");
    assert_eq!(value["Style"][0]["IconStyle"]["HotSpot"]["Xunits"], "pixels");
    assert_eq!(value["StyleMap"]["Pair"][0]["StyleURL"], "#icon-normal");
    assert_eq!(value["Placemark"][0]["StyleURL"], "#icon");
}

// ============ CSV OUTPUT ============

#[test]
fn test_csv_output() {
    let dir = TempDir::new().unwrap();
    let kml = write_kml(&dir, "civic.kml", CIVIC_KML);
    let csv = dir.path().join("civic.csv");

    cli()
        .arg("-kml")
        .arg(&kml)
        .arg("-csv")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&csv).unwrap(),
        "Name,Address,Description\n\
         City Hall,1 Main St,Open 9-5\n\
         Annex,2 Main St,\"Building A, Suite 2\"\n"
    );
}

#[test]
fn test_csv_header_only() {
    let dir = TempDir::new().unwrap();
    let kml = write_kml(&dir, "empty.kml", "<kml><Document/></kml>");
    let csv = dir.path().join("empty.csv");

    cli().arg("-kml").arg(&kml).arg("-csv").arg(&csv).assert().success();

    assert_eq!(
        fs::read_to_string(&csv).unwrap(),
        "Name,Address,Description\n"
    );
}

#[test]
fn test_csv_extra_column() {
    let dir = TempDir::new().unwrap();
    let kml = write_kml(&dir, "civic.kml", CIVIC_KML);
    let csv = dir.path().join("civic.csv");

    cli()
        .arg("-kml")
        .arg(&kml)
        .arg("-csv")
        .arg(&csv)
        .arg("-extra-column")
        .arg("Registry Number")
        .assert()
        .success();

    let content = fs::read_to_string(&csv).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Name,Address,Description,Registry Number");
    assert_eq!(lines[1], "City Hall,1 Main St,Open 9-5,R-100");
    assert_eq!(lines[2], "Annex,2 Main St,\"Building A, Suite 2\",");
}

#[test]
fn test_strip_newlines() {
    let dir = TempDir::new().unwrap();
    let kml = write_kml(
        &dir,
        "multiline.kml",
        "<kml>\n<Document>\n<Placemark>\n<name>Pier</name>\n<description>line one\nline two</description>\n\
         </Placemark>\n</Document>\n</kml>\n",
    );

    let output = cli().arg("-kml").arg(&kml).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["Description"], "line one\nline two");

    let output = cli()
        .arg("-kml")
        .arg(&kml)
        .arg("-strip-newlines")
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["Description"], "line oneline two");
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    let kml = write_kml(&dir, "civic.kml", CIVIC_KML);

    cli()
        .arg("-kml")
        .arg(&kml)
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[{"))
        .stderr(predicate::str::contains("Loaded 2 placemark(s)"));
}

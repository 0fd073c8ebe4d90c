use crate::DocumentBackend;
use crate::input::load_content;
use crate::schema::{OdsGenerator, content_to_ods};
use serde_json::json;
use std::io::Read;
use tempfile::tempdir;
use zip::ZipArchive;

fn read_entry(archive: &mut ZipArchive<std::fs::File>, name: &str) -> String {
    let mut text = String::new();
    archive
        .by_name(name)
        .expect("entry present")
        .read_to_string(&mut text)
        .expect("utf-8 entry");
    text
}

#[test]
fn test_saved_package_layout() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("out.ods");

    let content = json!({
        "styles": [{
            "name": "money",
            "definition": r#"<style:style style:family="table-cell"><style:paragraph-properties fo:text-align="end"/></style:style>"#,
        }],
        "body": [{
            "name": "Prices",
            "width": ["4cm"],
            "table": [
                {"row": ["Item", "Price"], "style": ["bold"]},
                ["Apple", {"value": 1.25, "style": "money", "text": "1,25"}],
            ],
        }],
    });
    content_to_ods(&content, &path).expect("write spreadsheet");

    let mut archive = ZipArchive::new(std::fs::File::open(&path).expect("open output")).expect("zip");
    {
        let first = archive.by_index(0).expect("first entry");
        assert_eq!(first.name(), "mimetype");
        assert_eq!(first.compression(), zip::CompressionMethod::Stored);
    }
    assert_eq!(
        read_entry(&mut archive, "mimetype"),
        "application/vnd.oasis.opendocument.spreadsheet"
    );

    let manifest = read_entry(&mut archive, "META-INF/manifest.xml");
    assert!(manifest.contains("content.xml"));

    let content_xml = read_entry(&mut archive, "content.xml");
    assert!(content_xml.contains(r#"<table:table table:name="Prices">"#));
    assert!(content_xml.contains(r#"style:name="co1""#));
    assert!(content_xml.contains(r#"style:name="bold""#));
    assert!(content_xml.contains(r#"style:name="money""#));
    assert!(!content_xml.contains(r#"style:name="center""#));
    assert!(content_xml.contains("<text:p>1,25</text:p>"));
    assert!(content_xml.contains(r#"office:value="1.25""#));

    let styles_xml = read_entry(&mut archive, "styles.xml");
    assert!(styles_xml.contains(r#"style:name="Default""#));
}

#[test]
fn test_yaml_file_round_trip_to_document() {
    let dir = tempdir().expect("create temp dir");
    let input = dir.path().join("sheet.yaml");
    std::fs::write(
        &input,
        "defaults:\n  style_str: center\nbody:\n  - table:\n      - [a, b]\n",
    )
    .expect("write input");

    let content = load_content(&input).expect("load yaml");
    let generator = OdsGenerator::new(&content).expect("generate");
    let row = &generator.backend().tables()[0].rows[0];
    assert!(row.cells.iter().all(|c| c.style.as_deref() == Some("center")));

    let output = dir.path().join("sheet.ods");
    generator.backend().save(&output).expect("save");
    assert!(output.exists());
}

//! OpenDocument Spreadsheet output document.
//!
//! [`OdsDocument`] is the `.ods` implementation of [`DocumentBackend`]: it
//! collects registered styles and finished tables, then writes them as an ODF
//! package.

use crate::backend::{BackendVersion, DocumentBackend};
use crate::common::{Result, xml::escape_xml};
use crate::odf::core::{OFFICE_NAMESPACES, PackageWriter, meta_xml, styles_xml};
use crate::odf::elements::{StyleFamily, StyleMarkup};
use crate::odf::ods::{Cell, CellValue, Column, Table};
use std::path::Path;

const MIMETYPE: &str = "application/vnd.oasis.opendocument.spreadsheet";

/// A style registered into the document.
#[derive(Debug, Clone)]
struct RegisteredStyle {
    name: String,
    markup: StyleMarkup,
    xml: String,
    /// Named by the document rather than the caller
    generated: bool,
}

/// Spreadsheet document under construction.
///
/// # Examples
///
/// ```no_run
/// use odsgen::odf::OdsDocument;
/// use odsgen::odf::ods::Table;
/// use odsgen::DocumentBackend;
///
/// # fn main() -> odsgen::Result<()> {
/// let mut doc = OdsDocument::new();
/// doc.append_table(Table::new("Sheet1"))?;
/// doc.save(std::path::Path::new("output.ods"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct OdsDocument {
    automatic_styles: Vec<RegisteredStyle>,
    common_styles: Vec<RegisteredStyle>,
    tables: Vec<Table>,
    generated: usize,
}

impl OdsDocument {
    /// Capability version reported to the generator (ODF 1.3 output).
    pub const VERSION: BackendVersion = (1, 3, 0);

    /// Create an empty spreadsheet document
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables appended so far, in order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Names of the automatic styles, in registration order.
    pub fn automatic_style_names(&self) -> Vec<&str> {
        self.automatic_styles.iter().map(|s| s.name.as_str()).collect()
    }

    /// Serialized markup of a registered style.
    pub fn style_xml(&self, name: &str) -> Option<&str> {
        self.automatic_styles
            .iter()
            .chain(self.common_styles.iter())
            .find(|s| s.name == name)
            .map(|s| s.xml.as_str())
    }

    fn has_style(&self, name: &str) -> bool {
        self.style_xml(name).is_some()
    }

    fn fresh_name(&mut self, family: StyleFamily) -> String {
        let prefix = match family {
            StyleFamily::TableColumn => "co",
            StyleFamily::TableRow => "ro",
            StyleFamily::TableCell => "ce",
            StyleFamily::DataStyle => "N",
            _ => "st",
        };
        loop {
            self.generated += 1;
            let name = format!("{}{}", prefix, self.generated);
            if !self.has_style(&name) {
                return name;
            }
        }
    }

    /// Move the generated style called `name` out of the way of a caller style.
    ///
    /// The generated style gets a fresh name and the columns of appended
    /// tables follow it.
    fn relocate_generated(&mut self, name: &str) -> Result<()> {
        let Some(index) = self
            .automatic_styles
            .iter()
            .position(|s| s.generated && s.name == name)
        else {
            return Ok(());
        };

        let family = self.automatic_styles[index].markup.family();
        let fresh = self.fresh_name(family);
        let style = &mut self.automatic_styles[index];
        style.xml = style.markup.render(Some(&fresh))?;
        style.name = fresh.clone();
        log::debug!("generated style '{}' renamed to '{}'", name, fresh);

        for table in &mut self.tables {
            table.rename_column_style(name, &fresh);
        }
        Ok(())
    }

    fn push_style_attr(out: &mut String, style: Option<&str>) {
        if let Some(style) = style {
            out.push_str(&format!(r#" table:style-name="{}""#, escape_xml(style)));
        }
    }

    fn push_table_columns(out: &mut String, columns: &[Column]) {
        if columns.is_empty() {
            out.push_str("<table:table-column/>");
            return;
        }

        // Collapse runs of identically styled columns
        let mut start = 0;
        while start < columns.len() {
            let style = columns[start].style.as_deref();
            let run = columns[start..]
                .iter()
                .take_while(|c| c.style.as_deref() == style)
                .count();

            out.push_str("<table:table-column");
            Self::push_style_attr(out, style);
            if run > 1 {
                out.push_str(&format!(r#" table:number-columns-repeated="{}""#, run));
            }
            out.push_str("/>");
            start += run;
        }
    }

    fn push_cell(out: &mut String, cell: &Cell) {
        if cell.is_empty() {
            out.push_str("<table:table-cell");
            Self::push_style_attr(out, cell.style.as_deref());
            out.push_str("/>");
            return;
        }

        out.push_str("<table:table-cell");
        Self::push_style_attr(out, cell.style.as_deref());
        match &cell.value {
            CellValue::Text(_) => out.push_str(r#" office:value-type="string""#),
            CellValue::Integer(i) => {
                out.push_str(&format!(r#" office:value-type="float" office:value="{}""#, i))
            },
            CellValue::Float(f) => {
                out.push_str(&format!(r#" office:value-type="float" office:value="{}""#, f))
            },
            CellValue::Boolean(b) => out.push_str(&format!(
                r#" office:value-type="boolean" office:boolean-value="{}""#,
                b
            )),
            CellValue::Empty => {},
        }
        out.push_str(&format!(
            "><text:p>{}</text:p></table:table-cell>",
            escape_xml(&cell.text())
        ));
    }

    /// Generate the content.xml body for the spreadsheet
    fn generate_content_body(&self) -> String {
        let cell_count: usize = self
            .tables
            .iter()
            .flat_map(|t| t.rows.iter())
            .map(|r| r.cells.len())
            .sum();
        let mut body = String::with_capacity(256 + self.tables.len() * 96 + cell_count * 96);

        for table in &self.tables {
            body.push_str(&format!(
                r#"<table:table table:name="{}">"#,
                escape_xml(&table.name)
            ));
            Self::push_table_columns(&mut body, &table.columns());

            for row in &table.rows {
                body.push_str("<table:table-row");
                Self::push_style_attr(&mut body, row.style.as_deref());
                body.push('>');
                for cell in &row.cells {
                    Self::push_cell(&mut body, cell);
                }
                // Rows must hold at least one cell
                if row.cells.is_empty() {
                    body.push_str("<table:table-cell/>");
                }
                body.push_str("</table:table-row>");
            }

            body.push_str("</table:table>");
        }

        body
    }

    /// Generate the complete content.xml for the spreadsheet
    fn generate_content_xml(&self) -> String {
        let body = self.generate_content_body();
        let styles: String = self.automatic_styles.iter().map(|s| s.xml.as_str()).collect();

        let mut out = String::with_capacity(body.len() + styles.len() + 1024);
        out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?><office:document-content "#);
        out.push_str(OFFICE_NAMESPACES);
        out.push_str(r#" office:version="1.3"><office:font-face-decls/><office:automatic-styles>"#);
        out.push_str(&styles);
        out.push_str("</office:automatic-styles><office:body><office:spreadsheet>");
        out.push_str(&body);
        out.push_str("</office:spreadsheet></office:body></office:document-content>");
        out
    }

    /// Build the spreadsheet and return it as bytes
    pub fn build(&self) -> Result<Vec<u8>> {
        let mut writer = PackageWriter::new(MIMETYPE)?;

        let content_xml = self.generate_content_xml();
        writer.add_file("content.xml", content_xml.as_bytes())?;

        let common: String = self.common_styles.iter().map(|s| s.xml.as_str()).collect();
        writer.add_file("styles.xml", styles_xml(&common).as_bytes())?;

        let meta = meta_xml(concat!("odsgen/", env!("CARGO_PKG_VERSION")));
        writer.add_file("meta.xml", meta.as_bytes())?;

        writer.finish()
    }
}

impl DocumentBackend for OdsDocument {
    fn insert_style(
        &mut self,
        markup: &StyleMarkup,
        name: Option<&str>,
        automatic: bool,
    ) -> Result<String> {
        let generated = name.is_none();
        let name = match name {
            Some(name) => {
                self.relocate_generated(name)?;
                name.to_string()
            },
            None => self.fresh_name(markup.family()),
        };
        let xml = markup.render(Some(&name))?;

        let styles = if automatic {
            &mut self.automatic_styles
        } else {
            &mut self.common_styles
        };
        match styles.iter_mut().find(|s| s.name == name) {
            Some(existing) => {
                log::debug!("replacing style '{}' already present in the document", name);
                existing.markup = markup.clone();
                existing.xml = xml;
            },
            None => styles.push(RegisteredStyle {
                name: name.clone(),
                markup: markup.clone(),
                xml,
                generated,
            }),
        }

        Ok(name)
    }

    fn append_table(&mut self, table: Table) -> Result<()> {
        self.tables.push(table);
        Ok(())
    }

    fn save(&self, path: &Path) -> Result<()> {
        let bytes = self.build()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn version(&self) -> BackendVersion {
        Self::VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odf::ods::Row;

    fn cell_markup() -> StyleMarkup {
        StyleMarkup::parse(r#"<style:style style:family="table-cell"/>"#).unwrap()
    }

    #[test]
    fn test_generated_names_are_fresh() {
        let mut doc = OdsDocument::new();
        let width = StyleMarkup::column_width("2cm").unwrap();
        let first = doc.insert_style(&width, None, true).unwrap();
        let second = doc.insert_style(&width, None, true).unwrap();
        assert_eq!(first, "co1");
        assert_eq!(second, "co2");
        assert_eq!(doc.automatic_style_names(), vec!["co1", "co2"]);
    }

    #[test]
    fn test_named_style_replaced_not_duplicated() {
        let mut doc = OdsDocument::new();
        doc.insert_style(&cell_markup(), Some("bold"), true).unwrap();
        doc.insert_style(&cell_markup(), Some("bold"), true).unwrap();
        assert_eq!(doc.automatic_style_names(), vec!["bold"]);
    }

    #[test]
    fn test_named_style_does_not_take_over_generated_column_style() {
        let mut doc = OdsDocument::new();
        let width = StyleMarkup::column_width("5cm").unwrap();
        let generated = doc.insert_style(&width, None, true).unwrap();
        assert_eq!(generated, "co1");

        let mut table = Table::new("first");
        table.set_column(
            0,
            Column {
                style: Some(generated),
            },
        );
        doc.append_table(table).unwrap();

        let named = doc.insert_style(&cell_markup(), Some("co1"), true).unwrap();
        assert_eq!(named, "co1");
        assert!(doc.style_xml("co1").unwrap().contains(r#"style:family="table-cell""#));

        let moved = doc.tables()[0].get_column(0).style.unwrap();
        assert_ne!(moved, "co1");
        let moved_xml = doc.style_xml(&moved).unwrap();
        assert!(moved_xml.contains(&format!(r#"style:name="{}""#, moved)));
        assert!(moved_xml.contains(r#"style:column-width="5cm""#));
    }

    #[test]
    fn test_common_styles_kept_apart() {
        let mut doc = OdsDocument::new();
        doc.insert_style(&cell_markup(), Some("shared"), false).unwrap();
        assert!(doc.automatic_style_names().is_empty());
        assert!(doc.style_xml("shared").is_some());
    }

    #[test]
    fn test_content_xml_layout() {
        let mut doc = OdsDocument::new();
        doc.insert_style(&cell_markup(), Some("left"), true).unwrap();

        let mut table = Table::new("A & B");
        let mut row = Row::new(Some("default_table_row".to_string()));
        let mut cell = Cell::new(CellValue::Text("x<y".to_string()));
        cell.style = Some("left".to_string());
        row.append(cell);
        row.append(Cell::new(CellValue::Integer(7)));
        row.append(Cell::new(CellValue::Empty));
        table.append(row);
        table.set_column(
            0,
            Column {
                style: Some("co1".to_string()),
            },
        );
        doc.append_table(table).unwrap();

        let xml = doc.generate_content_xml();
        assert!(xml.contains(r#"<office:automatic-styles><style:style style:name="left" style:family="table-cell"/></office:automatic-styles>"#));
        assert!(xml.contains(r#"<table:table table:name="A &amp; B">"#));
        assert!(xml.contains(r#"<table:table-column table:style-name="co1"/><table:table-column table:number-columns-repeated="2"/>"#));
        assert!(xml.contains(r#"<table:table-row table:style-name="default_table_row">"#));
        assert!(xml.contains(r#"<table:table-cell table:style-name="left" office:value-type="string"><text:p>x&lt;y</text:p></table:table-cell>"#));
        assert!(xml.contains(r#"<table:table-cell office:value-type="float" office:value="7"><text:p>7</text:p></table:table-cell>"#));
        assert!(xml.contains("<table:table-cell/></table:table-row>"));
    }

    #[test]
    fn test_build_produces_zip() {
        let doc = OdsDocument::new();
        let bytes = doc.build().unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}

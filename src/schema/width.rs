//! Column width styling.

use super::node::{Options, WIDTH};
use crate::backend::DocumentBackend;
use crate::common::Result;
use crate::odf::elements::StyleMarkup;
use crate::odf::ods::Table;
use serde_json::Value;

/// Apply the `width` option of a table to its columns.
///
/// A single width styles every existing column. A list is aligned by column
/// position; empty or missing entries leave their column untouched. Each
/// applied width registers its own generated column style.
pub fn apply_widths<B: DocumentBackend + ?Sized>(
    table: &mut Table,
    opt: &Options<'_>,
    backend: &mut B,
) -> Result<()> {
    let Some(width_opt) = opt.get(WIDTH) else {
        return Ok(());
    };

    match width_opt {
        Value::Array(widths) => {
            for (position, width) in widths.iter().enumerate() {
                if let Some(width) = width_value(width) {
                    set_column_width(table, position, width, backend)?;
                }
            }
        },
        other => {
            if let Some(width) = width_value(other) {
                for position in 0..table.width() {
                    set_column_width(table, position, width, backend)?;
                }
            }
        },
    }
    Ok(())
}

fn width_value(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.as_str()),
        Value::String(_) | Value::Null => None,
        other => {
            log::warn!("ignoring column width {}: widths are strings such as \"2cm\"", other);
            None
        },
    }
}

fn set_column_width<B: DocumentBackend + ?Sized>(
    table: &mut Table,
    position: usize,
    width: &str,
    backend: &mut B,
) -> Result<()> {
    let markup = StyleMarkup::column_width(width)?;
    let style = backend.insert_style(&markup, None, true)?;
    let mut column = table.get_column(position);
    column.style = Some(style);
    table.set_column(position, column);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odf::OdsDocument;
    use crate::odf::ods::{Cell, CellValue, Column, Row};
    use crate::schema::node::{TABLE, split};
    use serde_json::json;

    fn three_column_table() -> Table {
        let mut table = Table::new("t");
        let mut row = Row::new(None);
        for i in 0..3 {
            row.append(Cell::new(CellValue::Integer(i)));
        }
        table.append(row);
        table
    }

    fn widths_of(doc: &OdsDocument, table: &Table) -> Vec<Option<String>> {
        table
            .columns()
            .iter()
            .map(|c| {
                c.style.as_deref().and_then(|name| {
                    let xml = doc.style_xml(name)?;
                    let start = xml.find("style:column-width=\"")? + "style:column-width=\"".len();
                    let end = xml[start..].find('"')? + start;
                    Some(xml[start..end].to_string())
                })
            })
            .collect()
    }

    #[test]
    fn test_sparse_width_list() {
        let mut doc = OdsDocument::new();
        let mut table = three_column_table();
        table.set_column(
            1,
            Column {
                style: Some("keep".to_string()),
            },
        );

        let node = json!({"table": [], "width": ["2cm", "", "4cm"]});
        let (_, opt) = split(&node, TABLE);
        apply_widths(&mut table, &opt, &mut doc).unwrap();

        assert_eq!(table.get_column(1).style.as_deref(), Some("keep"));
        let widths = widths_of(&doc, &table);
        assert_eq!(widths[0].as_deref(), Some("2cm"));
        assert_eq!(widths[2].as_deref(), Some("4cm"));
    }

    #[test]
    fn test_short_list_only_touches_covered_columns() {
        let mut doc = OdsDocument::new();
        let mut table = three_column_table();
        let node = json!({"width": ["3cm"]});
        let (_, opt) = split(&node, TABLE);
        apply_widths(&mut table, &opt, &mut doc).unwrap();

        assert!(table.get_column(0).style.is_some());
        assert!(table.get_column(1).style.is_none());
        assert!(table.get_column(2).style.is_none());
    }

    #[test]
    fn test_scalar_width_styles_every_column_separately() {
        let mut doc = OdsDocument::new();
        let mut table = three_column_table();
        let node = json!({"width": "2.5cm"});
        let (_, opt) = split(&node, TABLE);
        apply_widths(&mut table, &opt, &mut doc).unwrap();

        let styles: Vec<_> = table.columns().into_iter().map(|c| c.style).collect();
        assert_eq!(
            styles,
            vec![
                Some("co1".to_string()),
                Some("co2".to_string()),
                Some("co3".to_string())
            ]
        );
        assert_eq!(widths_of(&doc, &table), vec![Some("2.5cm".to_string()); 3]);
    }

    #[test]
    fn test_empty_or_missing_width_does_nothing() {
        let mut doc = OdsDocument::new();
        let mut table = three_column_table();
        for node in [json!({}), json!({"width": ""}), json!({"width": []}), json!({"width": 5})] {
            let (_, opt) = split(&node, TABLE);
            apply_widths(&mut table, &opt, &mut doc).unwrap();
        }
        assert!(doc.automatic_style_names().is_empty());
    }
}

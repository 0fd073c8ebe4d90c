//! The schema resolution pass.
//!
//! [`OdsGenerator`] walks the input once, top-down: document → tables → rows →
//! cells. Style defaults cascade downward (table options, then row options,
//! then cell options win over the level above) and every style is inserted
//! into the document the first time it is used.

use super::builtin::BUILTIN_STYLES;
use super::defaults::{Defaults, DefaultsOverride, non_empty};
use super::node::{
    BODY, DEFAULTS, NAME, ROW, STYLES, TABLE, TEXT, VALUE, children, split,
};
use super::registry::{StyleDefinition, StyleRegistry, StyleSpec};
use super::width::apply_widths;
use crate::backend::DocumentBackend;
use crate::common::Result;
use crate::odf::OdsDocument;
use crate::odf::elements::StyleFamily;
use crate::odf::ods::{Cell, CellValue, Row, Table};
use serde_json::Value;
use std::path::Path;

/// Prefix of generated tab names, followed by the 1-based tab position.
pub const DEFAULT_TAB_PREFIX: &str = "Tab";

/// One generation run: the output backend plus the run-scoped state.
///
/// # Examples
///
/// ```
/// use odsgen::OdsGenerator;
/// use serde_json::json;
///
/// # fn main() -> odsgen::Result<()> {
/// let generator = OdsGenerator::new(&json!([[["a", "b", "c"]]]))?;
/// let table = &generator.backend().tables()[0];
/// assert_eq!(table.name, "Tab 1");
/// assert_eq!(table.rows[0].cells[0].style.as_deref(), Some("left"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct OdsGenerator<B: DocumentBackend = OdsDocument> {
    backend: B,
    registry: StyleRegistry,
    defaults: Defaults,
    tab_counter: usize,
}

impl OdsGenerator<OdsDocument> {
    /// Build an `.ods` document from `content`.
    pub fn new(content: &Value) -> Result<Self> {
        Self::with_backend(content, OdsDocument::new())
    }
}

impl<B: DocumentBackend> OdsGenerator<B> {
    /// Build `content` into the given backend.
    pub fn with_backend(content: &Value, backend: B) -> Result<Self> {
        let mut generator = Self {
            backend,
            registry: StyleRegistry::new(),
            defaults: Defaults::default(),
            tab_counter: 0,
        };
        generator.parse(content)?;
        Ok(generator)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Defaults in effect for this run, overrides applied.
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Serialize the document to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.backend.save(path.as_ref())
    }

    fn parse(&mut self, content: &Value) -> Result<()> {
        let (body, opt) = split(content, BODY);

        if let Some(overrides) = opt.get(DEFAULTS) {
            let overrides: DefaultsOverride = serde_json::from_value(overrides.clone())?;
            self.defaults.apply(overrides);
        }

        for (name, markup) in BUILTIN_STYLES {
            let definition = StyleDefinition::parse(name, markup, false)?;
            self.registry.register(definition, &mut self.backend)?;
        }
        if let Some(styles) = opt.get(STYLES) {
            let specs: Vec<StyleSpec> = serde_json::from_value(styles.clone())?;
            for spec in specs {
                let definition = StyleDefinition::try_from(spec)?;
                self.registry.register(definition, &mut self.backend)?;
            }
        }

        for table_content in children(body) {
            self.parse_table(table_content)?;
        }
        Ok(())
    }

    fn parse_table(&mut self, table_content: &Value) -> Result<()> {
        let (rows, opt) = split(table_content, TABLE);
        self.tab_counter += 1;
        let name = opt
            .text_value(NAME)
            .unwrap_or_else(|| format!("{} {}", DEFAULT_TAB_PREFIX, self.tab_counter));
        log::debug!("building table '{}'", name);

        let candidates = opt.style_candidates();
        let style_table_row = self.registry.resolve(
            &candidates,
            StyleFamily::TableRow,
            non_empty(&self.defaults.style_table_row),
        );
        let style_table_cell = self.registry.resolve(
            &candidates,
            StyleFamily::TableCell,
            non_empty(&self.defaults.style_table_cell),
        );

        let mut table = Table::new(name);
        for row_content in children(rows) {
            let row = self.parse_row(
                row_content,
                style_table_row.as_deref(),
                style_table_cell.as_deref(),
            )?;
            table.append(row);
        }
        apply_widths(&mut table, &opt, &mut self.backend)?;
        self.backend.append_table(table)
    }

    fn parse_row(
        &mut self,
        row_content: &Value,
        style_table_row: Option<&str>,
        style_table_cell: Option<&str>,
    ) -> Result<Row> {
        let (cells, opt) = split(row_content, ROW);
        let candidates = opt.style_candidates();

        let style_row = self
            .registry
            .resolve(&candidates, StyleFamily::TableRow, style_table_row);
        if let Some(style) = &style_row {
            self.registry.insert(style, &mut self.backend)?;
        }
        let style_cell = self
            .registry
            .resolve(&candidates, StyleFamily::TableCell, style_table_cell);

        let mut row = Row::new(style_row);
        for cell_content in children(cells) {
            row.append(self.parse_cell(cell_content, style_cell.as_deref())?);
        }
        Ok(row)
    }

    fn parse_cell(&mut self, cell_content: &Value, style_table_cell: Option<&str>) -> Result<Cell> {
        let (value, opt) = split(cell_content, VALUE);
        let value = CellValue::from_json(value);

        let fallback = match style_table_cell {
            Some(style) => Some(style),
            None => non_empty(self.defaults.for_kind(value.kind())),
        };
        let style = self
            .registry
            .resolve(&opt.style_candidates(), StyleFamily::TableCell, fallback);
        if let Some(style) = &style {
            self.registry.insert(style, &mut self.backend)?;
        }

        Ok(Cell {
            value,
            style,
            text: opt.text_value(TEXT),
        })
    }
}

/// Build an `.ods` document from `content`.
pub fn generate(content: &Value) -> Result<OdsDocument> {
    Ok(OdsGenerator::new(content)?.into_backend())
}

/// Build an `.ods` document from `content` and save it to `dest_path`.
pub fn content_to_ods<P: AsRef<Path>>(content: &Value, dest_path: P) -> Result<()> {
    OdsGenerator::new(content)?.save(dest_path)
}

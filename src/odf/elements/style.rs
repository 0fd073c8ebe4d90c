//! Style elements for ODF documents.
//!
//! Style definitions reach the generator as XML fragments such as
//! `<style:style style:family="table-cell">…</style:style>`. This module parses
//! such a fragment once, checks that it is a single well-formed element,
//! extracts its family, and re-serializes it under the name it is registered
//! with.

use crate::common::xml::escape_xml;
use crate::common::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

/// Style family types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFamily {
    /// Paragraph styles
    Paragraph,
    /// Text/character styles
    Text,
    /// Table styles
    Table,
    /// Table column styles
    TableColumn,
    /// Table row styles
    TableRow,
    /// Table cell styles
    TableCell,
    /// Page layout styles
    PageLayout,
    /// Master page styles
    MasterPage,
    /// Graphic styles
    Graphic,
    /// Numeric-format (data) styles, `<number:*-style>` elements
    DataStyle,
}

impl StyleFamily {
    /// Parse style family from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "paragraph" => Some(Self::Paragraph),
            "text" => Some(Self::Text),
            "table" => Some(Self::Table),
            "table-column" => Some(Self::TableColumn),
            "table-row" => Some(Self::TableRow),
            "table-cell" => Some(Self::TableCell),
            "page-layout" => Some(Self::PageLayout),
            "master-page" => Some(Self::MasterPage),
            "graphic" => Some(Self::Graphic),
            "data-style" => Some(Self::DataStyle),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Text => "text",
            Self::Table => "table",
            Self::TableColumn => "table-column",
            Self::TableRow => "table-row",
            Self::TableCell => "table-cell",
            Self::PageLayout => "page-layout",
            Self::MasterPage => "master-page",
            Self::Graphic => "graphic",
            Self::DataStyle => "data-style",
        }
    }
}

/// A parsed style element.
///
/// The markup is kept as a list of owned XML events so it can be written back
/// verbatim, except for the `style:name` attribute of the root element which is
/// replaced by the registration name.
#[derive(Debug, Clone)]
pub struct StyleMarkup {
    family: StyleFamily,
    events: Vec<Event<'static>>,
}

impl StyleMarkup {
    /// Parse a style fragment.
    ///
    /// Fails when the fragment is not well-formed XML, holds more or less than
    /// one root element, or the root element has no recognizable family.
    pub fn parse(markup: &str) -> Result<Self> {
        let mut reader = Reader::from_str(markup);
        reader.config_mut().trim_text(true);

        let mut events = Vec::new();
        let mut family = None;
        let mut depth = 0usize;

        loop {
            let event = reader.read_event()?;
            match &event {
                Event::Eof => break,
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => continue,
                Event::Start(e) | Event::Empty(e) => {
                    if depth == 0 {
                        if family.is_some() {
                            return Err(Error::XmlError(
                                "style markup must contain a single root element".to_string(),
                            ));
                        }
                        family = Some(Self::root_family(e)?);
                    }
                    if matches!(event, Event::Start(_)) {
                        depth += 1;
                    }
                },
                Event::End(_) => depth = depth.saturating_sub(1),
                _ if depth == 0 => {
                    return Err(Error::XmlError(
                        "content outside the root element".to_string(),
                    ));
                },
                _ => {},
            }
            events.push(event.into_owned());
        }

        if depth != 0 {
            return Err(Error::XmlError("unclosed element in style markup".to_string()));
        }
        let family =
            family.ok_or_else(|| Error::XmlError("style markup has no element".to_string()))?;

        Ok(Self { family, events })
    }

    /// Markup for an automatic column style carrying a width, e.g. `"10.5mm"`.
    pub fn column_width(width: &str) -> Result<Self> {
        Self::parse(&format!(
            r#"<style:style style:family="table-column"><style:table-column-properties fo:break-before="auto" style:column-width="{}"/></style:style>"#,
            escape_xml(width)
        ))
    }

    /// Family of the root element.
    pub fn family(&self) -> StyleFamily {
        self.family
    }

    /// Serialize the element, setting `style:name` on the root when a name is given.
    pub fn render(&self, name: Option<&str>) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        let mut root_written = false;

        for event in &self.events {
            match event {
                Event::Start(e) if !root_written => {
                    root_written = true;
                    writer.write_event(Event::Start(Self::named_root(e, name)?))?;
                },
                Event::Empty(e) if !root_written => {
                    root_written = true;
                    writer.write_event(Event::Empty(Self::named_root(e, name)?))?;
                },
                other => writer.write_event(other.clone())?,
            }
        }

        String::from_utf8(writer.into_inner()).map_err(|e| Error::XmlError(e.to_string()))
    }

    fn root_family(root: &BytesStart<'_>) -> Result<StyleFamily> {
        let tag = root.name();
        if tag.as_ref().starts_with(b"number:") {
            return Ok(StyleFamily::DataStyle);
        }

        for attr in root.attributes() {
            let attr = attr?;
            if attr.key.as_ref() == b"style:family" {
                let value = String::from_utf8_lossy(&attr.value);
                return StyleFamily::from_str(&value)
                    .ok_or_else(|| Error::XmlError(format!("unknown style family '{}'", value)));
            }
        }

        Err(Error::XmlError(format!(
            "<{}> has no style:family attribute",
            String::from_utf8_lossy(tag.as_ref())
        )))
    }

    fn named_root(root: &BytesStart<'_>, name: Option<&str>) -> Result<BytesStart<'static>> {
        let tag = String::from_utf8_lossy(root.name().as_ref()).into_owned();
        let mut named = BytesStart::new(tag);
        if let Some(name) = name {
            named.push_attribute(("style:name", name));
        }
        for attr in root.attributes() {
            let attr = attr?;
            if name.is_some() && attr.key.as_ref() == b"style:name" {
                continue;
            }
            named.push_attribute((attr.key.as_ref(), attr.value.as_ref()));
        }
        Ok(named)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOLD: &str = r#"
        <style:style style:family="table-cell" style:parent-style-name="Default">
        <style:text-properties fo:font-weight="bold"/>
        </style:style>
    "#;

    #[test]
    fn test_parse_cell_family() {
        let markup = StyleMarkup::parse(BOLD).unwrap();
        assert_eq!(markup.family(), StyleFamily::TableCell);
    }

    #[test]
    fn test_number_style_is_data_style() {
        let markup = StyleMarkup::parse(
            r#"<number:number-style><number:number number:decimal-places="2"/></number:number-style>"#,
        )
        .unwrap();
        assert_eq!(markup.family(), StyleFamily::DataStyle);
    }

    #[test]
    fn test_render_sets_name_first_and_replaces_existing() {
        let markup = StyleMarkup::parse(
            r#"<style:style style:name="old" style:family="table-row"><style:table-row-properties style:row-height="1cm"/></style:style>"#,
        )
        .unwrap();
        let xml = markup.render(Some("row_1cm")).unwrap();
        assert!(xml.starts_with(r#"<style:style style:name="row_1cm" style:family="table-row">"#));
        assert!(!xml.contains("old"));
        assert!(xml.contains(r#"style:row-height="1cm""#));
    }

    #[test]
    fn test_render_without_name_keeps_markup() {
        let markup = StyleMarkup::column_width("2.5cm").unwrap();
        assert_eq!(markup.family(), StyleFamily::TableColumn);
        let xml = markup.render(None).unwrap();
        assert!(!xml.contains("style:name"));
        assert!(xml.contains(r#"style:column-width="2.5cm""#));
    }

    #[test]
    fn test_name_is_escaped() {
        let markup = StyleMarkup::parse(BOLD).unwrap();
        let xml = markup.render(Some("a&b")).unwrap();
        assert!(xml.contains(r#"style:name="a&amp;b""#));
    }

    #[test]
    fn test_malformed_markup_is_rejected() {
        assert!(StyleMarkup::parse(r#"<style:style style:family="table-cell">"#).is_err());
        assert!(StyleMarkup::parse("<a></b>").is_err());
        assert!(StyleMarkup::parse("").is_err());
        assert!(StyleMarkup::parse("just text").is_err());
    }

    #[test]
    fn test_two_roots_rejected() {
        let two = format!("{}{}", BOLD, BOLD);
        assert!(StyleMarkup::parse(&two).is_err());
    }

    #[test]
    fn test_missing_or_unknown_family_rejected() {
        assert!(StyleMarkup::parse("<style:style/>").is_err());
        assert!(StyleMarkup::parse(r#"<style:style style:family="bogus"/>"#).is_err());
    }
}

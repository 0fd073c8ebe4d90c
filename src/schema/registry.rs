//! Catalog of named styles and their registration into the output document.

use crate::backend::DocumentBackend;
use crate::common::{Error, Result};
use crate::odf::elements::{StyleFamily, StyleMarkup};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// A style-definition object as written in the `styles` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleSpec {
    pub name: String,
    #[serde(alias = "style")]
    pub definition: String,
    #[serde(default, rename = "alwaysInsert", alias = "always_insert")]
    pub always_insert: bool,
}

/// A named, parsed style.
#[derive(Debug, Clone)]
pub struct StyleDefinition {
    pub name: String,
    pub markup: StyleMarkup,
    /// Register into the document as soon as the definition is loaded
    pub always_insert: bool,
}

impl StyleDefinition {
    /// Parse `markup` as the definition of `name`.
    ///
    /// Malformed markup is a configuration defect: the offending definition
    /// is logged and an [`Error::InvalidStyle`] returned.
    pub fn parse(name: &str, markup: &str, always_insert: bool) -> Result<Self> {
        let markup = StyleMarkup::parse(markup).map_err(|e| {
            log::error!("style '{}' has malformed markup: {}", name, markup);
            Error::invalid_style(name, e)
        })?;
        Ok(Self {
            name: name.to_string(),
            markup,
            always_insert,
        })
    }

    pub fn family(&self) -> StyleFamily {
        self.markup.family()
    }
}

impl TryFrom<StyleSpec> for StyleDefinition {
    type Error = Error;

    fn try_from(spec: StyleSpec) -> Result<Self> {
        Self::parse(&spec.name, &spec.definition, spec.always_insert)
    }
}

/// Style catalog plus the set of styles already inserted into the document.
///
/// A name is inserted at most once per run, however many times it resolves.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    catalog: HashMap<String, StyleDefinition>,
    used: HashSet<String>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a definition; always-insert definitions are inserted at once.
    pub fn register<B: DocumentBackend + ?Sized>(
        &mut self,
        definition: StyleDefinition,
        backend: &mut B,
    ) -> Result<()> {
        let name = definition.name.clone();
        let always_insert = definition.always_insert;
        if self.catalog.insert(name.clone(), definition).is_some() {
            log::debug!("style '{}' replaces an earlier definition", name);
        }
        if always_insert {
            self.insert(&name, backend)?;
        }
        Ok(())
    }

    /// Insert a catalog style into the document, once.
    ///
    /// Empty, unknown and already inserted names are ignored.
    pub fn insert<B: DocumentBackend + ?Sized>(&mut self, name: &str, backend: &mut B) -> Result<()> {
        if name.is_empty() || self.used.contains(name) {
            return Ok(());
        }
        let Some(definition) = self.catalog.get(name) else {
            return Ok(());
        };

        log::trace!("inserting style '{}' ({})", name, definition.family().as_str());
        backend.insert_style(&definition.markup, Some(name), true)?;
        self.used.insert(name.to_string());
        Ok(())
    }

    /// First candidate, else `fallback`, that names a catalog style of `family`.
    pub fn resolve(
        &self,
        candidates: &[&str],
        family: StyleFamily,
        fallback: Option<&str>,
    ) -> Option<String> {
        for &candidate in candidates {
            if self.matches(candidate, family) {
                return Some(candidate.to_string());
            }
            if !self.catalog.contains_key(candidate) {
                log::warn!("unknown style '{}'", candidate);
            }
        }
        fallback
            .filter(|name| self.matches(name, family))
            .map(str::to_string)
    }

    fn matches(&self, name: &str, family: StyleFamily) -> bool {
        !name.is_empty()
            && self
                .catalog
                .get(name)
                .is_some_and(|definition| definition.family() == family)
    }

    pub fn get(&self, name: &str) -> Option<&StyleDefinition> {
        self.catalog.get(name)
    }

    /// Whether `name` has been inserted into the document.
    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }
}

//! Model catalog extraction from `xlights_rgbeffects.xml`.
//!
//! The effects document keeps models at the path `models/model`, each with
//! a `name` and `Description` attribute and zero or more `subModel`
//! children. Only those elements are read; the rest of the document is
//! skipped without validation.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

/// Submodels whose name starts with this marker are comments, not parts.
const COMMENT_MARKER: char = '*';

/// One model from the effects document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Model name, the catalog key.
    pub name: String,
    /// Free-text description, may be empty.
    pub description: String,
    /// Submodel names in document order, comment entries excluded.
    pub submodels: Vec<String>,
}

/// Immutable model index built once per run from one effects document.
///
/// Backed by an ordered map, so every traversal is ascending by model
/// name. Auto matching and the `models` listing both rely on that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    models: BTreeMap<String, Model>,
}

impl Catalog {
    /// Parse the effects document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the file does not exist,
    /// [`CatalogError::Io`] when it cannot be read, and
    /// [`CatalogError::Xml`] when it is not well-formed.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        if !path.is_file() {
            return Err(CatalogError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path)?;
        tracing::debug!(path = %path.display(), "reading effects file");
        Self::from_reader(BufReader::with_capacity(64 * 1024, file))
    }

    /// Parse an effects document from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Xml`] when the document is not well-formed.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CatalogError> {
        let mut xml = Reader::from_reader(reader);
        xml.config_mut().trim_text(true);

        let mut catalog = Self::default();
        let mut buf = Vec::with_capacity(4096);

        // Count of currently open ancestor elements. The interesting
        // shapes are root/models (depth 1), root/models/model (depth 2)
        // and root/models/model/subModel (depth 3).
        let mut depth = 0usize;
        let mut in_models = false;
        let mut current: Option<Model> = None;

        loop {
            match xml.read_event_into(&mut buf) {
                Ok(Event::Eof) => break,
                Ok(Event::Start(ref e)) => {
                    catalog.open_element(e, depth, &mut in_models, &mut current, false);
                    depth += 1;
                }
                Ok(Event::Empty(ref e)) => {
                    catalog.open_element(e, depth, &mut in_models, &mut current, true);
                }
                Ok(Event::End(ref e)) => {
                    depth = depth.saturating_sub(1);
                    match e.name().as_ref() {
                        b"model" if depth == 2 && in_models => {
                            if let Some(model) = current.take() {
                                catalog.insert(model);
                            }
                        }
                        b"models" if depth == 1 => in_models = false,
                        _ => {}
                    }
                }
                Ok(_) => {}
                Err(e) => return Err(CatalogError::Xml(e)),
            }
            buf.clear();
        }

        Ok(catalog)
    }

    fn open_element(
        &mut self,
        e: &BytesStart<'_>,
        depth: usize,
        in_models: &mut bool,
        current: &mut Option<Model>,
        self_closing: bool,
    ) {
        match e.name().as_ref() {
            b"models" if depth == 1 => *in_models = true,
            b"model" if depth == 2 && *in_models => {
                let model = Model {
                    name: attr_value(e, "name").unwrap_or_default(),
                    description: attr_value(e, "Description").unwrap_or_default(),
                    submodels: Vec::new(),
                };
                tracing::debug!(model = %model.name, "found model");
                if self_closing {
                    self.insert(model);
                } else {
                    *current = Some(model);
                }
            }
            b"subModel" if depth == 3 => {
                if let Some(model) = current.as_mut() {
                    let name = attr_value(e, "name").unwrap_or_default();
                    if !name.is_empty() && !name.starts_with(COMMENT_MARKER) {
                        tracing::debug!(submodel = %name, "found submodel");
                        model.submodels.push(name);
                    }
                }
            }
            _ => {}
        }
    }

    fn insert(&mut self, model: Model) {
        match self.models.entry(model.name.clone()) {
            Entry::Occupied(mut slot) => {
                tracing::warn!(
                    model = %model.name,
                    "duplicate model definition, keeping the later one"
                );
                slot.insert(model);
            }
            Entry::Vacant(slot) => {
                slot.insert(model);
            }
        }
    }

    /// Look up a model by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    /// Whether a model with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// All models, ascending by name.
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// All model names, ascending.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Number of models in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the catalog holds no models at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

fn attr_value(e: &BytesStart<'_>, key: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key.as_bytes())
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}

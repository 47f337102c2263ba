use std::collections::HashMap;
use std::fs;
use std::path::Path;

use import_logging::import_debug;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("failed to read label catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse label catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("label catalog root must be a JSON object")]
    NotAnObject,
}

const BUILT_IN: &[(&str, &str)] = &[
    ("dataset.External url", "External URL"),
    ("dataset.External id", "External ID"),
    ("dataset.filename", "File name"),
    ("dataset.import.Select source", "Select source"),
    ("dataset.import.Data process", "Data processing"),
    ("dataset.import.Upload data", "Upload data"),
    ("common.Add new", "Add new"),
    ("common.Delete", "Delete"),
    ("common.Next Step", "Next step"),
    ("common.Last Step", "Previous step"),
    ("common.Required", "Required"),
];

/// Localized strings looked up by key. Unknown keys render as the key itself.
#[derive(Debug, Clone)]
pub struct LabelCatalog {
    labels: HashMap<String, String>,
}

impl Default for LabelCatalog {
    fn default() -> Self {
        Self {
            labels: BUILT_IN
                .iter()
                .map(|(key, text)| ((*key).to_string(), (*text).to_string()))
                .collect(),
        }
    }
}

impl LabelCatalog {
    /// Built-in strings overlaid with the catalog at `path`.
    pub fn load(path: &Path) -> Result<Self, LabelError> {
        let text = fs::read_to_string(path).map_err(|source| LabelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut catalog = Self::default();
        catalog.overlay_json(&text)?;
        Ok(catalog)
    }

    /// Merges a JSON catalog. Nested objects are namespaces joined with `.`,
    /// so `{"common": {"Add new": "Ajouter"}}` sets `common.Add new`.
    pub fn overlay_json(&mut self, text: &str) -> Result<(), LabelError> {
        let root: Value = serde_json::from_str(text)?;
        let Value::Object(map) = root else {
            return Err(LabelError::NotAnObject);
        };
        let before = self.labels.len();
        for (key, value) in map {
            self.insert_flattened(key, value);
        }
        import_debug!(
            "label catalog now has {} entries ({} new)",
            self.labels.len(),
            self.labels.len() - before
        );
        Ok(())
    }

    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(key)
    }

    fn insert_flattened(&mut self, prefix: String, value: Value) {
        match value {
            Value::String(text) => {
                self.labels.insert(prefix, text);
            }
            Value::Object(map) => {
                for (key, nested) in map {
                    self.insert_flattened(format!("{prefix}.{key}"), nested);
                }
            }
            // Numbers, arrays and nulls carry no label text.
            _ => {}
        }
    }
}

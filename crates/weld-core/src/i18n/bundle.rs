use std::collections::BTreeMap;

use serde_yaml::Value;
use thiserror::Error;

use crate::kernel::error::{Error, Result};

/// Translation key to translated value
pub type Translations = BTreeMap<String, Value>;

/// Why a translation file could not be decoded
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("'{0}' is not a mapping with scalar keys")]
    NotAMapping(String),
}

/// Plugin translations accumulated per resource file name.
///
/// Later insertions of the same key overwrite earlier ones, so feeding
/// plugins in input order makes the last plugin win.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationBundle {
    files: BTreeMap<String, Translations>,
}

impl TranslationBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `translations` into the entry for `file_name`, creating it if needed
    pub fn merge_file(&mut self, file_name: &str, translations: Translations) {
        self.files
            .entry(file_name.to_string())
            .or_default()
            .extend(translations);
    }

    pub fn get(&self, file_name: &str) -> Option<&Translations> {
        self.files.get(file_name)
    }

    pub fn contains_file(&self, file_name: &str) -> bool {
        self.files.contains_key(file_name)
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Encode the entry for `file_name` as a YAML document nested under `namespace`
    pub fn encode(&self, file_name: &str, namespace: &str) -> Result<Option<String>> {
        let Some(translations) = self.files.get(file_name) else {
            return Ok(None);
        };
        let mut document = BTreeMap::new();
        document.insert(namespace, translations);
        serde_yaml::to_string(&document)
            .map(Some)
            .map_err(|e| Error::serialization("yaml", e))
    }
}

/// Decode a resource file and return the mapping under `namespace`.
///
/// Other top-level keys are ignored. A missing or null namespace, or an
/// empty document, decodes to no translations.
pub fn decode_namespace(contents: &str, namespace: &str) -> std::result::Result<Translations, DecodeError> {
    if contents.trim().is_empty() {
        return Ok(Translations::new());
    }
    let document: Value = serde_yaml::from_str(contents)?;
    let section = match document {
        Value::Null => return Ok(Translations::new()),
        Value::Mapping(mut top) => top.remove(namespace).unwrap_or(Value::Null),
        _ => return Err(DecodeError::NotAMapping("<document>".to_string())),
    };

    match section {
        Value::Null => Ok(Translations::new()),
        Value::Mapping(entries) => entries
            .into_iter()
            .map(|(key, value)| {
                scalar_key(key)
                    .map(|key| (key, value))
                    .ok_or_else(|| DecodeError::NotAMapping(namespace.to_string()))
            })
            .collect(),
        _ => Err(DecodeError::NotAMapping(namespace.to_string())),
    }
}

/// Text of a scalar mapping key, so `404: ...` is keyed as `"404"`
fn scalar_key(key: Value) -> Option<String> {
    match key {
        Value::String(key) => Some(key),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

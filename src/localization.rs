//! Localized string bundles
//!
//! A bundle is a TOML file mapping keys to display strings. Nested tables are
//! flattened into dotted keys, so
//!
//! ```toml
//! greeting = "Ciao"
//!
//! [timer]
//! start = "Avvia"
//! ```
//!
//! yields the keys `greeting` and `timer.start`. Bundles live in one directory,
//! one file per language (`en.toml`, `it.toml`, `pt_BR.toml`, ...).

use anyhow::{Context, Result};
use log::{debug, warn};
use std::collections::HashMap;
use std::path::Path;

use crate::constants::BUNDLE_FILE_EXTENSION;

/// Immutable key to string lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    strings: HashMap<String, String>,
}

impl Bundle {
    /// A bundle without entries. Every lookup falls back to its key.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a bundle from TOML source.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content).context("Failed to parse localization bundle")?;
        let mut strings = HashMap::new();
        flatten_into(&mut strings, None, &table);
        Ok(Self { strings })
    }

    /// Load a bundle from a specific file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read localization bundle: {}", path.as_ref().display()))?;

        let bundle = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid localization bundle: {}", path.as_ref().display()))?;

        debug!("Loaded {} strings from {}", bundle.len(), path.as_ref().display());
        Ok(bundle)
    }

    /// Load `<dir>/<language>.toml`.
    ///
    /// A regional language such as `pt_BR` falls back to `pt` when the regional
    /// file is missing. Fails when neither file exists.
    pub fn load<P: AsRef<Path>>(dir: P, language: &str) -> Result<Self> {
        let dir = dir.as_ref();
        let exact = dir.join(format!("{}.{}", language, BUNDLE_FILE_EXTENSION));
        if exact.exists() {
            return Self::load_from_file(exact);
        }

        if let Some((base, _region)) = language.split_once(['_', '-']) {
            let fallback = dir.join(format!("{}.{}", base, BUNDLE_FILE_EXTENSION));
            if fallback.exists() {
                debug!("No bundle for '{}', using '{}'", language, base);
                return Self::load_from_file(fallback);
            }
        }

        anyhow::bail!("No localization bundle for '{}' in {}", language, dir.display())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// The localized string for `key`, or `key` itself when absent.
    pub fn localized(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

fn flatten_into(strings: &mut HashMap<String, String>, prefix: Option<&str>, table: &toml::Table) {
    for (key, value) in table {
        let full_key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        match value {
            toml::Value::String(text) => {
                strings.insert(full_key, text.clone());
            }
            toml::Value::Table(nested) => flatten_into(strings, Some(&full_key), nested),
            other => warn!("Ignoring non-string bundle entry '{}' ({})", full_key, other.type_str()),
        }
    }
}

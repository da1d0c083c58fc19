//! Resolver configuration with documented defaults
//!
//! The alias table is the only tunable piece of the resolver. It is read-only
//! once a resolver is built, so plans never depend on call history.

use std::path::Path;

use ahash::AHashMap;
use serde::Deserialize;

use crate::core::error::{EngineError, Result};

/// Built-in setting aliases: spoken variant -> canonical setting name
///
/// Identity entries are listed so the canonical names are self-documenting.
pub const DEFAULT_SETTING_ALIASES: [(&str, &str); 7] = [
    ("wifi", "wifi"),
    ("wi-fi", "wifi"),
    ("bluetooth", "bluetooth"),
    ("flashlight", "flashlight"),
    ("torch", "flashlight"),
    ("volume", "volume"),
    ("brightness", "brightness"),
];

/// Configuration for the intent resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Maps a spoken setting name to its canonical form.
    ///
    /// Lookups use the lowercased token captured by the toggle patterns.
    /// Settings missing from the table pass through unchanged.
    pub setting_aliases: AHashMap<String, String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        let setting_aliases = DEFAULT_SETTING_ALIASES
            .iter()
            .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
            .collect();
        Self { setting_aliases }
    }
}

/// On-disk shape of a config file
#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    #[serde(default)]
    setting_aliases: AHashMap<String, String>,
}

impl ResolverConfig {
    /// Canonical name for a setting, or the input itself when unknown
    pub fn canonical_setting<'a>(&'a self, setting: &'a str) -> &'a str {
        self.setting_aliases
            .get(setting)
            .map(String::as_str)
            .unwrap_or(setting)
    }

    /// Parse extra aliases from TOML and merge them over the defaults
    ///
    /// ```toml
    /// [setting_aliases]
    /// "dnd" = "do-not-disturb"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parsed: TomlConfig = toml::from_str(content)?;

        let mut config = Self::default();
        for (alias, canonical) in parsed.setting_aliases {
            let alias = alias.trim().to_lowercase();
            let canonical = canonical.trim().to_lowercase();
            if alias.is_empty() || canonical.is_empty() {
                return Err(EngineError::Config(format!(
                    "Empty setting alias entry: {:?} -> {:?}",
                    alias, canonical
                )));
            }
            config.setting_aliases.insert(alias, canonical);
        }

        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            aliases = config.setting_aliases.len(),
            "Loaded resolver config"
        );
        Ok(config)
    }
}

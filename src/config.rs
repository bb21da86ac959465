//! Adapter settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Settings that tune how the adapter talks to the engine.
///
/// Missing fields take their defaults, unknown fields are rejected.
///
/// # Examples
/// ```
/// use sapx::AdapterSettings;
///
/// let settings = AdapterSettings::from_json(r#"{ "warn_on_unknown_ids": false }"#)
///     .expect("valid settings");
/// assert!(!settings.warn_on_unknown_ids);
/// assert_eq!(settings.material_colour, -1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterSettings {
    /// Record a warning for each requested id that the engine does not know.
    pub warn_on_unknown_ids: bool,
    /// Notes written with link properties created by the adapter.
    pub link_notes: String,
    /// Display colour passed when re-asserting a material; `-1` lets the engine choose.
    pub material_colour: i32,
}

impl Default for AdapterSettings {
    fn default() -> Self {
        Self {
            warn_on_unknown_ids: true,
            link_notes: String::new(),
            material_colour: -1,
        }
    }
}

impl AdapterSettings {
    /// Parse settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed or names an
    /// unknown setting.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its content is invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

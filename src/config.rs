use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::types::errors::ChronicleError;

fn default_min_text_chars() -> usize {
    10
}

/// What a newly recognized day label does to the resolved date when it
/// cannot be converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedPolicy {
    /// The resolved date becomes unset; following lines emit nothing until a
    /// label resolves again.
    #[default]
    Overwrite,
    /// The last successfully resolved date stays in force.
    RetainPrevious,
}

/// Options for [`ChronicleParser`](crate::parse::ChronicleParser).
///
/// Loaded from TOML, e.g.
///
/// ```toml
/// min_text_chars = 10
/// unresolved_policy = "retain_previous"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    /// A record is emitted only when its text has more characters than this.
    #[serde(default = "default_min_text_chars")]
    pub min_text_chars: usize,

    #[serde(default)]
    pub unresolved_policy: UnresolvedPolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_text_chars: default_min_text_chars(),
            unresolved_policy: UnresolvedPolicy::default(),
        }
    }
}

impl ParserConfig {
    pub fn with_min_text_chars(mut self, min_text_chars: usize) -> Self {
        self.min_text_chars = min_text_chars;
        self
    }

    pub fn with_unresolved_policy(mut self, policy: UnresolvedPolicy) -> Self {
        self.unresolved_policy = policy;
        self
    }

    /// Reads a TOML config file. Missing keys take their defaults.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ChronicleError> {
        let path: &Path = path.as_ref();
        let path_owned: String = path.display().to_string();
        let text: String = fs::read_to_string(path).map_err(|source| ChronicleError::Read {
            path: path_owned.clone(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ChronicleError::Config {
            path: path_owned,
            source,
        })
    }
}

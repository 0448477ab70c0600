use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::transform::{ConvertOptions, IdTypeMapping};

/// Default config file name, looked up in the working directory and then `$HOME`.
pub const CONFIG_FILE_NAME: &str = ".gqljs.yaml";

/// Default HTTP timeout for endpoint introspection, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Project configuration loaded from `.gqljs.yaml`.
///
/// Every key is optional so that command-line flags and environment
/// variables can be layered on top; see [`GqljsConfig::convert_options`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GqljsConfig {
    /// Introspection result file.
    pub input: Option<PathBuf>,
    /// Output file; stdout when unset.
    pub output: Option<PathBuf>,
    /// GraphQL endpoint to introspect.
    pub endpoint: Option<String>,
    /// Extra request headers as `Key: Value`.
    pub headers: Vec<String>,
    /// Request timeout in seconds.
    pub timeout: Option<u64>,
    pub ignore_internals: Option<bool>,
    pub nullable_array_items: Option<bool>,
    /// `string`, `number` or `both`.
    pub id_type: Option<String>,
}

impl GqljsConfig {
    /// Resolve conversion options, falling back to built-in defaults.
    pub fn convert_options(&self) -> Result<ConvertOptions, ConfigError> {
        let defaults = ConvertOptions::default();
        let id_type_mapping = match self.id_type.as_deref() {
            Some(raw) => raw.parse::<IdTypeMapping>()?,
            None => defaults.id_type_mapping,
        };
        Ok(ConvertOptions {
            ignore_internals: self.ignore_internals.unwrap_or(defaults.ignore_internals),
            nullable_array_items: self
                .nullable_array_items
                .unwrap_or(defaults.nullable_array_items),
            id_type_mapping,
        })
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// Overlay `other` on top of `self`: set values in `other` win.
    pub fn merge(self, other: GqljsConfig) -> GqljsConfig {
        GqljsConfig {
            input: other.input.or(self.input),
            output: other.output.or(self.output),
            endpoint: other.endpoint.or(self.endpoint),
            headers: if other.headers.is_empty() {
                self.headers
            } else {
                other.headers
            },
            timeout: other.timeout.or(self.timeout),
            ignore_internals: other.ignore_internals.or(self.ignore_internals),
            nullable_array_items: other.nullable_array_items.or(self.nullable_array_items),
            id_type: other.id_type.or(self.id_type),
        }
    }
}

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<GqljsConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: GqljsConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("loaded config from {}", path.display());
    Ok(Some(config))
}

/// Candidate locations for the config file, in lookup order.
pub fn default_config_paths(home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(home) = home {
        paths.push(home.join(CONFIG_FILE_NAME));
    }
    paths
}

/// Load the first config file found among [`default_config_paths`].
pub fn discover_config(home: Option<&Path>) -> Result<Option<(PathBuf, GqljsConfig)>, ConfigError> {
    for path in default_config_paths(home) {
        if let Some(config) = load_config(&path)? {
            return Ok(Some((path, config)));
        }
    }
    Ok(None)
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# gqljs configuration
# Values here are overridden by GQLJS_* environment variables and command-line flags.

# Where the introspection result comes from (endpoint wins over input).
# endpoint: https://api.example.com/graphql
# headers:
#   - "Authorization: Bearer <token>"
timeout: 30                   # seconds, endpoint only
# input: schema.json

# Where the JSON Schema goes (stdout when unset).
# output: schema.jsonschema.json

ignore_internals: true        # drop __-prefixed introspection types
nullable_array_items: false   # anyOf [item, null] for nullable list elements
id_type: string               # string | number | both
"#
}

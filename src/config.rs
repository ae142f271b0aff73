//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orgtree/orgtree.toml`
//! 3. Local config: `<dir>/.orgtree.toml` (usually the current directory)
//! 4. Environment variables: `ORGTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, OrgId, PathMatch};

pub const LOCAL_CONFIG_FILE: &str = ".orgtree.toml";
const ENV_PREFIX: &str = "ORGTREE";

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_file: Option<PathBuf>,
    pub path_match: Option<PathMatch>,
    pub strict: Option<bool>,
    pub default_org: Option<OrgId>,
}

/// Unified configuration for orgtree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// JSON file holding the folder collection
    pub data_file: Option<PathBuf>,
    /// Ancestor test used by descendant queries and move checks
    pub path_match: PathMatch,
    /// Reject collections that break path invariants or repeat names within an org
    pub strict: bool,
    /// Org used when a command takes an optional `--org`
    pub default_org: Option<OrgId>,
}

/// Get the XDG config directory for orgtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orgtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("orgtree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(LOCAL_CONFIG_FILE)
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in `data_file`.
    fn expand_paths(&mut self) {
        if let Some(file) = &self.data_file {
            self.data_file = Some(PathBuf::from(expand_env_vars(&file.to_string_lossy())));
        }
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            data_file: overlay.data_file.clone().or_else(|| self.data_file.clone()),
            path_match: overlay.path_match.unwrap_or(self.path_match),
            strict: overlay.strict.unwrap_or(self.strict),
            default_org: overlay.default_org.or(self.default_org),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.orgtree.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(
            global_config_path().as_deref(),
            local_dir,
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    /// Load settings from explicit sources.
    ///
    /// Missing config files are skipped; unreadable or malformed ones are errors.
    pub fn load_from(
        global: Option<&Path>,
        local_dir: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current, env)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply ORGTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env.prefix_separator("_").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("data_file") {
            settings.data_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("path_match") {
            settings.path_match = match val.to_lowercase().as_str() {
                "substring" => PathMatch::Substring,
                "segment" => PathMatch::Segment,
                other => {
                    return Err(ApplicationError::Config {
                        message: format!("invalid path_match: {other} (expected substring or segment)"),
                    })
                }
            };
        }
        match config.get_bool("strict") {
            Ok(val) => settings.strict = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => {
                return Err(ApplicationError::Config {
                    message: format!("invalid strict: {e}"),
                })
            }
        }
        if let Ok(val) = config.get_string("default_org") {
            let org = val.parse().map_err(|e| ApplicationError::Config {
                message: format!("invalid default_org {val}: {e}"),
            })?;
            settings.default_org = Some(org);
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# orgtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/orgtree/orgtree.toml
#   Local:  ./.orgtree.toml
#   Env:    ORGTREE_* environment variables

# JSON file with the folder collection (~ and $VAR are expanded)
# data_file = "~/folders.json"

# Ancestor test: "substring" (raw containment) or "segment" (whole path segments)
# path_match = "substring"

# Reject collections with broken paths or duplicate names within an org
# strict = false

# Org used when --org is omitted
# default_org = "c1556e17-b7c0-45a3-a6ae-9546248fb17a"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use config::Map;
    use tempfile::TempDir;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_from(None, None, env(&[])).expect("load defaults");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.path_match, PathMatch::Substring);
        assert!(!settings.strict);
    }

    #[test]
    fn given_local_config_when_loading_then_overrides_global() {
        let global_dir = TempDir::new().unwrap();
        let global = global_dir.path().join("orgtree.toml");
        fs::write(&global, "path_match = \"segment\"\nstrict = true\n").unwrap();

        let local_dir = TempDir::new().unwrap();
        fs::write(
            local_config_path(local_dir.path()),
            "strict = false\ndata_file = \"folders.json\"\n",
        )
        .unwrap();

        let settings =
            Settings::load_from(Some(&global), Some(local_dir.path()), env(&[])).unwrap();

        assert_eq!(settings.path_match, PathMatch::Segment);
        assert!(!settings.strict);
        assert_eq!(settings.data_file, Some(PathBuf::from("folders.json")));
    }

    #[test]
    fn given_env_vars_when_loading_then_env_wins() {
        let local_dir = TempDir::new().unwrap();
        fs::write(local_config_path(local_dir.path()), "path_match = \"segment\"\n").unwrap();

        let settings = Settings::load_from(
            None,
            Some(local_dir.path()),
            env(&[
                ("ORGTREE_PATH_MATCH", "substring"),
                ("ORGTREE_STRICT", "true"),
                ("ORGTREE_DEFAULT_ORG", "9b4cdb0a-cfea-4f9d-8a68-24f038fae385"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.path_match, PathMatch::Substring);
        assert!(settings.strict);
        assert_eq!(
            settings.default_org.map(|o| o.to_string()).as_deref(),
            Some("9b4cdb0a-cfea-4f9d-8a68-24f038fae385")
        );
    }

    #[test]
    fn given_invalid_path_match_env_when_loading_then_config_error() {
        let result = Settings::load_from(None, None, env(&[("ORGTREE_PATH_MATCH", "fuzzy")]));
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_invalid_strict_env_when_loading_then_config_error() {
        let result = Settings::load_from(None, None, env(&[("ORGTREE_STRICT", "maybe")]));
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_malformed_local_config_when_loading_then_config_error() {
        let local_dir = TempDir::new().unwrap();
        fs::write(local_config_path(local_dir.path()), "strict = \"maybe\"\n").unwrap();
        let result = Settings::load_from(None, Some(local_dir.path()), env(&[]));
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_tilde_in_data_file_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            data_file: Some(PathBuf::from("~/folders.json")),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let expanded = settings.data_file.unwrap();
        assert!(expanded.to_string_lossy().starts_with(&home));
        assert!(!expanded.to_string_lossy().contains('~'));
    }

    #[test]
    fn given_settings_when_to_toml_then_contains_fields() {
        let settings = Settings {
            path_match: PathMatch::Segment,
            strict: true,
            ..Settings::default()
        };
        let toml = settings.to_toml().unwrap();
        assert!(toml.contains("path_match = \"segment\""));
        assert!(toml.contains("strict = true"));
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.data_file.is_none());
    }
}

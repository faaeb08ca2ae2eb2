//! Configuration file loading and parsing.

use crate::types::DocsyncConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory holding the config file, relative to the project root.
pub const CONFIG_DIR: &str = ".docsync";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

const MAX_CONFIG_SIZE: usize = 1024 * 1024;

static ENV_VAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").expect("env var pattern is valid")
});

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: docsync_common_core::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },
}

/// Configuration loader.
pub struct ConfigLoader {
    base_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            base_path: project_dir.as_ref().to_path_buf(),
        }
    }

    /// Location of the project config file.
    pub fn config_path(&self) -> PathBuf {
        self.base_path.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load configuration from `.docsync/config.yaml`, falling back to defaults.
    pub fn load(&self) -> Result<DocsyncConfig, ConfigError> {
        let config_path = self.config_path();

        if !config_path.exists() {
            return Ok(DocsyncConfig::default());
        }

        self.load_file(&config_path)
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<DocsyncConfig, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = docsync_common_fs::read_to_string(path, MAX_CONFIG_SIZE)?;
        self.parse(&contents)
    }

    /// Parse YAML text, expanding `${VAR}` references first.
    pub fn parse(&self, contents: &str) -> Result<DocsyncConfig, ConfigError> {
        let expanded = self.expand_env_vars(contents)?;

        // An empty file is a valid "all defaults" config.
        if expanded.trim().is_empty() {
            return Ok(DocsyncConfig::default());
        }

        let config: DocsyncConfig =
            serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        self.validate(&config)?;
        Ok(config)
    }

    /// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
    fn expand_env_vars(&self, content: &str) -> Result<String, ConfigError> {
        let mut result = String::with_capacity(content.len());
        let mut last = 0;

        for cap in ENV_VAR.captures_iter(content) {
            let Some(full_match) = cap.get(0) else { continue };
            let var_name = &cap[1];
            let default = cap.get(2).map(|m| m.as_str());

            let value = match std::env::var(var_name) {
                Ok(v) => v,
                Err(_) => match default {
                    Some(d) => d.to_string(),
                    None => {
                        return Err(ConfigError::EnvVarNotFound {
                            var: var_name.to_string(),
                        })
                    }
                },
            };

            result.push_str(&content[last..full_match.start()]);
            result.push_str(&value);
            last = full_match.end();
        }

        result.push_str(&content[last..]);
        Ok(result)
    }

    /// Validate configuration values.
    fn validate(&self, config: &DocsyncConfig) -> Result<(), ConfigError> {
        if config.index.summary_width == 0 {
            return Err(ConfigError::ValidationError {
                message: "index.summary_width must be greater than 0".to_string(),
            });
        }

        if config.index.adr_heading.trim().is_empty()
            || config.index.session_heading.trim().is_empty()
        {
            return Err(ConfigError::ValidationError {
                message: "index headings must not be empty".to_string(),
            });
        }

        if config.index.extension.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "index.extension must not be empty".to_string(),
            });
        }

        if config.readme.recent_count == 0 {
            return Err(ConfigError::ValidationError {
                message: "readme.recent_count must be greater than 0".to_string(),
            });
        }

        if config.status.top_extensions == 0 {
            return Err(ConfigError::ValidationError {
                message: "status.top_extensions must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Save configuration to `.docsync/config.yaml`.
    pub fn save(&self, config: &DocsyncConfig) -> Result<PathBuf, ConfigError> {
        let yaml = serde_yaml::to_string(config).map_err(|e| ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        })?;

        let config_path = self.config_path();
        docsync_common_fs::write_string_atomic(&config_path, &yaml)?;
        Ok(config_path)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_config(dir: &Path, contents: &str) {
        let config_dir = dir.join(CONFIG_DIR);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join(CONFIG_FILE), contents).unwrap();
    }

    #[test]
    fn test_load_defaults_when_no_file() {
        let dir = tempdir().unwrap();
        let config = ConfigLoader::new(dir.path()).load().unwrap();
        assert_eq!(config.paths.adr_dir, PathBuf::from("docs/adr"));
    }

    #[test]
    fn test_load_config_from_yaml_file() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
paths:
  adr_dir: docs/decisions
  readme: docs/INDEX.md
index:
  summary_width: 30
readme:
  recent_count: 5
status:
  git:
    commit_limit: 20
"#,
        );

        let config = ConfigLoader::new(dir.path()).load().unwrap();

        assert_eq!(config.paths.adr_dir, PathBuf::from("docs/decisions"));
        assert_eq!(config.paths.readme, PathBuf::from("docs/INDEX.md"));
        assert_eq!(config.index.summary_width, 30);
        assert_eq!(config.readme.recent_count, 5);
        assert_eq!(config.status.git.commit_limit, 20);

        assert_eq!(config.status.git.contributors_since, "1 month ago");
        assert_eq!(config.paths.src_dir, PathBuf::from("src"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "index:\n  adr_heading: \"## ADR Index\"\n").unwrap();

        let loader = ConfigLoader::new(dir.path());
        let config = loader.load_file(&path).unwrap();
        assert_eq!(config.index.adr_heading, "## ADR Index");

        let missing = loader.load_file(dir.path().join("nope.yaml"));
        assert!(matches!(missing, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), "\n# nothing configured\n");

        let config = ConfigLoader::new(dir.path()).load().unwrap();
        assert_eq!(config.index.summary_width, 50);
    }

    #[test]
    fn test_env_var_expansion() {
        std::env::set_var("DOCSYNC_TEST_ADR_DIR", "adr-records");
        let loader = ConfigLoader::new(".");
        let result = loader
            .expand_env_vars("adr_dir: ${DOCSYNC_TEST_ADR_DIR}/${DOCSYNC_TEST_ADR_DIR}")
            .unwrap();
        assert_eq!(result, "adr_dir: adr-records/adr-records");
        std::env::remove_var("DOCSYNC_TEST_ADR_DIR");
    }

    #[test]
    fn test_env_var_default() {
        let loader = ConfigLoader::new(".");
        let result = loader
            .expand_env_vars("key: ${DOCSYNC_NONEXISTENT:-default}")
            .unwrap();
        assert_eq!(result, "key: default");
    }

    #[test]
    fn test_env_var_missing_error() {
        let loader = ConfigLoader::new(".");
        match loader.expand_env_vars("key: ${DOCSYNC_MISSING_VAR}") {
            Err(ConfigError::EnvVarNotFound { var }) => assert_eq!(var, "DOCSYNC_MISSING_VAR"),
            other => panic!("Expected EnvVarNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_errors() {
        let loader = ConfigLoader::new(".");

        let mut config = DocsyncConfig::default();
        config.index.summary_width = 0;
        match loader.validate(&config) {
            Err(ConfigError::ValidationError { message }) => {
                assert!(message.contains("summary_width"))
            }
            other => panic!("Expected ValidationError, got {other:?}"),
        }

        let mut config = DocsyncConfig::default();
        config.index.adr_heading = "  ".to_string();
        assert!(loader.validate(&config).is_err());

        let mut config = DocsyncConfig::default();
        config.readme.recent_count = 0;
        assert!(loader.validate(&config).is_err());

        let mut config = DocsyncConfig::default();
        config.status.top_extensions = 0;
        assert!(loader.validate(&config).is_err());
    }

    #[test]
    fn test_parse_error_with_line_number() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
paths:
  adr_dir: docs/adr
  broken: [unclosed
"#,
        );

        match ConfigLoader::new(dir.path()).load() {
            Err(ConfigError::ParseError { line, .. }) => assert!(line.is_some()),
            other => panic!("Expected ParseError with line number, got {other:?}"),
        }
    }

    #[test]
    fn test_save_config() {
        let dir = tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path());

        let mut config = DocsyncConfig::default();
        config.index.summary_width = 42;

        let path = loader.save(&config).unwrap();
        assert_eq!(path, dir.path().join(".docsync/config.yaml"));

        let loaded = loader.load().unwrap();
        assert_eq!(loaded.index.summary_width, 42);
    }
}

//! Configuration for colgraph.
//!
//! Settings come from three layers, highest precedence first:
//!
//! 1. command-line flags,
//! 2. a YAML file (`colgraph.yaml` in the working directory, or the path
//!    given with `--config`),
//! 3. built-in defaults.
//!
//! ```yaml
//! input: graphs/queen5_5.col
//! max-line-length: 63
//! prompt: "> "
//! ```

use crate::error::{Error, Result};
use crate::parser::{DEFAULT_MAX_LINE_LENGTH, ParseOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "colgraph.yaml";

/// Input file read when none is configured.
pub const DEFAULT_INPUT: &str = "sample.col";

/// Prompt shown by the interactive session by default.
pub const DEFAULT_PROMPT: &str = "> ";

/// Resolved configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Path of the `.col` file to load.
    pub input: PathBuf,

    /// Bytes of line content the parser keeps.
    pub max_line_length: usize,

    /// Interactive prompt.
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Config`] if it is not valid configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on invalid YAML, unknown keys or a zero
    /// line length.
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the explicit config file if given, otherwise `colgraph.yaml` in
    /// `working_dir` if it exists, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Config::load`]. An explicit path that does
    /// not exist is an error; a missing default file is not.
    pub fn discover(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "Loading configuration");
            return Self::load(path);
        }

        let candidate = working_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "Loading configuration");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parser options derived from this configuration.
    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            max_line_length: self.max_line_length,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.max_line_length == 0 {
            return Err(Error::Config(
                "max-line-length must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_historical_behaviour() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("sample.col"));
        assert_eq!(config.max_line_length, 63);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config = Config::from_yaml("input: graphs/g.col\n").unwrap();
        assert_eq!(config.input, PathBuf::from("graphs/g.col"));
        assert_eq!(config.max_line_length, DEFAULT_MAX_LINE_LENGTH);
    }

    #[test]
    fn kebab_case_keys_are_read() {
        let config = Config::from_yaml("max-line-length: 128\nprompt: \"graph> \"\n").unwrap();
        assert_eq!(config.max_line_length, 128);
        assert_eq!(config.prompt, "graph> ");
        assert_eq!(config.parse_options().max_line_length, 128);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = Config::from_yaml("inptu: x.col\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn zero_line_length_is_rejected() {
        let err = Config::from_yaml("max-line-length: 0\n").unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn discover_prefers_explicit_path() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("custom.yaml");
        fs::write(&explicit, "prompt: \"x \"\n").unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "prompt: \"y \"\n").unwrap();

        let config = Config::discover(Some(&explicit), dir.path()).unwrap();
        assert_eq!(config.prompt, "x ");
    }

    #[test]
    fn discover_reads_default_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "input: other.col\n").unwrap();

        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.input, PathBuf::from("other.col"));
    }

    #[test]
    fn discover_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::discover(None, dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn discover_with_missing_explicit_path_fails() {
        let dir = TempDir::new().unwrap();
        let err = Config::discover(Some(&dir.path().join("nope.yaml")), dir.path()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

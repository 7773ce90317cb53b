//! Trivia configuration - defaults, TOML file, environment
//!
//! Layers are applied in order, later ones win:
//! - built-in defaults
//! - `~/.trivia/config.toml` (or an explicit path)
//! - environment variables:
//!   - `TRIVIA_QUESTIONS_PER_PAGE`: page size for list endpoints, 1 to 100 (default: 10)
//!   - `TRIVIA_VALIDATE_CATEGORY`: reject new questions with unknown categories (default: false)
//!   - `TRIVIA_QUIZ_SELECTION`: `first` or `random` (default: first)

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::pagination::{DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value '{value}' for {var}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("invalid {field} in {path:?}: {value}")]
    InvalidValue {
        path: PathBuf,
        field: &'static str,
        value: String,
    },
}

fn valid_page_size(n: u32) -> bool {
    (1..=MAX_PER_PAGE).contains(&n)
}

/// How the next quiz question is chosen among unseen candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizSelection {
    /// Lowest unseen id
    #[default]
    First,
    /// Uniform among unseen
    Random,
}

impl FromStr for QuizSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "random" => Ok(Self::Random),
            other => Err(other.to_owned()),
        }
    }
}

/// Service behaviour knobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriviaConfig {
    pub questions_per_page: u32,
    pub validate_category: bool,
    pub quiz_selection: QuizSelection,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            questions_per_page: DEFAULT_PER_PAGE,
            validate_category: false,
            quiz_selection: QuizSelection::First,
        }
    }
}

impl TriviaConfig {
    /// Default config file path: ~/.trivia/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trivia/config.toml")
    }

    /// Load all layers. A missing file at the default location is not an
    /// error; a missing explicit `path` is.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_owned(),
            source,
        })?;
        if !valid_page_size(config.questions_per_page) {
            return Err(ConfigError::InvalidValue {
                path: path.to_owned(),
                field: "questions_per_page",
                value: config.questions_per_page.to_string(),
            });
        }
        Ok(config)
    }

    /// Override fields from environment variables read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        const PER_PAGE: &str = "TRIVIA_QUESTIONS_PER_PAGE";
        const VALIDATE: &str = "TRIVIA_VALIDATE_CATEGORY";
        const SELECTION: &str = "TRIVIA_QUIZ_SELECTION";

        if let Some(value) = lookup(PER_PAGE) {
            self.questions_per_page = value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| valid_page_size(*n))
                .ok_or(ConfigError::InvalidEnv { var: PER_PAGE, value })?;
        }

        if let Some(value) = lookup(VALIDATE) {
            self.validate_category = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(ConfigError::InvalidEnv { var: VALIDATE, value }),
            };
        }

        if let Some(value) = lookup(SELECTION) {
            self.quiz_selection = value
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { var: SELECTION, value })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults() {
        let config = TriviaConfig::default();
        assert_eq!(config.questions_per_page, 10);
        assert!(!config.validate_category);
        assert_eq!(config.quiz_selection, QuizSelection::First);
    }

    #[test]
    fn parses_partial_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "quiz_selection = \"random\"").unwrap();

        let config = TriviaConfig::from_file(file.path()).unwrap();
        assert_eq!(config.quiz_selection, QuizSelection::Random);
        assert_eq!(config.questions_per_page, 10);
    }

    #[test]
    fn rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "questions_per_page = \"many\"").unwrap();

        let err = TriviaConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = TriviaConfig::load(Some(Path::new("/nonexistent/trivia.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn env_overrides_file() {
        let mut config = TriviaConfig::default();
        config
            .apply_env(env(&[
                ("TRIVIA_QUESTIONS_PER_PAGE", "5"),
                ("TRIVIA_VALIDATE_CATEGORY", "true"),
                ("TRIVIA_QUIZ_SELECTION", "Random"),
            ]))
            .unwrap();

        assert_eq!(config.questions_per_page, 5);
        assert!(config.validate_category);
        assert_eq!(config.quiz_selection, QuizSelection::Random);
    }

    #[test]
    fn env_rejects_zero_page_size() {
        let mut config = TriviaConfig::default();
        let err = config
            .apply_env(env(&[("TRIVIA_QUESTIONS_PER_PAGE", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: "TRIVIA_QUESTIONS_PER_PAGE", .. }));
    }

    #[test]
    fn env_rejects_page_size_over_limit() {
        let mut config = TriviaConfig::default();
        let err = config
            .apply_env(env(&[("TRIVIA_QUESTIONS_PER_PAGE", "500")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: "TRIVIA_QUESTIONS_PER_PAGE", .. }));

        config
            .apply_env(env(&[("TRIVIA_QUESTIONS_PER_PAGE", "100")]))
            .unwrap();
        assert_eq!(config.questions_per_page, 100);
    }

    #[test]
    fn file_rejects_page_size_over_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "questions_per_page = 500").unwrap();

        let err = TriviaConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { field: "questions_per_page", .. }
        ));
    }

    #[test]
    fn env_rejects_unknown_selection() {
        let mut config = TriviaConfig::default();
        assert!(config
            .apply_env(env(&[("TRIVIA_QUIZ_SELECTION", "shuffle")]))
            .is_err());
    }
}

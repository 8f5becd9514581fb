use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "quizkit.yaml";

/// Framework options.
///
/// `feedback_on_each_question` is only read by the view layer; the session
/// itself never looks at it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub timer_enabled: bool,
    pub feedback_on_each_question: bool,
}

/// Values supplied on the command line. `None` keeps whatever the file said.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub timer_enabled: Option<bool>,
    pub feedback_on_each_question: Option<bool>,
}

impl Config {
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Loads `path` if given, otherwise `quizkit.yaml` when it exists, otherwise defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(v) = overrides.timer_enabled {
            self.timer_enabled = v;
        }
        if let Some(v) = overrides.feedback_on_each_question {
            self.feedback_on_each_question = v;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_off() {
        let config = Config::default();
        assert!(!config.timer_enabled);
        assert!(!config.feedback_on_each_question);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("timerEnabled: true\n").unwrap();
        assert!(config.timer_enabled);
        assert!(!config.feedback_on_each_question);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn overrides_win_over_file() {
        let config = Config::from_yaml("timerEnabled: true\nfeedbackOnEachQuestion: true\n")
            .unwrap()
            .with_overrides(Overrides {
                timer_enabled: Some(false),
                feedback_on_each_question: None,
            });
        assert!(!config.timer_enabled);
        assert!(config.feedback_on_each_question);
    }
}

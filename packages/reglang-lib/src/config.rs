use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{automaton::Alphabet, error::AutomatonError, logger::LogLevel};

/// Every field may be left out of the configuration file, missing fields
/// take their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphabetConfig {
    letters: Vec<char>,
    epsilon: char,
    empty: char,
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        let alphabet = Alphabet::default();
        AlphabetConfig {
            letters: alphabet.letters().to_vec(),
            epsilon: alphabet.epsilon_marker(),
            empty: alphabet.empty_marker(),
        }
    }
}

impl AlphabetConfig {
    pub fn with_letters(mut self, letters: Vec<char>) -> Self {
        self.letters = letters;
        self
    }

    pub fn with_epsilon(mut self, epsilon: char) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_empty(mut self, empty: char) -> Self {
        self.empty = empty;
        self
    }

    pub fn get_letters(&self) -> &Vec<char> {
        &self.letters
    }

    pub fn get_epsilon(&self) -> &char {
        &self.epsilon
    }

    pub fn get_empty(&self) -> &char {
        &self.empty
    }

    pub fn to_alphabet(&self) -> Result<Alphabet, AutomatonError> {
        Alphabet::new(self.letters.iter().copied(), self.epsilon, self.empty)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    enabled: bool,
    log_level: LogLevel,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            enabled: false,
            log_level: LogLevel::Warn,
        }
    }
}

impl LoggerConfig {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn get_enabled(&self) -> &bool {
        &self.enabled
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReglangConfig {
    alphabet: AlphabetConfig,
    logger: LoggerConfig,
}

impl ReglangConfig {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(file_path: P) -> anyhow::Result<Self> {
        let canonic_path = std::fs::canonicalize(file_path)?;
        let content = std::fs::read_to_string(canonic_path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_optional_file<P: AsRef<Path>>(file_path: Option<P>) -> anyhow::Result<Self> {
        match file_path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn with_alphabet(mut self, alphabet: AlphabetConfig) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_logger(mut self, logger: LoggerConfig) -> Self {
        self.logger = logger;
        self
    }

    pub fn get_alphabet(&self) -> &AlphabetConfig {
        &self.alphabet
    }

    pub fn get_logger(&self) -> &LoggerConfig {
        &self.logger
    }
}

//! Configuration loading
//!
//! A config file is a flat TOML table of named string fields. Every field is
//! optional and falls back to its default. Numeric settings stay strings in
//! the file and are validated only when they are turned into a
//! [`Combinator`].
//!
//! ```toml
//! root = "."
//! order = "depth-first"
//! length = "3"
//! max_digit = "1"
//! log_filter = "combinator=debug"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::collections::WalkOrder;
use crate::enumerator::{signed_parameters, Combinator, CombinatorError};

/// Errors from configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file '{path}': {source}")]
    Read {
        /// File that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not a valid config document
    #[error("failed to parse config file '{path}': {message}")]
    Parse {
        /// File that failed to decode
        path: PathBuf,
        /// Decoder message
        message: String,
    },

    /// A field holds a value that cannot be interpreted
    #[error("invalid config value for `{field}`: {value:?}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// Raw field contents
        value: String,
    },

    /// Length/max digit were parsed but rejected by the enumerator
    #[error(transparent)]
    Combinator(#[from] CombinatorError),
}

/// Named string settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory that `walk` starts from
    pub root: String,

    /// `depth-first` or `breadth-first`
    pub order: String,

    /// Sequence length
    pub length: String,

    /// Largest digit value
    pub max_digit: String,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            order: "depth-first".to_string(),
            length: "1".to_string(),
            max_digit: "1".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Read and decode a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Decode a config document held in memory
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Validated `length` and `max_digit`, without allocating an enumerator
    pub fn parameters(&self) -> Result<(usize, u32), ConfigError> {
        let length = parse_int("length", &self.length)?;
        let max_digit = parse_int("max_digit", &self.max_digit)?;
        Ok(signed_parameters(length, max_digit)?)
    }

    /// Build the enumerator described by `length` and `max_digit`
    pub fn combinator(&self) -> Result<Combinator, ConfigError> {
        let (length, max_digit) = self.parameters()?;
        Ok(Combinator::new(length, max_digit)?)
    }

    /// Traversal order named by `order`
    pub fn walk_order(&self) -> Result<WalkOrder, ConfigError> {
        match self.order.trim() {
            "depth-first" | "dfs" => Ok(WalkOrder::DepthFirst),
            "breadth-first" | "bfs" => Ok(WalkOrder::BreadthFirst),
            _ => Err(ConfigError::InvalidValue {
                field: "order",
                value: self.order.clone(),
            }),
        }
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = Config::parse("length = \"4\"").unwrap();
        assert_eq!(config.length, "4");
        assert_eq!(config.max_digit, "1");
        assert_eq!(config.root, ".");
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        assert!(Config::parse("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_non_string_field_is_parse_error() {
        assert!(Config::parse("length = 4").is_err());
    }

    #[test]
    fn test_combinator_from_fields() {
        let config = Config::parse("length = \"2\"\nmax_digit = \"2\"").unwrap();
        let combinator = config.combinator().unwrap();
        assert_eq!(combinator.count(), 9);
    }

    #[test]
    fn test_negative_max_digit_is_rejected() {
        let config = Config::parse("max_digit = \"-1\"").unwrap();
        assert!(matches!(
            config.combinator(),
            Err(ConfigError::Combinator(CombinatorError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_huge_length_is_rejected_not_panicking() {
        let config = Config::parse("length = \"4611686018427387903\"").unwrap();
        assert!(matches!(
            config.combinator(),
            Err(ConfigError::Combinator(CombinatorError::InvalidArgument(_)))
        ));

        // Counting needs no digit buffer
        let (length, max_digit) = config.parameters().unwrap();
        assert_eq!(crate::enumerator::total_count(length, max_digit), None);
    }

    #[test]
    fn test_non_numeric_length_is_invalid_value() {
        let config = Config::parse("length = \"three\"").unwrap();
        assert!(matches!(
            config.combinator(),
            Err(ConfigError::InvalidValue { field: "length", .. })
        ));
    }

    #[test]
    fn test_walk_order() {
        let mut config = Config::default();
        assert_eq!(config.walk_order().unwrap(), WalkOrder::DepthFirst);
        config.order = "bfs".to_string();
        assert_eq!(config.walk_order().unwrap(), WalkOrder::BreadthFirst);
        config.order = "sideways".to_string();
        assert!(config.walk_order().is_err());
    }
}

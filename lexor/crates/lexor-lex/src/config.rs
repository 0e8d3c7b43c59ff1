//! Scanner configuration.
//!
//! A [`LexerConfig`] is a plain value. It can be built in code or parsed from
//! a TOML document; the library never touches the filesystem.
//!
//! ```
//! use lexor_lex::LexerConfig;
//!
//! let config = LexerConfig::from_toml_str("start_line = 12").unwrap();
//! assert_eq!(config.start_line, 12);
//! assert!(config.skip_bom);
//! ```

use lexor_util::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Options for a scan session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerConfig {
    /// Line number assigned to the first line of the source.
    #[serde(default = "default_start_line")]
    pub start_line: u32,

    /// Skip a leading byte-order mark without emitting a token.
    #[serde(default = "default_true")]
    pub skip_bom: bool,
}

fn default_start_line() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            start_line: default_start_line(),
            skip_bom: true,
        }
    }
}

impl LexerConfig {
    /// Returns the default configuration starting at `line`.
    pub fn starting_at(line: u32) -> Self {
        Self {
            start_line: line,
            ..Self::default()
        }
    }

    /// Checks that every field is in range.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.start_line == 0 {
            return Err(ConfigError::InvalidValue {
                field: "start_line",
                reason: "line numbers start at 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parses and validates a TOML document. Missing keys take their
    /// defaults.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: LexerConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as a TOML document.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

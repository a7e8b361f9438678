//! Demo configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable             | Values                 | Default |
//! |----------------------|------------------------|---------|
//! | `BOOKSTORE_CURRENCY` | 3-letter code          | `AED`   |
//! | `BOOKSTORE_OUTPUT`   | `text` \| `json`       | `text`  |
//! | `BOOKSTORE_SCENARIO` | `all` \| `1`..=`4`     | `all`   |
//!
//! Log filtering uses the standard `RUST_LOG` variable.

use std::env;
use std::str::FromStr;

use bookstore_core::DEFAULT_CURRENCY;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable catalog, orders and invoices.
    #[default]
    Text,
    /// One JSON document with every scenario result.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// Which scenarios to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScenarioSelection {
    #[default]
    All,
    /// A single scenario by its 1-based number.
    Only(u8),
}

impl ScenarioSelection {
    pub fn includes(&self, number: u8) -> bool {
        match self {
            ScenarioSelection::All => true,
            ScenarioSelection::Only(n) => *n == number,
        }
    }
}

/// Demo configuration.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Currency code printed in front of amounts
    pub currency: String,

    /// Output format for stdout
    pub output: OutputFormat,

    /// Scenarios to run
    pub scenarios: ScenarioSelection,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            currency: DEFAULT_CURRENCY.to_string(),
            output: OutputFormat::default(),
            scenarios: ScenarioSelection::default(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DemoConfig::default();

        let currency = match lookup("BOOKSTORE_CURRENCY") {
            Some(code) => {
                let code = code.trim().to_string();
                if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
                    return Err(ConfigError::InvalidValue("BOOKSTORE_CURRENCY".to_string()));
                }
                code
            }
            None => defaults.currency,
        };

        let output = match lookup("BOOKSTORE_OUTPUT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BOOKSTORE_OUTPUT".to_string()))?,
            None => defaults.output,
        };

        let scenarios = match lookup("BOOKSTORE_SCENARIO") {
            Some(value) if value.trim().eq_ignore_ascii_case("all") => ScenarioSelection::All,
            Some(value) => match value.trim().parse::<u8>() {
                Ok(n) if (1..=4).contains(&n) => ScenarioSelection::Only(n),
                _ => return Err(ConfigError::InvalidValue("BOOKSTORE_SCENARIO".to_string())),
            },
            None => defaults.scenarios,
        };

        Ok(DemoConfig {
            currency,
            output,
            scenarios,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

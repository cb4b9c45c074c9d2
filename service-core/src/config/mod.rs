use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 8080;

/// Settings shared by every service. Sources, lowest priority first: built-in
/// defaults, an optional `configuration` file, then `APP__*` variables.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_sources(Environment::with_prefix("APP").separator("__"))
    }

    fn from_sources(variables: Environment) -> Result<Self, AppError> {
        Cfg::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .add_source(File::with_name("configuration").required(false))
            .add_source(variables)
            .build()?
            .try_deserialize()
            .map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn variables(pairs: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("APP")
            .separator("__")
            .source(Some(map))
    }

    #[test]
    fn test_port_defaults_without_variables() {
        let config = Config::from_sources(variables(&[])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_port_from_prefixed_variable() {
        let config = Config::from_sources(variables(&[("APP__PORT", "9090")])).unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let result = Config::from_sources(variables(&[("APP__PORT", "not-a-port")]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}

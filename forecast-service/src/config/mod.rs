use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

const DEFAULT_SERVICE_NAME: &str = "forecast-service";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct ForecastConfig {
    pub common: core_config::Config,
    pub environment: Environment,
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
    /// When set, spans are exported to this OTLP collector.
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    const ALL: [Environment; 3] = [
        Environment::Development,
        Environment::Staging,
        Environment::Production,
    ];

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Environment::Development => &["development", "dev"],
            Environment::Staging => &["staging"],
            Environment::Production => &["production", "prod"],
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Environment::ALL
            .into_iter()
            .find(|env| env.aliases().contains(&name.as_str()))
            .ok_or_else(|| {
                AppError::ConfigError(anyhow::anyhow!(
                    "Unknown ENVIRONMENT '{}', expected development, staging or production",
                    s
                ))
            })
    }
}

impl ForecastConfig {
    /// Read the process environment. `ENVIRONMENT` selects the behaviour;
    /// every other variable is optional in every environment.
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let config = Self::from_lookup(common, |key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_lookup(
        common: core_config::Config,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let environment = match lookup("ENVIRONMENT") {
            Some(name) => name.parse()?,
            None => Environment::Development,
        };

        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(ForecastConfig {
            common,
            environment,
            service_name: non_empty("SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            service_version: non_empty("SERVICE_VERSION")
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            otlp_endpoint: non_empty("OTLP_ENDPOINT"),
        })
    }

    /// Configuration with defaults for the given environment, bypassing the
    /// process environment.
    pub fn with_environment(environment: Environment) -> Self {
        ForecastConfig {
            common: core_config::Config::default(),
            environment,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            otlp_endpoint: None,
        }
    }

    /// The OpenAPI document and the Swagger UI are only mounted in
    /// development.
    pub fn docs_enabled(&self) -> bool {
        self.environment == Environment::Development
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.common.port == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "APP__PORT must be greater than 0"
            )));
        }
        Ok(())
    }
}

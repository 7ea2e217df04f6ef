use crate::app_config::{AppConfig, BrandLookupConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; defaults match a local development setup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let defaults = BrandLookupConfig::default();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(default);
        };
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("CREATRATE_ENV", "development"))?;
    let bind_addr = parse_addr("CREATRATE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("CREATRATE_LOG_LEVEL", "info");

    let timeout_secs = parse_u64("CREATRATE_BRAND_LOOKUP_TIMEOUT_SECS", defaults.timeout_secs)?;
    if timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "CREATRATE_BRAND_LOOKUP_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }
    let user_agent = or_default("CREATRATE_BRAND_LOOKUP_USER_AGENT", &defaults.user_agent);
    let search_url = or_default("CREATRATE_BRAND_SEARCH_URL", &defaults.search_url);

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        brand_lookup: BrandLookupConfig {
            timeout_secs,
            user_agent,
            search_url,
        },
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "CREATRATE_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

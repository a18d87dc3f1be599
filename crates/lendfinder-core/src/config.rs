use crate::app_config::{AppConfig, Environment};
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
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("LENDFINDER_ENV", "development"))?;

    let bind_addr = or_default("LENDFINDER_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("LENDFINDER_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("LENDFINDER_LOG_LEVEL", "info");

    let places_api_token = lookup("LENDFINDER_PLACES_API_TOKEN")
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty());
    let places_base_url = or_default("LENDFINDER_PLACES_BASE_URL", "https://api.apify.com");
    let places_actor = or_default("LENDFINDER_PLACES_ACTOR", "compass~crawler-google-places");
    let places_timeout_secs = parse_u64("LENDFINDER_PLACES_TIMEOUT_SECS", "30")?;
    if places_timeout_secs == 0 {
        return Err(invalid(
            "LENDFINDER_PLACES_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }

    let max_results = parse_usize("LENDFINDER_MAX_RESULTS", "20")?;
    if max_results == 0 {
        return Err(invalid(
            "LENDFINDER_MAX_RESULTS",
            "must be greater than zero".to_string(),
        ));
    }

    let user_agent = or_default("LENDFINDER_USER_AGENT", "lendfinder/0.1 (store-locator)");
    let cities_path = PathBuf::from(or_default(
        "LENDFINDER_CITIES_PATH",
        "./data/top-locations.csv",
    ));

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        places_api_token,
        places_base_url,
        places_actor,
        places_timeout_secs,
        max_results,
        user_agent,
        cities_path,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LENDFINDER_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

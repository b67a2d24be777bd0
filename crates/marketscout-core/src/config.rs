use crate::app_config::{AppConfig, Mode};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric or boolean value cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric or boolean value cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed. Every variable is optional: the collector degrades gracefully
/// rather than refusing to start (a missing owner just disables publishing).
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_bool = |var: &str, default: bool| -> Result<bool, ConfigError> {
        match lookup(var) {
            Err(_) => Ok(default),
            Ok(raw) => match raw.as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                other => Err(ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: format!("expected true/false, got \"{other}\""),
                }),
            },
        }
    };

    let mode = parse_mode(&or_default("MARKETSCOUT_MODE", "test"));
    let log_level = or_default("MARKETSCOUT_LOG_LEVEL", "info");
    let sources_path = PathBuf::from(or_default(
        "MARKETSCOUT_SOURCES_PATH",
        "./config/sources.yaml",
    ));
    let reports_dir = PathBuf::from(or_default("MARKETSCOUT_REPORTS_DIR", "./reports"));

    let publish_enabled = parse_bool("MARKETSCOUT_PUBLISH_ENABLED", false)?;
    let github_owner = lookup("MARKETSCOUT_GITHUB_OWNER")
        .ok()
        .filter(|s| !s.trim().is_empty());
    let github_repo = or_default("MARKETSCOUT_GITHUB_REPO", "market-intel");
    let github_branch = or_default("MARKETSCOUT_GITHUB_BRANCH", "main");

    let request_timeout_secs = parse_u64("MARKETSCOUT_REQUEST_TIMEOUT_SECS", "10")?;
    let request_delay_ms = parse_u64("MARKETSCOUT_REQUEST_DELAY_MS", "2000")?;
    let user_agent = or_default(
        "MARKETSCOUT_USER_AGENT",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
    );
    let max_trends = parse_usize("MARKETSCOUT_MAX_TRENDS", "10")?;
    let max_competitors = parse_usize("MARKETSCOUT_MAX_COMPETITORS", "5")?;

    Ok(AppConfig {
        mode,
        log_level,
        sources_path,
        reports_dir,
        publish_enabled,
        github_owner,
        github_repo,
        github_branch,
        request_timeout_secs,
        request_delay_ms,
        user_agent,
        max_trends,
        max_competitors,
    })
}

/// Parse a string into a `Mode` variant.
///
/// Unrecognized values default to `Mode::Test` — the safe direction for a
/// tool that can push to a remote.
fn parse_mode(s: &str) -> Mode {
    match s {
        "production" => Mode::Production,
        _ => Mode::Test,
    }
}

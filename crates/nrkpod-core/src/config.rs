use std::path::PathBuf;
use std::str::FromStr;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://psapi.nrk.no/radio/catalog/podcast";
pub const DEFAULT_MANIFEST_BASE_URL: &str = "https://psapi.nrk.no/playback/manifest/podcast";
pub const DEFAULT_SHOWS_PATH: &str = "PodcastsToUpdate.txt";
pub const DEFAULT_USER_AGENT: &str = "nrkpod/0.1 (podcast-feed)";
pub const DEFAULT_LOG_LEVEL: &str = "info";

const DEFAULT_REQUESTS_PER_SECOND: u32 = 2;
const DEFAULT_INTER_SHOW_DELAY_MS: u64 = 2000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Reads the run settings from `NRKPOD_*` variables, after merging in a
/// `.env` file from the working directory when one exists.
///
/// Loading never fails. A variable with an unusable value is replaced by its
/// default and reported in the returned list, so the caller can log it once
/// its subscriber is installed.
#[must_use]
pub fn load_app_config() -> (AppConfig, Vec<ConfigError>) {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Same as [`load_app_config`] but reads only the process environment.
#[must_use]
pub fn load_app_config_from_env() -> (AppConfig, Vec<ConfigError>) {
    build_app_config(|key| std::env::var(key))
}

/// Assembles an [`AppConfig`] from `lookup`, which stands in for
/// `std::env::var` so tests can pass a `HashMap`.
fn build_app_config<F>(lookup: F) -> (AppConfig, Vec<ConfigError>)
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let mut invalid = Vec::new();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let requests_per_second = number_or_default(
        &lookup,
        &mut invalid,
        "NRKPOD_REQUESTS_PER_SECOND",
        DEFAULT_REQUESTS_PER_SECOND,
        1,
    );
    let inter_show_delay_ms = number_or_default(
        &lookup,
        &mut invalid,
        "NRKPOD_INTER_SHOW_DELAY_MS",
        DEFAULT_INTER_SHOW_DELAY_MS,
        0,
    );
    let request_timeout_secs = number_or_default(
        &lookup,
        &mut invalid,
        "NRKPOD_REQUEST_TIMEOUT_SECS",
        DEFAULT_REQUEST_TIMEOUT_SECS,
        1,
    );

    let config = AppConfig {
        catalog_base_url: or_default("NRKPOD_CATALOG_BASE_URL", DEFAULT_CATALOG_BASE_URL),
        manifest_base_url: or_default("NRKPOD_MANIFEST_BASE_URL", DEFAULT_MANIFEST_BASE_URL),
        shows_path: PathBuf::from(or_default("NRKPOD_SHOWS_PATH", DEFAULT_SHOWS_PATH)),
        output_dir: PathBuf::from(or_default("NRKPOD_OUTPUT_DIR", ".")),
        log_level: or_default("NRKPOD_LOG_LEVEL", DEFAULT_LOG_LEVEL),
        requests_per_second,
        inter_show_delay_ms,
        request_timeout_secs,
        user_agent: or_default("NRKPOD_USER_AGENT", DEFAULT_USER_AGENT),
    };

    (config, invalid)
}

/// Value of `var`, or `default` when it is unset or unusable. Unusable
/// values are recorded in `invalid`.
fn number_or_default<F, T>(
    lookup: &F,
    invalid: &mut Vec<ConfigError>,
    var: &str,
    default: T,
    min: T,
) -> T
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
    T: FromStr + PartialOrd + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    let Ok(raw) = lookup(var) else {
        return default;
    };
    parse_number(var, &raw, min).unwrap_or_else(|e| {
        invalid.push(e);
        default
    })
}

/// Parses `raw` as the value of `var`, requiring at least `min`.
fn parse_number<T>(var: &str, raw: &str, min: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let value = raw.trim().parse::<T>().map_err(|e| invalid(e.to_string()))?;
    if value < min {
        return Err(invalid(format!("must be at least {min}")));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

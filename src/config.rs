//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).
//!
//! | Variable               | Default                       |
//! |------------------------|-------------------------------|
//! | `LISTEN_ADDR`          | `0.0.0.0:$PORT`               |
//! | `PORT`                 | `8000`                        |
//! | `AGGREGATOR_URL`       | `https://api.1inch.io/v4.0`   |
//! | `AGGREGATOR_API_KEY`   | unset                         |
//! | `REFERRER_ADDRESS`     | `$ADDRESS`, else unset        |
//! | `REQUEST_TIMEOUT_SECS` | `30`                          |
//! | `LOG_FORMAT`           | `text` (`json` for JSON logs) |

use std::net::SocketAddr;

use crate::aggregator::DEFAULT_AGGREGATOR_URL;

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8000`).
    pub listen_addr: SocketAddr,

    /// Aggregator base URL, without a trailing chain id.
    pub aggregator_url: String,

    /// Optional bearer token for the aggregator.
    pub aggregator_api_key: Option<String>,

    /// Integrator address credited with the swap fee.
    pub referrer_address: Option<String>,

    /// Seconds before an in-flight HTTP request is abandoned.
    pub request_timeout_secs: u64,

    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let listen_addr: SocketAddr = match var("LISTEN_ADDR") {
            Some(addr) => addr.parse()?,
            None => {
                let port: u16 = parse_or(var("PORT"), 8000);
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };

        let aggregator_url =
            var("AGGREGATOR_URL").unwrap_or_else(|| DEFAULT_AGGREGATOR_URL.to_string());
        let aggregator_api_key = var("AGGREGATOR_API_KEY");
        let referrer_address = var("REFERRER_ADDRESS").or_else(|| var("ADDRESS"));
        let request_timeout_secs = parse_or(var("REQUEST_TIMEOUT_SECS"), 30);
        let log_json = var("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json"));

        Ok(Self {
            listen_addr,
            aggregator_url,
            aggregator_api_key,
            referrer_address,
            request_timeout_secs,
            log_json,
        })
    }
}

/// Parses `value` as `T`, returning `default` on missing or invalid values.
fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

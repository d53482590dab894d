use std::time::Duration;

use axum::http::HeaderValue;
use projecthub_genai::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};
use projecthub_genai::GeminiConfig;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    InvalidNumber {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),
}

/// Which origins the CORS layer accepts.
#[derive(Debug, Clone)]
pub enum CorsOrigins {
    /// `CORS_ORIGINS=*`: any origin, without credentials.
    Any,
    /// An explicit allow-list.
    List(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum Postgres pool connections (default: `10`).
    pub db_max_connections: u32,
    /// Text generator settings.
    pub gemini: GeminiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                  |
    /// |----------------------------|--------------------------|
    /// | `HOST`                     | `0.0.0.0`                |
    /// | `PORT`                     | `3000`                   |
    /// | `CORS_ORIGINS`             | `*`                      |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                     |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`                     |
    /// | `GEMINI_API_KEY`           | unset                    |
    /// | `GEMINI_MODEL`             | `gemini-2.5-flash`       |
    /// | `GEMINI_API_BASE`          | Google v1beta endpoint   |
    /// | `GEMINI_TIMEOUT_SECS`      | `60`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = get("HOST", "0.0.0.0");
        let port = parse_number("PORT", "u16", &get("PORT", "3000"))?;
        let cors_origins = parse_cors_origins(&get("CORS_ORIGINS", "*"))?;
        let request_timeout_secs =
            parse_number("REQUEST_TIMEOUT_SECS", "u64", &get("REQUEST_TIMEOUT_SECS", "30"))?;
        let db_max_connections = parse_number(
            "DATABASE_MAX_CONNECTIONS",
            "u32",
            &get("DATABASE_MAX_CONNECTIONS", "10"),
        )?;
        let gemini_timeout_secs: u64 =
            parse_number("GEMINI_TIMEOUT_SECS", "u64", &get("GEMINI_TIMEOUT_SECS", "60"))?;

        let gemini = GeminiConfig {
            api_key: lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()),
            model: get("GEMINI_MODEL", DEFAULT_MODEL),
            api_base: get("GEMINI_API_BASE", DEFAULT_API_BASE),
            timeout: Duration::from_secs(gemini_timeout_secs),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            gemini,
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    expected: &'static str,
    value: &str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        expected,
        value: value.to_string(),
    })
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidCorsOrigin(o.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

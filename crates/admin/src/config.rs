//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! Every variable is optional; defaults target a local development stack.
//!
//! ## Backend services
//! - `ORDER_SERVICE_URL` - Order service base URL (default: `http://localhost:8081`)
//! - `PRODUCT_SERVICE_URL` - Product service base URL (default: `http://localhost:8082`)
//! - `CUSTOMER_SERVICE_URL` - Customer service base URL (default: `http://localhost:8083`)
//! - `ORDER_SERVICE_PATH` - Order collection path (default: `/orders`)
//! - `PRODUCT_SERVICE_PATH` - Product collection path (default: `/products`)
//! - `CUSTOMER_SERVICE_PATH` - Customer collection path (default: `/customers`)
//! - `SERVICE_API_TOKEN` - Bearer token sent to every backend (issued elsewhere)
//! - `SERVICE_CONNECT_TIMEOUT_SECS` - TCP connect timeout for backend calls
//!
//! ## Dashboard host
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `ADMIN_BASE_URL` - Public URL for the dashboard (default: `http://localhost:3001`)
//! - `ADMIN_LOGIN_PATH` - Authentication entry point (default: `/auth/login`)
//!
//! ## Error tracking
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 1.0)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use backoffice_core::ResourceDomain;
use secrecy::SecretString;
use thiserror::Error;
use url::Url;

use crate::api::EndpointDescriptor;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;
const DEFAULT_LOGIN_PATH: &str = "/auth/login";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "put-your",
];

/// Configuration errors that can occur during loading.
///
/// All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
    #[error("No endpoint configured for the {0} service")]
    MissingEndpoint(ResourceDomain),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Dashboard application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the dashboard
    pub base_url: String,
    /// Path of the authentication entry point unauthorized views redirect to
    pub login_path: String,
    /// Backend service endpoints and credentials
    pub services: ServicesConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Backend service configuration.
///
/// Implements `Debug` manually to redact the service token.
#[derive(Clone)]
pub struct ServicesConfig {
    /// Endpoint per resource domain.
    pub endpoints: Vec<(ResourceDomain, EndpointDescriptor)>,
    /// Bearer token attached to every backend request.
    pub api_token: Option<SecretString>,
    /// TCP connect timeout; `None` keeps the transport default.
    pub connect_timeout: Option<Duration>,
}

impl std::fmt::Debug for ServicesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServicesConfig")
            .field("endpoints", &self.endpoints)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ADMIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ADMIN_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("ADMIN_BASE_URL", "http://localhost:3001");
        let login_path = parse_path(
            "ADMIN_LOGIN_PATH",
            &get_env_or_default("ADMIN_LOGIN_PATH", DEFAULT_LOGIN_PATH),
        )?;

        let services = ServicesConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            host,
            port,
            base_url,
            login_path,
            services,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the dashboard is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl ServicesConfig {
    /// Load backend endpoints from environment variables.
    ///
    /// Does not read `.env`; callers load it once before calling this.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` for malformed URLs, paths, or
    /// timeouts.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(get_optional_env)
    }

    /// Build from a variable lookup; unset or blank values fall back to
    /// `http://localhost:<port>` and the domain's default path.
    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoints = ResourceDomain::ALL
            .into_iter()
            .map(|domain| endpoint_from_vars(domain, &lookup).map(|endpoint| (domain, endpoint)))
            .collect::<Result<Vec<_>, _>>()?;

        let api_token = lookup("SERVICE_API_TOKEN").map(|token| {
            // Token is issued elsewhere; a weak value is worth a warning, not a refusal
            if let Err(e) = validate_secret_strength(&token, "SERVICE_API_TOKEN") {
                tracing::warn!("SERVICE_API_TOKEN validation warning: {e}");
            }
            SecretString::from(token)
        });

        let connect_timeout = lookup("SERVICE_CONNECT_TIMEOUT_SECS")
            .map(|raw| {
                raw.parse::<u64>().map(Duration::from_secs).map_err(|e| {
                    ConfigError::InvalidEnvVar(
                        "SERVICE_CONNECT_TIMEOUT_SECS".to_string(),
                        e.to_string(),
                    )
                })
            })
            .transpose()?;

        Ok(Self {
            endpoints,
            api_token,
            connect_timeout,
        })
    }

    /// Build a configuration from fixed base URLs with default paths.
    ///
    /// Used by tests and tools that point every domain at known hosts.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a base URL does not parse.
    pub fn from_base_urls<'a>(
        base_urls: impl IntoIterator<Item = (ResourceDomain, &'a str)>,
    ) -> Result<Self, ConfigError> {
        let endpoints = base_urls
            .into_iter()
            .map(|(domain, raw)| {
                Ok((
                    domain,
                    EndpointDescriptor::new(
                        parse_base_url(&url_var(domain), raw)?,
                        domain.default_path_prefix(),
                    ),
                ))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            endpoints,
            api_token: None,
            connect_timeout: None,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Fallback port per domain when its URL variable is unset.
const fn default_port(domain: ResourceDomain) -> u16 {
    match domain {
        ResourceDomain::Order => 8081,
        ResourceDomain::Product => 8082,
        ResourceDomain::Customer => 8083,
    }
}

fn url_var(domain: ResourceDomain) -> String {
    format!("{}_SERVICE_URL", domain.as_str().to_uppercase())
}

fn path_var(domain: ResourceDomain) -> String {
    format!("{}_SERVICE_PATH", domain.as_str().to_uppercase())
}

fn endpoint_from_vars(
    domain: ResourceDomain,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<EndpointDescriptor, ConfigError> {
    let url_key = url_var(domain);
    let raw_url = lookup(&url_key)
        .unwrap_or_else(|| format!("http://localhost:{}", default_port(domain)));

    let path_key = path_var(domain);
    let raw_path = lookup(&path_key).unwrap_or_else(|| domain.default_path_prefix().to_string());

    Ok(EndpointDescriptor::new(
        parse_base_url(&url_key, &raw_url)?,
        parse_path(&path_key, &raw_path)?,
    ))
}

/// Parse a service base URL, accepting only http(s) without a query or
/// fragment.
fn parse_base_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "URL must include a host".to_string(),
        ));
    }
    // Paths are appended to the base URL as text
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "base URL must not contain a query or fragment".to_string(),
        ));
    }

    Ok(url)
}

/// Normalize a path to start with `/` and not end with one.
fn parse_path(key: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.contains(char::is_whitespace) || trimmed.contains(['?', '#']) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "path must not contain whitespace, a query, or a fragment".to_string(),
        ));
    }
    if trimmed.starts_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("/{trimmed}"))
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    if let Some(pattern) = PLACEHOLDER_PATTERNS
        .iter()
        .find(|pattern| lower.contains(*pattern))
    {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("appears to be a placeholder (contains '{pattern}')"),
        ));
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
            ),
        ));
    }

    Ok(())
}

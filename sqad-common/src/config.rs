//! Configuration loading and resolution
//!
//! Settings resolve with the following priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`SQAD_*`)
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Missing or unreadable config files never abort startup; the resolver
//! warns and falls through to the next tier.

use crate::{Error, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::warn;

/// Default listen address for the dashboard
pub const DEFAULT_LISTEN: &str = "127.0.0.1:5740";

/// Default base URL of the evaluation backend
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5800";

/// Default per-request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved dashboard configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Address the HTTP server binds to
    pub listen_addr: SocketAddr,
    /// Base URL of the evaluation backend (no trailing slash)
    pub backend_url: String,
    /// Bearer token for privileged backend operations (project deletion)
    pub admin_token: Option<String>,
    /// Per-request timeout applied to the backend HTTP client
    pub request_timeout_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN.parse().expect("default listen address"),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            admin_token: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// TOML config file schema (`~/.config/sqad/sqad.toml`)
///
/// All fields are optional; absent fields fall through to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub listen: Option<String>,
    pub backend_url: Option<String>,
    pub admin_token: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl TomlConfig {
    /// Parse a TOML config file, or return defaults if it cannot be read
    pub fn load(path: &std::path::Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Config file {} not readable ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Config file {} invalid ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Per-field overrides supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub listen: Option<String>,
    pub backend_url: Option<String>,
    pub admin_token: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Explicit config file path (skips platform discovery)
    pub config_file: Option<PathBuf>,
}

/// Locate the platform config file, if one exists
pub fn discover_config_file() -> Option<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/sqad/sqad.toml first, then /etc/sqad/sqad.toml
        if let Some(path) = dirs::config_dir().map(|d| d.join("sqad").join("sqad.toml")) {
            if path.exists() {
                return Some(path);
            }
        }
        let system_config = PathBuf::from("/etc/sqad/sqad.toml");
        if system_config.exists() {
            return Some(system_config);
        }
        None
    } else {
        dirs::config_dir()
            .map(|d| d.join("sqad").join("sqad.toml"))
            .filter(|p| p.exists())
    }
}

/// Resolve the full dashboard configuration
///
/// Applies the CLI → ENV → TOML → default priority per field.
pub fn resolve(overrides: ConfigOverrides) -> Result<DashboardConfig> {
    let toml_config = overrides
        .config_file
        .clone()
        .or_else(discover_config_file)
        .map(|path| TomlConfig::load(&path))
        .unwrap_or_default();

    let listen = resolve_field(
        overrides.listen,
        std::env::var("SQAD_LISTEN").ok(),
        toml_config.listen,
        DEFAULT_LISTEN.to_string(),
    );
    let listen_addr: SocketAddr = listen
        .parse()
        .map_err(|e| Error::Config(format!("Invalid listen address '{}': {}", listen, e)))?;

    let backend_url = resolve_field(
        overrides.backend_url,
        std::env::var("SQAD_BACKEND_URL").ok(),
        toml_config.backend_url,
        DEFAULT_BACKEND_URL.to_string(),
    );
    let backend_url = backend_url.trim_end_matches('/').to_string();
    if !backend_url.starts_with("http://") && !backend_url.starts_with("https://") {
        return Err(Error::Config(format!(
            "Invalid backend URL '{}': must start with http:// or https://",
            backend_url
        )));
    }

    let admin_token = overrides
        .admin_token
        .or_else(|| std::env::var("SQAD_ADMIN_TOKEN").ok())
        .or(toml_config.admin_token)
        .filter(|token| !token.trim().is_empty());

    let request_timeout_secs = overrides
        .timeout_secs
        .or_else(|| {
            std::env::var("SQAD_TIMEOUT_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
        })
        .or(toml_config.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    if request_timeout_secs == 0 {
        return Err(Error::Config("Request timeout must be at least 1 second".to_string()));
    }

    Ok(DashboardConfig {
        listen_addr,
        backend_url,
        admin_token,
        request_timeout_secs,
    })
}

fn resolve_field(
    cli: Option<String>,
    env: Option<String>,
    toml: Option<String>,
    default: String,
) -> String {
    cli.or(env).or(toml).unwrap_or(default)
}

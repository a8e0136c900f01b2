//! Service settings loaded via OrthoConfig.
//!
//! Values come from command-line flags, `DEPARTMENT_STATS_*` environment
//! variables, or a configuration file, with defaults applied by the accessor
//! methods when a value is absent.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_UPSTREAM_URL: &str = "https://dummyjson.com";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("invalid host `{host}`: {source}")]
    InvalidHost {
        /// Offending value.
        host: String,
        /// Underlying parse failure.
        #[source]
        source: std::net::AddrParseError,
    },
    /// The configured upstream URL could not be parsed.
    #[error("invalid upstream URL `{url}`: {source}")]
    InvalidUpstreamUrl {
        /// Offending value.
        url: String,
        /// Underlying parse failure.
        #[source]
        source: url::ParseError,
    },
    /// The upstream URL cannot carry a path, e.g. `mailto:`.
    #[error("upstream URL `{url}` cannot be used as a base")]
    UpstreamNotABase {
        /// Offending value.
        url: String,
    },
}

/// Runtime configuration for the HTTP service and the aggregation CLI.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DEPARTMENT_STATS")]
pub struct AppSettings {
    /// Interface address the HTTP server binds to.
    pub host: Option<String>,
    /// TCP port the HTTP server listens on.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// Base URL of the users API; `/users` is appended.
    pub upstream_url: Option<String>,
    /// Per-request timeout for upstream calls, in milliseconds.
    #[ortho_config(default = 5000)]
    pub upstream_timeout_ms: u64,
    /// Page size requested from the users API. The upstream default applies
    /// when unset.
    pub page_size: Option<u32>,
}

impl AppSettings {
    /// Socket address for the HTTP listener.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse().map_err(|source| SettingsError::InvalidHost {
            host: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Base URL of the users API.
    ///
    /// # Errors
    /// Returns an error when the configured value is not a usable base URL.
    pub fn upstream_base(&self) -> Result<Url, SettingsError> {
        let raw = self.upstream_url.as_deref().unwrap_or(DEFAULT_UPSTREAM_URL);
        let url = Url::parse(raw).map_err(|source| SettingsError::InvalidUpstreamUrl {
            url: raw.to_owned(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(SettingsError::UpstreamNotABase {
                url: raw.to_owned(),
            });
        }
        Ok(url)
    }

    /// Timeout applied to each upstream request.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }

    /// Requested page size, if one was configured.
    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }
}

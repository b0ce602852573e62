//! Server configuration object and remote-write settings.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::outbound::persistence::DbPool;

const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 2_000;
/// Floor on the remote call timeout; smaller configured values are clamped.
const MIN_REMOTE_TIMEOUT_MS: u64 = 500;

/// Configuration for routing company writes through the remote delegate,
/// loaded from `REMOTE_WRITE_*` environment variables.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REMOTE_WRITE")]
pub struct RemoteWriteSettings {
    /// Feature flag enabling the remote write path.
    #[ortho_config(default = false)]
    pub enabled: bool,
    /// Remote delegate endpoint.
    pub url: Option<String>,
    /// Remote call timeout in milliseconds (floor 500, default 2000).
    pub timeout_ms: Option<u64>,
}

impl Default for RemoteWriteSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            url: None,
            timeout_ms: None,
        }
    }
}

impl RemoteWriteSettings {
    /// The remote endpoint, when the feature is enabled and the URL is
    /// present and well formed. A malformed URL disables the remote path
    /// rather than failing startup, with a warning.
    pub fn endpoint(&self) -> Option<Url> {
        if !self.enabled {
            return None;
        }
        let raw = self.url.as_deref()?;
        if raw.is_empty() {
            return None;
        }
        match Url::parse(raw) {
            Ok(url) => Some(url),
            Err(error) => {
                warn!(url = raw, %error, "remote write URL is invalid; staying local");
                None
            }
        }
    }

    /// Remote call timeout with the default applied and the floor
    /// enforced.
    pub fn timeout(&self) -> Duration {
        let configured = self.timeout_ms.unwrap_or(DEFAULT_REMOTE_TIMEOUT_MS);
        Duration::from_millis(configured.max(MIN_REMOTE_TIMEOUT_MS))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) remote_write: RemoteWriteSettings,
}

impl ServerConfig {
    /// Construct a server configuration listening on the given address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            remote_write: RemoteWriteSettings::default(),
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// Without a pool the server falls back to fixture ports, which is
    /// only useful for smoke tests.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Attach remote-write routing settings.
    #[must_use]
    pub fn with_remote_write(mut self, settings: RemoteWriteSettings) -> Self {
        self.remote_write = settings;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for remote-write settings parsing and clamping.

    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    fn load_from_empty_args() -> RemoteWriteSettings {
        RemoteWriteSettings::load_from_iter([OsString::from("backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_keep_the_remote_path_disabled() {
        let _guard = lock_env([
            ("REMOTE_WRITE_ENABLED", None::<String>),
            ("REMOTE_WRITE_URL", None::<String>),
            ("REMOTE_WRITE_TIMEOUT_MS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.enabled);
        assert!(settings.endpoint().is_none());
        assert_eq!(settings.timeout(), Duration::from_millis(2_000));
    }

    #[rstest]
    fn environment_enables_the_remote_path() {
        let _guard = lock_env([
            ("REMOTE_WRITE_ENABLED", Some("true".to_owned())),
            (
                "REMOTE_WRITE_URL",
                Some("https://writer.example/companies".to_owned()),
            ),
            ("REMOTE_WRITE_TIMEOUT_MS", Some("1500".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.enabled);
        assert_eq!(
            settings.endpoint().expect("endpoint configured").as_str(),
            "https://writer.example/companies"
        );
        assert_eq!(settings.timeout(), Duration::from_millis(1_500));
    }

    #[rstest]
    fn flag_without_url_stays_local() {
        let settings = RemoteWriteSettings {
            enabled: true,
            url: None,
            timeout_ms: None,
        };
        assert!(settings.endpoint().is_none());
    }

    #[rstest]
    fn url_without_flag_stays_local() {
        let settings = RemoteWriteSettings {
            enabled: false,
            url: Some("https://writer.example/companies".to_owned()),
            timeout_ms: None,
        };
        assert!(settings.endpoint().is_none());
    }

    #[rstest]
    fn malformed_url_stays_local() {
        let settings = RemoteWriteSettings {
            enabled: true,
            url: Some("not a url".to_owned()),
            timeout_ms: None,
        };
        assert!(settings.endpoint().is_none());
    }

    #[rstest]
    #[case(None, 2_000)]
    #[case(Some(100), 500)]
    #[case(Some(500), 500)]
    #[case(Some(3_000), 3_000)]
    fn timeout_applies_default_and_floor(#[case] configured: Option<u64>, #[case] expected: u64) {
        let settings = RemoteWriteSettings {
            enabled: true,
            url: None,
            timeout_ms: configured,
        };
        assert_eq!(settings.timeout(), Duration::from_millis(expected));
    }
}

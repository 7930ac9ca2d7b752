use shared_types::{AppConfig, FeatureFlags};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::OnceLock;

static FLAGS: OnceLock<FeatureFlags> = OnceLock::new();

/// Path to the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Read the config file at `path`, falling back to all-off flags when the
/// file is missing or unparseable.
pub fn read_feature_flags(path: &Path) -> FeatureFlags {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
            Ok(config) => config.features,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "config parse failed, defaulting all flags off");
                FeatureFlags::default()
            }
        },
        Err(e) => {
            tracing::info!(path = %path.display(), error = %e, "config not found, defaulting all flags off");
            FeatureFlags::default()
        }
    }
}

/// Parse `config.toml` and store the flags in the global `OnceLock`.
/// Later calls return the flags read by the first one.
pub fn load_feature_flags() -> &'static FeatureFlags {
    FLAGS.get_or_init(|| {
        let flags = read_feature_flags(Path::new(CONFIG_PATH));
        tracing::info!(?flags, "feature flags loaded");
        flags
    })
}

/// Listener and request-size settings taken from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub bind_addr: SocketAddr,
    pub max_upload_bytes: usize,
}

impl ServerSettings {
    /// Read `BIND_ADDR` and `MAX_UPLOAD_BYTES`. Unset or malformed values
    /// fall back to the defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_values(
            std::env::var("BIND_ADDR").ok().as_deref(),
            std::env::var("MAX_UPLOAD_BYTES").ok().as_deref(),
        )
    }

    fn from_values(bind_addr: Option<&str>, max_upload_bytes: Option<&str>) -> Self {
        let default_addr: SocketAddr = DEFAULT_BIND_ADDR
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8000)));

        let bind_addr = match bind_addr.map(str::parse::<SocketAddr>) {
            Some(Ok(addr)) => addr,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "invalid BIND_ADDR, using {DEFAULT_BIND_ADDR}");
                default_addr
            }
            None => default_addr,
        };

        let max_upload_bytes = max_upload_bytes
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Self {
            bind_addr,
            max_upload_bytes,
        }
    }
}

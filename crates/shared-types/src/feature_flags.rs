use serde::{Deserialize, Serialize};

/// Optional integrations, read from the `[features]` table of `config.toml`.
///
/// Anything absent from the file is off.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FeatureFlags {
    /// Export traces and logs over OTLP.
    pub telemetry: bool,
    /// Serve the OpenAPI reference at `/docs`.
    pub docs: bool,
}

/// Shape of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub features: FeatureFlags,
}

//! Application configuration, built from the parsed command line.

#[cfg(feature = "http")]
use std::time::Duration;

#[cfg(feature = "http")]
use quill_infra::HttpClientConfig;

use crate::cli::Cli;
use crate::telemetry::TelemetryConfig;

/// Which backend the ports are wired to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    #[cfg(feature = "http")]
    Http(HttpClientConfig),
    /// In-process backend seeded with demo data.
    InMemory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Build the configuration. Backend settings come from `cli` (flags or
    /// their `QUILL_*` variables), logging from the environment.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            backend: Self::backend(cli),
            telemetry: TelemetryConfig::from_env(),
        }
    }

    #[cfg(feature = "http")]
    fn backend(cli: &Cli) -> BackendConfig {
        if cli.offline {
            return BackendConfig::InMemory;
        }
        let timeout = cli
            .timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        BackendConfig::Http(HttpClientConfig {
            base_url: cli.api_base_url.clone(),
            timeout,
        })
    }

    #[cfg(not(feature = "http"))]
    fn backend(_cli: &Cli) -> BackendConfig {
        BackendConfig::InMemory
    }
}

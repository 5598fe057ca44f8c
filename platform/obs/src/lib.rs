//! Tracing subscriber setup with an optional OTLP span exporter.

use anyhow::{Result, anyhow};
use once_cell::sync::OnceCell;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,tower_http=warn,sqlx=warn";

static INIT: OnceCell<()> = OnceCell::new();

#[derive(Clone, Debug)]
pub struct ObsConfig {
    pub service_name: &'static str,
    /// Falls back to `RUST_LOG`, then to `info,tower_http=warn,sqlx=warn`.
    pub env_filter: Option<String>,
    /// Falls back to `OTLP_ENDPOINT`; no exporter when neither is set.
    pub otlp_endpoint: Option<String>,
}

impl Default for ObsConfig {
    fn default() -> Self {
        Self {
            service_name: "employee-service",
            env_filter: None,
            otlp_endpoint: None,
        }
    }
}

impl ObsConfig {
    fn resolved_filter(&self) -> String {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string())
    }

    fn resolved_endpoint(&self) -> Option<String> {
        self.otlp_endpoint
            .clone()
            .or_else(|| std::env::var("OTLP_ENDPOINT").ok())
            .filter(|endpoint| !endpoint.trim().is_empty())
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_tracing(config: ObsConfig) -> Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_new(config.resolved_filter())?;
    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false));

    match config.resolved_endpoint() {
        Some(endpoint) => {
            let provider = otlp_provider(config.service_name, endpoint)?;
            let tracer = provider.tracer(config.service_name);
            opentelemetry::global::set_tracer_provider(provider);
            registry
                .with(tracing_opentelemetry::layer().with_tracer(tracer))
                .try_init()?;
        }
        None => registry.try_init()?,
    }

    INIT.set(())
        .map_err(|_| anyhow!("tracing already initialized"))?;
    Ok(())
}

fn otlp_provider(service_name: &'static str, endpoint: String) -> Result<SdkTracerProvider> {
    let exporter = SpanExporter::builder()
        .with_http()
        .with_protocol(Protocol::HttpBinary)
        .with_endpoint(endpoint)
        .build()?;
    let resource = Resource::builder().with_service_name(service_name).build();
    Ok(SdkTracerProvider::builder()
        .with_resource(resource)
        .with_batch_exporter(exporter)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let config = ObsConfig {
            env_filter: Some("debug".into()),
            ..ObsConfig::default()
        };
        assert_eq!(config.resolved_filter(), "debug");
    }

    #[test]
    fn blank_endpoint_disables_exporter() {
        let config = ObsConfig {
            otlp_endpoint: Some("   ".into()),
            ..ObsConfig::default()
        };
        assert!(config.resolved_endpoint().is_none());
    }
}

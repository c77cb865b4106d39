//! Tracing subscriber setup: formatted logs plus optional OTLP export.

use anyhow::{Context, Result};
use opentelemetry::{KeyValue, trace::TracerProvider as _};
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, runtime::Tokio, trace::TracerProvider};
use std::{env, time::Duration};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt};

/// Spans are exported only when this variable names a collector.
pub const OTLP_ENDPOINT_ENV: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

/// Emit JSON log lines instead of the human readable format.
pub const LOG_JSON_ENV: &str = "DOORMAN_LOG_JSON";

/// Install the global tracing subscriber.
///
/// `verbosity` is the CLI level; `RUST_LOG` directives still apply on top.
///
/// # Errors
/// Returns an error if the OTLP exporter cannot be built or a global
/// subscriber is already installed.
pub fn init(verbosity: Option<tracing::Level>) -> Result<()> {
    let level = verbosity.unwrap_or(tracing::Level::ERROR);

    // RUST_LOG=
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = if env::var_os(LOG_JSON_ENV).is_some() {
        fmt::layer()
            .json()
            .with_file(true)
            .with_line_number(true)
            .with_thread_ids(true)
            .with_target(false)
            .boxed()
    } else {
        fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .with_thread_ids(true)
            .with_target(false)
            .boxed()
    };

    let mut layers = vec![fmt_layer];
    if let Ok(endpoint) = env::var(OTLP_ENDPOINT_ENV) {
        if !endpoint.trim().is_empty() {
            layers.push(otlp_layer(endpoint)?);
        }
    }

    let subscriber = Registry::default().with(layers).with(env_filter);

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

fn otlp_layer(endpoint: String) -> Result<Box<dyn Layer<Registry> + Send + Sync>> {
    let exporter = SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .with_timeout(Duration::from_secs(3))
        .build()
        .context("Failed to build OTLP span exporter")?;

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, Tokio)
        .with_resource(Resource::new(vec![
            KeyValue::new("service.name", env!("CARGO_PKG_NAME")),
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        ]))
        .build();

    let tracer = provider.tracer(env!("CARGO_PKG_NAME"));
    opentelemetry::global::set_tracer_provider(provider);

    Ok(tracing_opentelemetry::layer().with_tracer(tracer).boxed())
}

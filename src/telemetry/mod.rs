//! Logging and optional OpenTelemetry trace export.
//!
//! Diagnostics go to stderr so they never mix with the command's own output.

mod config;
mod shutdown;

pub use config::{LogFormat, TelemetryConfig};
pub use shutdown::TelemetryGuard;

use crate::error::ConvertError;
use opentelemetry::KeyValue;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::{WithExportConfig, WithHttpConfig};
use opentelemetry_sdk::trace::SdkTracerProvider;
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_FILTER: &str = "postman2playwright=warn";
const EXPORT_TIMEOUT: Duration = Duration::from_secs(5);

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

pub fn init_telemetry() -> crate::Result<TelemetryGuard> {
    let config = TelemetryConfig::from_env();

    if config.enabled {
        match build_provider(&config) {
            Ok(provider) => {
                let tracer = provider.tracer("postman2playwright");
                opentelemetry::global::set_tracer_provider(provider.clone());

                tracing_subscriber::registry()
                    .with(console_layer(config.log_format))
                    .with(tracing_opentelemetry::layer().with_tracer(tracer))
                    .with(env_filter())
                    .init();

                tracing::info!(endpoint = %config.endpoint, "OpenTelemetry export enabled");
                return Ok(TelemetryGuard::new(Some(provider)));
            }
            Err(e) => {
                eprintln!(
                    "Failed to initialize OpenTelemetry: {}. Falling back to console-only logging.",
                    e
                );
            }
        }
    }

    tracing_subscriber::registry()
        .with(console_layer(config.log_format))
        .with(env_filter())
        .init();

    tracing::debug!("Tracing initialized (console only)");
    Ok(TelemetryGuard::default())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn console_layer(format: LogFormat) -> BoxedLayer {
    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

fn build_provider(config: &TelemetryConfig) -> crate::Result<SdkTracerProvider> {
    let client = reqwest::Client::builder()
        .timeout(EXPORT_TIMEOUT)
        .build()
        .map_err(|e| ConvertError::TelemetryError(format!("Failed to build HTTP client: {}", e)))?;

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_http()
        .with_http_client(client)
        .with_endpoint(&config.endpoint)
        .with_protocol(opentelemetry_otlp::Protocol::HttpBinary)
        .with_timeout(EXPORT_TIMEOUT)
        .with_headers(config.headers.clone())
        .build()
        .map_err(|e| {
            ConvertError::TelemetryError(format!("Failed to build OTLP exporter: {}", e))
        })?;

    let resource = opentelemetry_sdk::Resource::builder_empty()
        .with_service_name(config.service_name.clone())
        .with_attributes([KeyValue::new("service.version", env!("CARGO_PKG_VERSION"))])
        .build();

    Ok(SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource)
        .build())
}

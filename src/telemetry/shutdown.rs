use opentelemetry_sdk::trace::SdkTracerProvider;

/// Flushes exported spans when dropped at the end of `main`
#[derive(Default)]
pub struct TelemetryGuard {
    provider: Option<SdkTracerProvider>,
}

impl TelemetryGuard {
    pub fn new(provider: Option<SdkTracerProvider>) -> Self {
        Self { provider }
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            tracing::debug!("Shutting down telemetry...");
            if let Err(e) = provider.shutdown() {
                eprintln!("Failed to flush telemetry: {}", e);
            }
        }
    }
}

//! Logging and tracing bootstrap for the bookshelf service.

use bookshelf_kernel::settings::{LogFormat, TelemetrySettings};

/// Initialize the tracing/logging pipeline according to settings.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init(settings: &TelemetrySettings) {
    let initialized = match settings.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt().try_init().is_ok(),
        LogFormat::Json => tracing_subscriber::fmt().json().try_init().is_ok(),
    };

    if initialized {
        tracing::info!(
            target: "bookshelf-telemetry",
            format = ?settings.log_format,
            "telemetry initialized"
        );
    }
}

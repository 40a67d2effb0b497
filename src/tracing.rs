//! Tracing initialization.

use crate::config::LogFormat;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

static INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times.
///
/// Logs always go to stderr; stdout carries the MCP protocol.
pub fn init(format: LogFormat) {
    INIT.call_once(|| {
        let is_test =
            std::env::var("NEXTEST").is_ok() || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let filter = EnvFilter::from_default_env().add_directive(
            if is_test {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            }
            .into(),
        );

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE);

        if is_test {
            let _ = builder.compact().with_test_writer().try_init();
            return;
        }

        let result = match format {
            LogFormat::Compact => builder.compact().with_writer(std::io::stderr).try_init(),
            LogFormat::Json => builder.json().with_writer(std::io::stderr).try_init(),
        };
        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e)
        }
    });
}

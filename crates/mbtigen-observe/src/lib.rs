//! Observability setup for mbtigen: structured logging and optional
//! OpenTelemetry span export.

pub mod tracing_setup;

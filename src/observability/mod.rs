//! Tracing for the plugin.
//!
//! The plugin has no stderr worth reading inside Zellij, so spans and events
//! go to an OTLP JSON file instead:
//!
//! ```text
//! tracing → tracing-opentelemetry → FileSpanExporter → popcorn-otlp.json
//! ```
//!
//! The file lives in `~/.local/share/zellij/popcorn/` (seen from the sandbox
//! as `/host/.local/share/zellij/popcorn/`), rotates at 5 MB and keeps two
//! timestamped backups. The level comes from the `trace_level` plugin option
//! and defaults to `info`.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};

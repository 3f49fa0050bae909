//! Tracer provider that exports finished spans to a local file.

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes each exported batch as one OTLP JSON line.
struct FileSpanExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    stopped: AtomicBool,
}

impl FileSpanExporter {
    const fn new(writer: FileWriter, formatter: SpanFormatter) -> Self {
        Self {
            writer,
            formatter,
            stopped: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.stopped.load(Ordering::SeqCst) {
            return Err(TraceError::from("trace exporter already shut down"));
        }

        let line = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    // The resource is fixed when the formatter is built.
    fn set_resource(&mut self, _resource: &Resource) {}
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("formatter", &self.formatter)
            .field("stopped", &self.stopped)
            .finish()
    }
}

/// Builds a provider whose spans land in `file_path` as they end.
///
/// Spans are exported one at a time with the simple processor; the plugin
/// runs single-threaded inside the WASM host, so there is no batching
/// thread to hand them to.
pub fn create_tracer_provider(
    file_path: PathBuf,
    resource: Resource,
    scope: &'static str,
) -> TracerProvider {
    let exporter = FileSpanExporter::new(
        FileWriter::new(file_path),
        SpanFormatter::new(resource.clone(), scope),
    );

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer as _, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn ended_span_is_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("popcorn-otlp.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "popcorn")]);

        let provider = create_tracer_provider(path.clone(), resource, "popcorn");
        provider.tracer("popcorn").in_span("search", |_cx| {});

        let contents = std::fs::read_to_string(&path).unwrap();
        let document: serde_json::Value =
            serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        let span = &document["resourceSpans"][0]["scopeSpans"][0]["spans"][0];
        assert_eq!(span["name"], "search");
    }
}

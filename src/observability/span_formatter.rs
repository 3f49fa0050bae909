//! OTLP JSON encoding of finished spans.
//!
//! Each exported batch becomes one JSON document in the shape of an OTLP
//! `ExportTraceServiceRequest`, so the trace file can be replayed into any
//! OTLP-compatible collector.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{SystemTime, UNIX_EPOCH};

/// Encodes span batches for one resource and instrumentation scope.
pub struct SpanFormatter {
    resource: Resource,
    scope: &'static str,
}

impl SpanFormatter {
    pub const fn new(resource: Resource, scope: &'static str) -> Self {
        Self { resource, scope }
    }

    /// Encodes `batch` as a `resourceSpans` document.
    ///
    /// ```json
    /// {"resourceSpans":[{"resource":{"attributes":[...]},
    ///   "scopeSpans":[{"scope":{"name":"popcorn"},"spans":[...]}]}]}
    /// ```
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attributes: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| json!({ "key": key.as_str(), "value": attribute_value(value) }))
            .collect();

        let spans: Vec<JsonValue> = batch.iter().map(format_span).collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attributes },
                "scopeSpans": [{
                    "scope": {
                        "name": self.scope,
                        "version": env!("CARGO_PKG_VERSION"),
                    },
                    "spans": spans,
                }],
            }],
        })
    }
}

fn format_span(span: &SpanData) -> JsonValue {
    let (status_code, status_message) = status(&span.status);
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": span.events.iter().map(event).collect::<Vec<_>>(),
        "links": span.links.iter().map(link).collect::<Vec<_>>(),
        "status": { "code": status_code, "message": status_message },
    })
}

/// OTLP encodes 64-bit nanosecond timestamps as decimal strings.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos())
        .to_string()
}

const fn kind(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| json!({ "key": kv.key.as_str(), "value": attribute_value(&kv.value) }))
        .collect()
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) => json!({ "stringValue": value.to_string() }),
    }
}

fn event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": attributes(&event.attributes),
    })
}

fn link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": attributes(&link.attributes),
    })
}

fn status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").field("scope", &self.scope).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "popcorn")]);
        let document = SpanFormatter::new(resource, "popcorn").format_batch(&[]);

        let resource_spans = &document["resourceSpans"][0];
        let attributes = resource_spans["resource"]["attributes"].as_array().unwrap();
        assert!(attributes.iter().any(|a| {
            a["key"] == "service.name" && a["value"]["stringValue"] == "popcorn"
        }));
        assert_eq!(resource_spans["scopeSpans"][0]["scope"]["name"], "popcorn");
        assert_eq!(resource_spans["scopeSpans"][0]["spans"], json!([]));
    }

    #[test]
    fn integers_are_encoded_as_strings() {
        assert_eq!(attribute_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(attribute_value(&Value::Bool(true)), json!({ "boolValue": true }));
    }

    #[test]
    fn status_codes_follow_otlp() {
        assert_eq!(status(&Status::Unset).0, 0);
        assert_eq!(status(&Status::error("boom")), (2, "boom".to_string()));
    }
}

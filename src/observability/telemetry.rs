//! OpenTelemetry span export.
//!
//! Spans created with `tracing::info_span!` are bridged into OpenTelemetry by
//! `tracing-opentelemetry` and written to stdout by the batch exporter.
//! Events inside a span become span events.

use opentelemetry::propagation::TextMapCompositePropagator;
use opentelemetry_sdk::propagation::{BaggagePropagator, TraceContextPropagator};
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;

/// Service and tracer name reported on every span.
pub const SERVICE_NAME: &str = "echo-server";

/// Build a tracer provider that batches spans to stdout.
pub fn init_tracer() -> SdkTracerProvider {
    let exporter = opentelemetry_stdout::SpanExporter::default();

    SdkTracerProvider::builder()
        .with_resource(resource())
        .with_batch_exporter(exporter)
        .build()
}

/// Install W3C trace-context and baggage propagation.
pub fn init_propagator() {
    opentelemetry::global::set_text_map_propagator(TextMapCompositePropagator::new(vec![
        Box::new(TraceContextPropagator::new()),
        Box::new(BaggagePropagator::new()),
    ]));
}

fn resource() -> Resource {
    Resource::builder()
        .with_service_name(SERVICE_NAME)
        .build()
}

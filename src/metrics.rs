use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> PrometheusHandle {
    let builder = PrometheusBuilder::new();

    let handle = builder
        .install_recorder()
        .expect("Failed to install Prometheus recorder");

    init_metric_descriptions();

    handle
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "advisor_requests_total",
        "Total number of API requests by endpoint"
    );
    describe_histogram!(
        "advisor_request_duration_seconds",
        "Request duration in seconds"
    );
    describe_counter!(
        "advisor_provider_calls_total",
        "Calls to the generative provider by operation and outcome"
    );
    describe_counter!(
        "advisor_errors_total",
        "Total number of errors by endpoint and type"
    );
    describe_gauge!(
        "advisor_info",
        "Advisor version and build information"
    );

    gauge!("advisor_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a request
pub fn record_request(endpoint: &str) {
    counter!(
        "advisor_requests_total",
        "endpoint" => endpoint.to_string(),
    )
    .increment(1);
}

/// Record request duration
pub fn record_duration(endpoint: &str, duration: Duration) {
    histogram!(
        "advisor_request_duration_seconds",
        "endpoint" => endpoint.to_string(),
    )
    .record(duration.as_secs_f64());
}

/// Record a call to the generative provider
pub fn record_provider_call(operation: &str, status: &str) {
    counter!(
        "advisor_provider_calls_total",
        "operation" => operation.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
}

/// Record an error
pub fn record_error(endpoint: &str, error_type: &str) {
    counter!(
        "advisor_errors_total",
        "endpoint" => endpoint.to_string(),
        "error_type" => error_type.to_string(),
    )
    .increment(1);
}

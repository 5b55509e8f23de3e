pub mod middleware;

pub use middleware::MetricsMiddleware;

use std::sync::{Arc, OnceLock};

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

use crate::config::AppMetadata;

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

const HTTP_DURATION_BUCKETS: &[f64] = &[0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0];

#[derive(Clone)]
pub struct AppMetrics {
    prometheus_handle: Arc<PrometheusHandle>,
}

impl AppMetrics {
    pub fn new() -> Self {
        Self::with_metadata(None)
    }

    /// The process-wide recorder is installed on first use; later calls share it
    pub fn with_metadata(metadata: Option<&AppMetadata>) -> Self {
        let handle = PROMETHEUS_HANDLE.get_or_init(|| {
            let builder = match metadata {
                Some(app) => PrometheusBuilder::new()
                    .add_global_label("service", app.name.clone())
                    .add_global_label("version", app.version.clone())
                    .add_global_label("environment", app.environment.clone()),
                None => PrometheusBuilder::new(),
            };

            let builder = match builder.set_buckets_for_metric(
                Matcher::Full("http_requests_duration_seconds".to_string()),
                HTTP_DURATION_BUCKETS,
            ) {
                Ok(builder) => builder,
                Err(e) => {
                    ::tracing::warn!(error = %e, "Falling back to summary for request durations");
                    PrometheusBuilder::new()
                }
            };

            let recorder = builder.build_recorder();
            let handle = recorder.handle();

            if metrics::set_global_recorder(recorder).is_err() {
                ::tracing::warn!("A global metrics recorder is already installed");
            }

            Self::describe_metrics();

            handle
        });

        Self {
            prometheus_handle: Arc::new(handle.clone()),
        }
    }

    fn describe_metrics() {
        // HTTP metrics
        describe_counter!("http_requests_total", "Total number of HTTP requests");
        describe_histogram!(
            "http_requests_duration_seconds",
            "HTTP request duration in seconds"
        );
        describe_gauge!(
            "http_requests_in_flight",
            "Number of HTTP requests currently being processed"
        );

        // Auth metrics
        describe_counter!(
            "auth_registrations_total",
            "Registration attempts by outcome"
        );
        describe_counter!(
            "auth_login_attempts_total",
            "Total number of login attempts"
        );
        describe_counter!(
            "auth_tokens_purged_total",
            "Expired tokens removed by the cleanup task"
        );
    }

    // HTTP metrics
    pub fn record_http_request(&self, method: &str, path: &str, status: u16, duration_secs: f64) {
        counter!(
            "http_requests_total",
            "method" => method.to_string(),
            "path" => path.to_string(),
            "status" => status.to_string()
        )
        .increment(1);

        histogram!(
            "http_requests_duration_seconds",
            "method" => method.to_string(),
            "path" => path.to_string()
        )
        .record(duration_secs);
    }

    pub fn http_request_start(&self) {
        gauge!("http_requests_in_flight").increment(1.0);
    }

    pub fn http_request_end(&self) {
        gauge!("http_requests_in_flight").decrement(1.0);
    }

    // Auth metrics
    pub fn record_registration(&self, outcome: &'static str) {
        counter!("auth_registrations_total", "outcome" => outcome).increment(1);
    }

    pub fn record_login_attempt(&self, success: bool) {
        let status = if success { "true" } else { "false" };
        counter!("auth_login_attempts_total", "success" => status).increment(1);
    }

    pub fn record_tokens_purged(&self, count: u64) {
        counter!("auth_tokens_purged_total").increment(count);
    }

    // Prometheus export
    pub fn render(&self) -> String {
        self.prometheus_handle.render()
    }
}

impl Default for AppMetrics {
    fn default() -> Self {
        Self::new()
    }
}

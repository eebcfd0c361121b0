// Metrics and observability module
// This file handles per-service request counters and latency histograms,
// registered into one process-wide registry and rendered for scraping
//
// Numan Thabit 2025 Nov

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, Opts, Registry, TextEncoder};
use std::time::Duration;

use crate::errors::ServiceError;

/// Counter and duration histogram for one HTTP handler.
///
/// Cloning is cheap; clones share the same underlying atomics, so concurrent
/// handlers can record without further locking.
#[derive(Clone)]
pub struct ServiceMetrics {
    requests_total: IntCounter,
    request_duration: Histogram,
}

impl ServiceMetrics {
    /// Build `<prefix>_requests_total` and `<prefix>_request_duration_seconds`
    /// and register both into `registry`. Fails if the prefix is already taken.
    pub fn register(
        registry: &Registry,
        prefix: &str,
        endpoint: &str,
    ) -> Result<Self, ServiceError> {
        let requests_total = IntCounter::with_opts(Opts::new(
            format!("{prefix}_requests_total"),
            format!("Total number of {endpoint} requests"),
        ))?;
        let request_duration = Histogram::with_opts(
            HistogramOpts::new(
                format!("{prefix}_request_duration_seconds"),
                format!("Duration of {endpoint} handler in seconds"),
            )
            .buckets(prometheus::DEFAULT_BUCKETS.to_vec()),
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration.clone()))?;

        Ok(Self {
            requests_total,
            request_duration,
        })
    }

    pub fn record_request(&self) {
        self.requests_total.inc();
    }

    pub fn observe_duration(&self, elapsed: Duration) {
        self.request_duration.observe(elapsed.as_secs_f64());
    }

    pub fn requests(&self) -> u64 {
        self.requests_total.get()
    }

    pub fn observations(&self) -> u64 {
        self.request_duration.get_sample_count()
    }
}

/// Encode every family in `registry` in the Prometheus text format.
pub fn render(registry: &Registry) -> Result<String, ServiceError> {
    let families = registry.gather();
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ServiceError::Encode(e.to_string()))
}

/// Content type of [`render`]'s output.
pub fn content_type() -> &'static str {
    prometheus::TEXT_FORMAT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_exposes_both_families() {
        let registry = Registry::new();
        let metrics = ServiceMetrics::register(&registry, "is_prime", "/isPrime").unwrap();
        metrics.record_request();
        metrics.observe_duration(Duration::from_millis(3));

        let names: Vec<String> = registry
            .gather()
            .iter()
            .map(|f| f.get_name().to_string())
            .collect();
        assert!(names.contains(&"is_prime_requests_total".to_string()));
        assert!(names.contains(&"is_prime_request_duration_seconds".to_string()));
    }

    #[test]
    fn duplicate_prefix_is_rejected() {
        let registry = Registry::new();
        ServiceMetrics::register(&registry, "echo_number", "/echoNumber").unwrap();
        let err = ServiceMetrics::register(&registry, "echo_number", "/echoNumber");
        assert!(matches!(err, Err(ServiceError::Metrics(_))));
    }

    #[test]
    fn counts_are_independent() {
        let registry = Registry::new();
        let metrics = ServiceMetrics::register(&registry, "is_prime", "/isPrime").unwrap();
        metrics.record_request();
        metrics.record_request();
        metrics.observe_duration(Duration::from_micros(250));
        assert_eq!(metrics.requests(), 2);
        assert_eq!(metrics.observations(), 1);
    }

    #[test]
    fn render_uses_default_buckets() {
        let registry = Registry::new();
        let metrics = ServiceMetrics::register(&registry, "is_prime", "/isPrime").unwrap();
        metrics.observe_duration(Duration::from_millis(1));

        let text = render(&registry).unwrap();
        assert!(text.contains(
            "# HELP is_prime_request_duration_seconds Duration of /isPrime handler in seconds"
        ));
        assert!(text.contains("is_prime_request_duration_seconds_bucket{le=\"0.005\"} 1"));
        assert!(text.contains("is_prime_request_duration_seconds_bucket{le=\"10\"} 1"));
        assert!(text.contains("is_prime_request_duration_seconds_count 1"));
        assert!(text.contains("is_prime_requests_total 0"));
    }

    #[test]
    fn clones_share_state_across_threads() {
        let registry = Registry::new();
        let metrics = ServiceMetrics::register(&registry, "is_prime", "/isPrime").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let m = metrics.clone();
                std::thread::spawn(move || {
                    for _ in 0..1_000 {
                        m.record_request();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(metrics.requests(), 8_000);
    }
}

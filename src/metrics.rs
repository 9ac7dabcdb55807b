//! Request metrics - counter and duration histogram with a bounded label set.
//!
//! The recorder owns the two metric families the transport wrapper publishes
//! and registers them exactly once against the registry it is given. All
//! recording goes through atomic counters inside the `prometheus` crate, so
//! concurrent observations never race or lose an increment, and nothing on
//! this path serializes the network call being measured.

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

/// Upper bounds, in seconds, of the request duration histogram buckets. The
/// `+Inf` bucket is implicit.
pub const DURATION_BUCKETS: [f64; 4] = [0.1, 1.0, 10.0, 30.0];

/// Names of the variable labels, in declaration order.
const LABEL_NAMES: [&str; 4] = ["method", "path", "code", "apiservice"];

/// The complete key identifying one request time series.
///
/// `method` is the HTTP method verbatim (uppercase), `path` is the bounded
/// template from the classifier, `code` is the decimal status code (`"0"`
/// when the delegate produced no response), and `api_service` is the service
/// label or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLabels {
    pub method: String,
    pub path: String,
    pub code: String,
    pub api_service: String,
}

impl RequestLabels {
    fn values(&self) -> [&str; 4] {
        [&self.method, &self.path, &self.code, &self.api_service]
    }
}

/// Owns the request counter and duration histogram families.
#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    request_count: IntCounterVec,
    request_duration: HistogramVec,
}

impl MetricsRecorder {
    /// Create both metric families, named `<subsystem>_request_count` and
    /// `<subsystem>_request_duration`, and register them with `registry`.
    ///
    /// Registration happens once, here; a registry that rejects one of the
    /// families (typically a duplicate registration) fails construction.
    pub fn new(subsystem: &str, registry: &Registry) -> Result<Self, prometheus::Error> {
        let request_count = IntCounterVec::new(
            Opts::new("request_count", "Number of requests sent and their responses.")
                .subsystem(subsystem),
            &LABEL_NAMES,
        )?;
        let request_duration = HistogramVec::new(
            HistogramOpts::new("request_duration", "Request durations in seconds.")
                .subsystem(subsystem)
                .buckets(DURATION_BUCKETS.to_vec()),
            &LABEL_NAMES,
        )?;

        registry.register(Box::new(request_count.clone()))?;
        registry.register(Box::new(request_duration.clone()))?;

        Ok(Self {
            request_count,
            request_duration,
        })
    }

    /// Record one completed request: increment the counter by one and add
    /// `seconds` to the duration histogram, both under `labels`.
    ///
    /// Safe under arbitrary concurrent callers.
    pub fn observe(&self, labels: &RequestLabels, seconds: f64) -> Result<(), prometheus::Error> {
        let values = labels.values();
        self.request_count
            .get_metric_with_label_values(&values)?
            .inc();
        self.request_duration
            .get_metric_with_label_values(&values)?
            .observe(seconds);
        Ok(())
    }
}

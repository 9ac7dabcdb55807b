//! # Apimeter
//!
//! **Apimeter** wraps an HTTP client transport and exports Prometheus metrics
//! for every request that flows through it, without letting the number of
//! metric time series grow with traffic.
//!
//! ## Overview
//!
//! Metrics labelled with raw request paths are a classic cardinality trap:
//! `/api/clusters_mgmt/v1/clusters/<id>` produces one new time series per
//! cluster ever requested. Apimeter collapses every path to a *template*
//! drawn from a statically known route schema before it is used as a label,
//! so the series count stays proportional to the API surface, not to the
//! number of resources.
//!
//! The library is organized into a few small modules:
//!
//! - **[`schema`]** - declarative route schema (service labels + route
//!   patterns), with a built-in surface for the OCM API and YAML/JSON loading
//! - **[`classifier`]** - the route tree and the path classifier that turns a
//!   raw path into a `(template, service)` label pair
//! - **[`metrics`]** - the request counter and duration histogram, registered
//!   against an injected Prometheus registry
//! - **[`transport`]** - the `Transport` capability trait and the wrapper
//!   that decorates any transport with instrumentation
//!
//! ## Example
//!
//! ```rust,ignore
//! use apimeter::{Transport, TransportWrapper, TransportWrapperConfig};
//! use tracing::Dispatch;
//!
//! let wrapper = TransportWrapper::new(TransportWrapperConfig {
//!     logger: Some(Dispatch::new(tracing_subscriber::fmt().finish())),
//!     subsystem: Some("api_outbound".to_string()),
//!     ..Default::default()
//! })?;
//!
//! // `pool` is whatever implements `Transport` for your HTTP stack.
//! let transport = wrapper.wrap(pool);
//!
//! // Requests go through unchanged; metrics accumulate on the side.
//! let response = transport.execute(request)?;
//! ```
//!
//! Every completed request produces one increment of
//! `<subsystem>_request_count{method, path, code, apiservice}` and one
//! observation of `<subsystem>_request_duration` with the same labels.
//!
//! ## Cardinality
//!
//! The `path` label can only take values rendered from the route tree (one
//! per reachable tree node) plus the single fallback value `/-` used for any
//! path that deviates from the schema. Unknown paths are deliberately
//! indistinguishable from each other: a partial match is never kept.

pub mod classifier;
pub mod metrics;
pub mod schema;
pub mod transport;

pub use classifier::{PathClassifier, PathLabels, RouteTree, ServiceRegistry};
pub use metrics::{MetricsRecorder, RequestLabels, DURATION_BUCKETS};
pub use schema::{load_schema, ApiSchema};
pub use transport::{
    ConfigError, InstrumentedTransport, Transport, TransportWrapper, TransportWrapperConfig,
};

//! # Classifier Module
//!
//! The classifier turns a raw request path into the bounded label pair used
//! by the metrics recorder: a path template and an API service label.
//!
//! ## Overview
//!
//! Classification is driven by two immutable values built at construction
//! time:
//!
//! 1. **[`RouteTree`]** - a segment-wise matcher describing the shape of
//!    every valid API path. Literal segments match exactly; variable
//!    segments (written `{name}` in route patterns) match any non-empty
//!    value and render as `-`.
//!
//! 2. **[`ServiceRegistry`]** - an exact-match table from the segment after
//!    `/api` to a coarse service label (e.g. `clusters_mgmt` →
//!    `ocm-clusters-service`).
//!
//! [`PathClassifier::classify`] applies both: the tree walk produces the
//! template (or the `/-` fallback when the path deviates from the schema at
//! any depth), and the registry lookup produces the service label. The two
//! are independent: a path can fail template matching and still carry a
//! service label, because the lookup only needs the second segment.
//!
//! Both values are immutable after construction and shared read-only across
//! all concurrent classifications; no synchronization is involved.

mod core;
mod services;
mod tree;

pub use core::{PathClassifier, PathLabels, UNKNOWN_PATH_LABEL};
pub use services::ServiceRegistry;
pub use tree::RouteTree;

//! Classifier core - hot path for per-request label resolution.

use smallvec::SmallVec;
use tracing::debug;

use super::{RouteTree, ServiceRegistry};
use crate::schema::ApiSchema;

/// Label rendered for any path that deviates from the route schema.
pub const UNKNOWN_PATH_LABEL: &str = "/-";

/// First segment of every classifiable path.
const API_ROOT: &str = "api";

/// Bounded labels derived from one raw request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLabels {
    /// Path template: `/api`, `/api/clusters_mgmt/v1/clusters/-`, ... or the
    /// fallback `/-`.
    pub path: String,
    /// Label of the service owning the path, or empty when the service root
    /// is unknown or absent.
    pub api_service: String,
}

/// Resolves raw request paths to bounded metric labels.
///
/// Holds the immutable route tree and service registry; classification is a
/// pure function of the input path, so identical paths always produce
/// identical labels regardless of method, status or history.
#[derive(Debug, Clone)]
pub struct PathClassifier {
    tree: RouteTree,
    services: ServiceRegistry,
}

impl PathClassifier {
    /// Create a classifier from an already-built tree and registry.
    #[must_use]
    pub fn new(tree: RouteTree, services: ServiceRegistry) -> Self {
        Self { tree, services }
    }

    /// Build a classifier from a route schema.
    ///
    /// Fails when one of the schema's route patterns does not start with
    /// `/api`.
    pub fn from_schema(schema: &ApiSchema) -> anyhow::Result<Self> {
        let tree = RouteTree::from_patterns(&schema.routes)?;
        let services = ServiceRegistry::from_entries(schema.services.clone());
        Ok(Self::new(tree, services))
    }

    /// Classify a raw request path.
    ///
    /// Splits on `/` discarding empty segments, so `""`, `"/"` and `"//"`
    /// all classify alike. The template requires the first segment to be
    /// `api` and the remaining segments to walk the route tree; any failed
    /// transition collapses the whole result to [`UNKNOWN_PATH_LABEL`]. The
    /// service label only needs a known second segment and is resolved even
    /// when the template walk fails.
    #[must_use]
    pub fn classify(&self, path: &str) -> PathLabels {
        let segments: SmallVec<[&str; 8]> =
            path.split('/').filter(|s| !s.is_empty()).collect();

        let api_service = segments
            .get(1)
            .and_then(|root| self.services.label(root))
            .unwrap_or_default()
            .to_string();

        let template = if segments.first() == Some(&API_ROOT) {
            self.tree.template(&segments[1..])
        } else {
            None
        };
        let path_label = template.unwrap_or_else(|| UNKNOWN_PATH_LABEL.to_string());

        debug!(
            path = %path,
            template = %path_label,
            api_service = %api_service,
            "classified request path"
        );

        PathLabels {
            path: path_label,
            api_service,
        }
    }
}

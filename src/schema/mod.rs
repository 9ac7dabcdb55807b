//! # Schema Module
//!
//! A route schema is the declarative description of the API surface being
//! instrumented: which service roots exist under `/api`, what label each one
//! carries, and which path shapes are valid. It is plain data - the
//! classifier compiles it into its immutable matcher at construction time.
//!
//! A schema can come from three places:
//!
//! - [`ApiSchema::ocm`] - the built-in surface of the OpenShift Cluster
//!   Manager API, the default when the wrapper configuration names none
//! - a YAML or JSON document loaded with [`load_schema`]
//! - hand-construction, mostly in tests
//!
//! ```yaml
//! services:
//!   clusters_mgmt: ocm-clusters-service
//! routes:
//!   - /api/clusters_mgmt/v1/clusters/{cluster_id}
//! ```

mod load;
#[cfg(test)]
mod tests;

pub use load::load_schema;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Declarative description of an instrumented API surface.
///
/// `services` maps the segment after `/api` to the coarse service label
/// reported in the `apiservice` metric label. `routes` lists the valid path
/// shapes with `{param}` placeholders for resource identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSchema {
    /// Service root segment → service label.
    #[serde(default)]
    pub services: BTreeMap<String, String>,
    /// Route patterns, e.g. `/api/clusters_mgmt/v1/clusters/{cluster_id}`.
    #[serde(default)]
    pub routes: Vec<String>,
}

impl ApiSchema {
    /// The built-in surface of the OpenShift Cluster Manager API.
    ///
    /// Covers the clusters, accounts and service log services with their v1
    /// resource collections.
    #[must_use]
    pub fn ocm() -> Self {
        let services = [
            ("clusters_mgmt", "ocm-clusters-service"),
            ("accounts_mgmt", "ocm-accounts-service"),
            ("service_logs", "ocm-logs-service"),
        ]
        .into_iter()
        .map(|(root, label)| (root.to_string(), label.to_string()))
        .collect();

        let routes = [
            "/api/clusters_mgmt/v1/addons/{addon_id}",
            "/api/clusters_mgmt/v1/cloud_providers/{provider_id}",
            "/api/clusters_mgmt/v1/clusters/{cluster_id}/credentials",
            "/api/clusters_mgmt/v1/clusters/{cluster_id}/groups/{group_id}",
            "/api/clusters_mgmt/v1/clusters/{cluster_id}/hibernate",
            "/api/clusters_mgmt/v1/clusters/{cluster_id}/identity_providers/{idp_id}",
            "/api/clusters_mgmt/v1/clusters/{cluster_id}/ingresses/{ingress_id}",
            "/api/clusters_mgmt/v1/clusters/{cluster_id}/resume",
            "/api/clusters_mgmt/v1/clusters/{cluster_id}/status",
            "/api/clusters_mgmt/v1/flavours/{flavour_id}",
            "/api/clusters_mgmt/v1/versions/{version_id}",
            "/api/accounts_mgmt/v1/access_token",
            "/api/accounts_mgmt/v1/accounts/{account_id}",
            "/api/accounts_mgmt/v1/current_account",
            "/api/accounts_mgmt/v1/registry_credentials/{credential_id}",
            "/api/accounts_mgmt/v1/subscriptions/{subscription_id}",
            "/api/service_logs/v1/cluster_logs/{log_id}",
            "/api/service_logs/v1/clusters/{cluster_uuid}/cluster_logs",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        Self { services, routes }
    }
}

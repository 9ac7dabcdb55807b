use super::{load_schema, ApiSchema};

#[test]
fn ocm_schema_names_three_services() {
    let schema = ApiSchema::ocm();
    assert_eq!(schema.services.len(), 3);
    assert_eq!(
        schema.services.get("clusters_mgmt").map(String::as_str),
        Some("ocm-clusters-service"),
    );
    assert_eq!(
        schema.services.get("accounts_mgmt").map(String::as_str),
        Some("ocm-accounts-service"),
    );
    assert_eq!(
        schema.services.get("service_logs").map(String::as_str),
        Some("ocm-logs-service"),
    );
}

#[test]
fn ocm_routes_all_start_with_api() {
    for route in &ApiSchema::ocm().routes {
        assert!(route.starts_with("/api/"), "route {route:?}");
    }
}

#[test]
fn loads_yaml_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.yaml");
    std::fs::write(
        &path,
        "services:\n  clusters_mgmt: ocm-clusters-service\nroutes:\n  - /api/clusters_mgmt/v1/clusters/{cluster_id}\n",
    )
    .unwrap();

    let schema = load_schema(path.to_str().unwrap()).unwrap();
    assert_eq!(
        schema.services.get("clusters_mgmt").map(String::as_str),
        Some("ocm-clusters-service"),
    );
    assert_eq!(schema.routes, vec!["/api/clusters_mgmt/v1/clusters/{cluster_id}"]);
}

#[test]
fn loads_json_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.json");
    std::fs::write(
        &path,
        r#"{"services": {"service_logs": "ocm-logs-service"}, "routes": ["/api/service_logs/v1/cluster_logs/{log_id}"]}"#,
    )
    .unwrap();

    let schema = load_schema(path.to_str().unwrap()).unwrap();
    assert_eq!(
        schema.services.get("service_logs").map(String::as_str),
        Some("ocm-logs-service"),
    );
    assert_eq!(schema.routes.len(), 1);
}

#[test]
fn yaml_and_json_parse_to_the_same_schema() {
    let dir = tempfile::tempdir().unwrap();
    let yaml_path = dir.path().join("surface.yaml");
    let json_path = dir.path().join("surface.json");
    std::fs::write(
        &yaml_path,
        "services:\n  accounts_mgmt: ocm-accounts-service\nroutes:\n  - /api/accounts_mgmt/v1/accounts/{account_id}\n",
    )
    .unwrap();
    std::fs::write(
        &json_path,
        r#"{"services": {"accounts_mgmt": "ocm-accounts-service"}, "routes": ["/api/accounts_mgmt/v1/accounts/{account_id}"]}"#,
    )
    .unwrap();

    assert_eq!(
        load_schema(yaml_path.to_str().unwrap()).unwrap(),
        load_schema(json_path.to_str().unwrap()).unwrap(),
    );
}

#[test]
fn missing_sections_default_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.yaml");
    std::fs::write(&path, "services: {}\n").unwrap();

    let schema = load_schema(path.to_str().unwrap()).unwrap();
    assert!(schema.services.is_empty());
    assert!(schema.routes.is_empty());
}

#[test]
fn missing_file_is_an_error() {
    assert!(load_schema("/no/such/surface.yaml").is_err());
}

#[test]
fn malformed_document_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(load_schema(path.to_str().unwrap()).is_err());
}

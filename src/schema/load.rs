use super::ApiSchema;

/// Load a route schema from a YAML or JSON file.
///
/// The format is chosen by file extension, `.yaml`/`.yml` parsing as YAML
/// and anything else as JSON.
pub fn load_schema(file_path: &str) -> anyhow::Result<ApiSchema> {
    let content = std::fs::read_to_string(file_path)?;
    let schema: ApiSchema = if file_path.ends_with(".yaml") || file_path.ends_with(".yml") {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(schema)
}

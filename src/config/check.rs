use serde_yaml::Value;

/// Top-level keys a complete configuration file carries.
pub const CONFIG_FIELDS: [&str; 5] = ["source", "cache_minutes", "placeholder", "audit_log", "users"];

/// Keys of `CONFIG_FIELDS` absent from the YAML document `content`.
/// Unparseable content reports every field as missing.
pub fn missing_fields(content: &str) -> Vec<&'static str> {
    let yaml: Value = serde_yaml::from_str(content).unwrap_or(Value::Null);

    match yaml.as_mapping() {
        Some(map) => CONFIG_FIELDS
            .iter()
            .copied()
            .filter(|field| !map.contains_key(*field))
            .collect(),
        None => CONFIG_FIELDS.to_vec(),
    }
}

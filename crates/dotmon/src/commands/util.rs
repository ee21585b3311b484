//! Shared helpers for command handlers.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Read and parse a resource spec for `--from-file` flags.
///
/// `.yaml` / `.yml` files are parsed as YAML, everything else as JSON.
pub fn read_spec_file<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = std::fs::read_to_string(path)?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    if is_yaml {
        Ok(serde_yaml::from_str(&contents)?)
    } else {
        Ok(serde_json::from_str(&contents)?)
    }
}

/// `"-"` for empty strings and zero ids in detail views.
pub fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

pub fn id_or_dash(id: i64) -> String {
    if id == 0 { "-".into() } else { id.to_string() }
}

pub fn join_ids(ids: &[i64]) -> String {
    if ids.is_empty() {
        return "-".into();
    }
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io::Write;

    use dotmon_core::GroupSpec;

    use super::*;

    #[test]
    fn spec_files_parse_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("group.json");
        std::fs::write(&json, r#"{ "name": "ops" }"#).unwrap();
        let spec: GroupSpec = read_spec_file(&json).unwrap();
        assert_eq!(spec.name, "ops");

        let yaml = dir.path().join("group.yml");
        let mut f = std::fs::File::create(&yaml).unwrap();
        writeln!(f, "name: dev\naddresses:\n  - type: Email\n    address: dev@example.com").unwrap();
        let spec: GroupSpec = read_spec_file(&yaml).unwrap();
        assert_eq!(spec.name, "dev");
        assert_eq!(spec.addresses.len(), 1);
    }

    #[test]
    fn bad_json_is_a_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_spec_file::<GroupSpec>(&path).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::exit_code::USAGE);
    }

    #[test]
    fn dash_helpers() {
        assert_eq!(or_dash(""), "-");
        assert_eq!(id_or_dash(0), "-");
        assert_eq!(join_ids(&[3, 4]), "3, 4");
    }
}

use reqwest::Url;
use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` unless the value parses as an absolute http or https url with a host
pub fn check_http_url(url: &str) -> Result<String, String> {
    let url = url.trim();
    let parsed =
        Url::parse(url).map_err(|e| format!("The api url '{url}' is not a valid url: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "The api url '{url}' must start with http:// or https://."
        ));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(format!("The api url '{url}' has no host."));
    }
    Ok(url.to_string())
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The json file '{file}' is not valid json: {e}"))?;
    validate_json_format(&json)?;
    Ok(json)
}

/// Shallow shape check so clap can report a bad file before startup.
/// The expected format is
/// `{ "title": "...", "par": [18 ints], "teams": [{ "name": "...", "pairings": [{ "id": <int>, "label": "..." }] }] }`.
fn validate_json_format(json: &Value) -> Result<(), String> {
    let Some(object) = json.as_object() else {
        return Err("The event json must be an object.".to_string());
    };

    let expected_keys = ["title", "par", "teams"];
    if let Some(key) = object.keys().find(|k| !expected_keys.contains(&k.as_str())) {
        return Err(format!(
            "The event json has an unexpected key '{key}'. Expected keys: {expected_keys:?}"
        ));
    }
    if !json["par"].is_array() {
        return Err("The json key par is not in the correct format. Expected an array.".to_string());
    }
    if !json["teams"].is_array() {
        return Err(
            "The json key teams is not in the correct format. Expected an array.".to_string(),
        );
    }
    if object.get("title").is_some_and(|title| !title.is_string()) {
        return Err(
            "The json key title is not in the correct format. Expected a string.".to_string(),
        );
    }
    Ok(())
}

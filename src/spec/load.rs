use super::types::ApiSpec;
use crate::error::GenerateError;
use anyhow::Context;
use std::io::Read;
use std::time::Duration;

/// Network timeout for remote spec fetches. A timeout simply aborts the run;
/// no cancellation is threaded through the pipeline itself.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Load and parse an API description document.
///
/// `source` may be a local file path, an `http(s)://` URL, or `-`/`stdin` for
/// piped input. YAML is assumed for `.yaml`/`.yml` sources, JSON otherwise.
pub fn load_document(source: &str) -> anyhow::Result<ApiSpec> {
    let content = read_source(source)?;
    parse_document(source, &content)
}

fn read_source(source: &str) -> anyhow::Result<String> {
    if source == "-" || source == "stdin" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| GenerateError::SpecAcquisition {
                source: "stdin".to_string(),
                reason: e.to_string(),
            })?;
        return Ok(buf);
    }
    if source.starts_with("http://") || source.starts_with("https://") {
        return fetch_remote(source);
    }
    std::fs::read_to_string(source).map_err(|e| {
        GenerateError::SpecAcquisition {
            source: source.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

fn fetch_remote(url: &str) -> anyhow::Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("failed to construct HTTP client")?;
    let response = client
        .get(url)
        .send()
        .map_err(|e| GenerateError::SpecAcquisition {
            source: url.to_string(),
            reason: e.to_string(),
        })?;
    if !response.status().is_success() {
        return Err(GenerateError::SpecAcquisition {
            source: url.to_string(),
            reason: format!("unexpected status {}", response.status()),
        }
        .into());
    }
    response.text().map_err(|e| {
        GenerateError::SpecAcquisition {
            source: url.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

fn parse_document(source: &str, content: &str) -> anyhow::Result<ApiSpec> {
    let parsed = if source.ends_with(".yaml") || source.ends_with(".yml") {
        serde_yaml::from_str::<ApiSpec>(content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str::<ApiSpec>(content).map_err(|e| e.to_string())
    };
    parsed.map_err(|reason| GenerateError::SpecParse { reason }.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_document() {
        let spec = parse_document(
            "spec.json",
            r#"{"info": {"title": "t", "version": "1.0"}, "paths": {}}"#,
        )
        .unwrap();
        assert_eq!(spec.info.version, "1.0");
    }

    #[test]
    fn parses_yaml_document() {
        let spec = parse_document(
            "spec.yaml",
            "info:\n  title: t\n  version: '2.0'\npaths: {}\n",
        )
        .unwrap();
        assert_eq!(spec.info.version, "2.0");
    }

    #[test]
    fn malformed_required_marker_is_a_parse_error() {
        let err = parse_document(
            "spec.json",
            r#"{"components": {"schemas": {"T": {"type": "object", "required": 7}}}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn missing_file_is_an_acquisition_error() {
        let err = load_document("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("failed to acquire"));
    }
}

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::header::CONTENT_TYPE;

use gqljs_core::parse::{self, IntrospectionQuery, query::INTROSPECTION_QUERY};

/// Run the introspection query against a GraphQL endpoint.
pub fn fetch_introspection(
    endpoint: &str,
    headers: &[(String, String)],
    timeout: Duration,
) -> Result<IntrospectionQuery> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .context("failed to build HTTP client")?;

    let mut request = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .json(&serde_json::json!({ "query": INTROSPECTION_QUERY }));
    for (name, value) in headers {
        request = request.header(name, value);
    }

    let response = request
        .send()
        .with_context(|| format!("error making request to {endpoint}"))?;
    let status = response.status();
    let body = response.text().context("error reading response")?;
    log::debug!("{endpoint} responded {status} with {} bytes", body.len());

    if !status.is_success() {
        bail!("HTTP {status} from {endpoint}: {body}");
    }

    let value: serde_json::Value =
        serde_json::from_str(&body).context("error parsing response")?;
    Ok(parse::from_response(value)?)
}

/// Parse `Key: Value` header arguments. Entries without a `:` are skipped.
pub fn parse_headers(raw: &[String]) -> Vec<(String, String)> {
    raw.iter()
        .filter_map(|header| match header.split_once(':') {
            Some((name, value)) => Some((name.trim().to_string(), value.trim().to_string())),
            None => {
                log::warn!("ignoring malformed header {header:?} (expected 'Key: Value')");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headers() {
        let raw = vec![
            "Authorization: Bearer abc:def".to_string(),
            "  X-Team :core ".to_string(),
            "no-colon".to_string(),
        ];
        assert_eq!(
            parse_headers(&raw),
            vec![
                ("Authorization".to_string(), "Bearer abc:def".to_string()),
                ("X-Team".to_string(), "core".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_endpoint_url() {
        let err = fetch_introspection("http://[::1", &[], Duration::from_secs(1)).unwrap_err();
        assert_eq!(err.to_string(), "error making request to http://[::1");
    }
}

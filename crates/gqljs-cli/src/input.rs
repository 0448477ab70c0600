use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};

use gqljs_core::config::GqljsConfig;
use gqljs_core::parse::{self, IntrospectionQuery};

use crate::fetch::{fetch_introspection, parse_headers};

/// Acquire the introspection result: endpoint first, then input file, then piped stdin.
pub fn load_introspection(cfg: &GqljsConfig) -> Result<IntrospectionQuery> {
    if let Some(ref endpoint) = cfg.endpoint {
        eprintln!("Fetching schema from endpoint: {endpoint}");
        let headers = parse_headers(&cfg.headers);
        return fetch_introspection(
            endpoint,
            &headers,
            Duration::from_secs(cfg.timeout_secs()),
        );
    }

    if let Some(ref path) = cfg.input {
        return load_file(path);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("no input provided: use --endpoint, --input, or pipe data to stdin");
    }
    let mut content = String::new();
    stdin
        .lock()
        .read_to_string(&mut content)
        .context("error reading from stdin")?;
    parse::from_json(&content).context("error parsing stdin data")
}

/// Read an introspection result (bare or enveloped) from a file.
pub fn load_file(path: &Path) -> Result<IntrospectionQuery> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse::from_json(&content).with_context(|| format!("failed to parse {}", path.display()))
}

//! PeakForest retrieval strategy.
//!
//! Issues one blocking GET against the service's LC metadata endpoint and
//! normalizes the returned JSON object into a [`ColumnList`]. The response
//! shape is trusted: an object whose keys are column codes and whose values
//! are descriptors carrying at least a `name` field.

use log::debug;
use serde_json::{Map, Value};

use super::types::{ColumnEntry, ColumnList};
use super::{ResolverConfig, ResolverError};

/// Endpoint path listing LC column codes, relative to the service base URL.
const CODE_COLUMNS_PATH: &str = "metadata/lc/list-code-columns";

/// Build the metadata endpoint URL from the service base URL.
///
/// A separating slash is inserted only when the base does not already end
/// with one. The token, when present, rides along as a query parameter.
pub(crate) fn endpoint_url(base: &str, token: Option<&str>) -> String {
    let mut url = String::with_capacity(base.len() + CODE_COLUMNS_PATH.len() + 1);
    url.push_str(base);
    if !base.ends_with('/') {
        url.push('/');
    }
    url.push_str(CODE_COLUMNS_PATH);
    if let Some(token) = token {
        url.push_str("?token=");
        url.push_str(token);
    }
    url
}

/// Normalize a decoded code-to-descriptor mapping into a column list.
///
/// Entries are taken in the mapping's own iteration order, which is the
/// order the document listed them in (the decoder preserves it). The first
/// entry becomes the default.
pub(crate) fn columns_from_codes(codes: &Map<String, Value>) -> Result<ColumnList, ResolverError> {
    let mut columns = Vec::with_capacity(codes.len());

    for (index, (code, descriptor)) in codes.iter().enumerate() {
        let name = descriptor
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ResolverError::MalformedResponse(format!(
                    "column descriptor {code:?} has no \"name\" field"
                ))
            })?;

        columns.push(ColumnEntry {
            label: name.to_string(),
            id: code.clone(),
            is_default: index == 0,
        });
    }

    Ok(columns)
}

/// Fetch and normalize the column codes advertised by a PeakForest
/// instance.
pub(crate) fn fetch_code_columns(config: &ResolverConfig) -> Result<ColumnList, ResolverError> {
    // Token stays out of the log line
    debug!(
        "GET {} (token: {})",
        endpoint_url(&config.location, None),
        if config.token.is_some() { "yes" } else { "no" }
    );

    let client = reqwest::blocking::Client::builder()
        .timeout(config.timeout)
        .build()?;

    let url = endpoint_url(&config.location, config.token.as_deref());
    let body = client.get(url).send()?.error_for_status()?.text()?;

    let payload: Value = serde_json::from_str(&body).map_err(|e| {
        ResolverError::MalformedResponse(format!("response body is not valid JSON: {e}"))
    })?;

    let codes = payload.as_object().ok_or_else(|| {
        ResolverError::MalformedResponse(
            "expected a JSON object mapping column codes to descriptors".to_string(),
        )
    })?;

    columns_from_codes(codes)
}

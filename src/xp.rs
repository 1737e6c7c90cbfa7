use std::collections::HashMap;

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, Method, Proxy,
};
use serde::Serialize;

use crate::{
    constants::{XP_REQUEST_TIMEOUT, ZERION_CLIENT_TYPE, ZERION_CLIENT_VERSION, ZERION_META_URL},
    utils::build_proxy,
};

#[derive(Clone)]
pub struct RequestParams<'a, S: Serialize> {
    pub url: &'a str,
    pub method: Method,
    pub body: Option<S>,
    pub query_args: Option<HashMap<&'a str, &'a str>>,
}

pub async fn send_http_request(
    request_params: &RequestParams<'_, impl Serialize>,
    headers: Option<&HeaderMap>,
    proxy: Option<&Proxy>,
) -> eyre::Result<String> {
    let mut builder = Client::builder().timeout(XP_REQUEST_TIMEOUT);
    if let Some(proxy) = proxy {
        builder = builder.proxy(proxy.clone());
    }
    let client = builder.build()?;

    let mut request = client.request(request_params.method.clone(), request_params.url);

    if let Some(params) = &request_params.query_args {
        request = request.query(&params);
    }

    if let Some(body) = &request_params.body {
        request = request.json(&body);
    }

    if let Some(headers) = headers {
        request = request.headers(headers.clone());
    }

    let response = request
        .send()
        .await
        .inspect_err(|e| tracing::error!("Request failed: {}", e))?
        .error_for_status()
        .inspect_err(|e| tracing::error!("Non-successful status code: {}", e))?;

    let text = response
        .text()
        .await
        .inspect_err(|e| tracing::error!("Failed to retrieve response text: {}", e))?;

    Ok(text)
}

/// Fetches the Zerion retro XP total for a wallet, routed through the given
/// `host:port[:user:pass]` proxy endpoint. One attempt, 10s timeout.
pub async fn get_xp(address: &str, proxy_endpoint: &str) -> eyre::Result<f64> {
    let proxy = build_proxy(proxy_endpoint)?;
    let headers = get_headers();

    let query_args = HashMap::from([("identifiers", address)]);

    let request_params = RequestParams {
        url: ZERION_META_URL,
        method: Method::GET,
        body: None::<serde_json::Value>,
        query_args: Some(query_args),
    };

    let response = send_http_request(&request_params, Some(&headers), Some(&proxy)).await?;

    extract_xp(&response)
}

/// XP is the sum of the `zerion` and `global` retro totals under the first
/// element of the `data` array. A missing or non-object `retro` scores 0.
pub fn extract_xp(response_text: &str) -> eyre::Result<f64> {
    let data: serde_json::Value = serde_json::from_str(response_text)?;

    let retro = &data["data"][0]["membership"]["retro"];
    if !retro.is_object() {
        return Ok(0.0);
    }

    let zerion_total = retro["zerion"]["total"].as_f64().unwrap_or(0.0);
    let global_total = retro["global"]["total"].as_f64().unwrap_or(0.0);

    Ok(zerion_total + global_total)
}

fn get_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(
        HeaderName::from_static("zerion-client-type"),
        HeaderValue::from_static(ZERION_CLIENT_TYPE),
    );
    headers.insert(
        HeaderName::from_static("zerion-client-version"),
        HeaderValue::from_static(ZERION_CLIENT_VERSION),
    );

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_zerion_and_global_totals() {
        let response = r#"{
            "data": [{
                "membership": {
                    "retro": {
                        "zerion": { "total": 120 },
                        "global": { "total": 30 }
                    }
                }
            }]
        }"#;

        assert_eq!(extract_xp(response).unwrap(), 150.0);
    }

    #[test]
    fn missing_retro_scores_zero() {
        let response = r#"{ "data": [{ "membership": {} }] }"#;

        assert_eq!(extract_xp(response).unwrap(), 0.0);
    }

    #[test]
    fn non_object_retro_scores_zero() {
        let response = r#"{ "data": [{ "membership": { "retro": null } }] }"#;

        assert_eq!(extract_xp(response).unwrap(), 0.0);
    }

    #[test]
    fn missing_sub_totals_default_to_zero() {
        let response = r#"{
            "data": [{
                "membership": { "retro": { "zerion": { "total": 25 } } }
            }]
        }"#;

        assert_eq!(extract_xp(response).unwrap(), 25.0);
    }

    #[test]
    fn empty_data_array_scores_zero() {
        assert_eq!(extract_xp(r#"{ "data": [] }"#).unwrap(), 0.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(extract_xp("not json at all").is_err());
    }
}

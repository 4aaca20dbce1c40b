use crate::config::ClientConfig;
use crate::errors::ClientError;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Builds the HTTP client used for check-ins. No timeout is set; requests wait
/// on the transport's own behavior.
pub fn build_client(config: &ClientConfig) -> Result<Client, ClientError> {
    let mut headers = HeaderMap::new();
    if let Some(cookie) = &config.cookie {
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie)?);
    }

    Ok(Client::builder().default_headers(headers).build()?)
}

/// POSTs `data` as JSON and returns the parsed response body.
///
/// The status code is not inspected: any response whose body parses as JSON is
/// returned, so a 401 carrying `{"status":"login_required"}` is a success here.
pub async fn post_json<T>(client: &Client, url: &str, data: &T) -> Result<Value, ClientError>
where
    T: Serialize + ?Sized,
{
    let body = serde_json::to_vec(data)?;
    debug!(%url, bytes = body.len(), "posting json");

    let response = client
        .post(url)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    let status = response.status();
    let value = response.json::<Value>().await?;
    debug!(%url, %status, "received json response");

    Ok(value)
}

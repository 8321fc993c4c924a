//! External joke provider clients
//!
//! Direct HTTP clients for the two third-party joke APIs. Base URLs are
//! passed in by the caller so tests can point them at a local mock server.

use crate::error::AppError;
use serde::Deserialize;

/// Response shape of the Chuck Norris joke API random endpoint
#[derive(Debug, Deserialize)]
struct ChuckJokeResponse {
    value: String,
}

/// Response shape of the dad joke API
#[derive(Debug, Deserialize)]
struct DadJokeResponse {
    joke: String,
}

/// Fetch a random Chuck Norris joke
///
/// Makes a GET request to `<base_url>/jokes/random` and extracts the joke
/// text from the `value` field.
///
/// # Errors
/// Returns `AppError::Provider` if the request fails, the provider returns a
/// non-success status, the body cannot be parsed, or the joke text is empty.
pub async fn fetch_chuck_joke(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<String, AppError> {
    let url = format!("{}/jokes/random", base_url);

    tracing::debug!(url = %url, "Calling Chuck Norris joke API");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| AppError::Provider(format!("Chuck Norris API request failed: {}", e)))?;

    let body = read_success_body(response, "Chuck Norris API").await?;

    let parsed: ChuckJokeResponse = serde_json::from_str(&body).map_err(|e| {
        AppError::Provider(format!("Failed to parse Chuck Norris API response: {}", e))
    })?;

    if parsed.value.is_empty() {
        return Err(AppError::Provider(
            "Chuck Norris API returned an empty joke".to_string(),
        ));
    }

    Ok(parsed.value)
}

/// Fetch a random dad joke
///
/// Makes a GET request to the provider root with `Accept: application/json`
/// (the provider serves HTML without it) and extracts the joke text from the
/// `joke` field.
///
/// # Errors
/// Returns `AppError::Provider` under the same conditions as
/// [`fetch_chuck_joke`].
pub async fn fetch_dad_joke(client: &reqwest::Client, base_url: &str) -> Result<String, AppError> {
    let url = format!("{}/", base_url);

    tracing::debug!(url = %url, "Calling dad joke API");

    let response = client
        .get(&url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| AppError::Provider(format!("Dad joke API request failed: {}", e)))?;

    let body = read_success_body(response, "Dad joke API").await?;

    let parsed: DadJokeResponse = serde_json::from_str(&body)
        .map_err(|e| AppError::Provider(format!("Failed to parse dad joke API response: {}", e)))?;

    if parsed.joke.is_empty() {
        return Err(AppError::Provider(
            "Dad joke API returned an empty joke".to_string(),
        ));
    }

    Ok(parsed.joke)
}

/// Check the HTTP status and read the response body
async fn read_success_body(
    response: reqwest::Response,
    provider: &str,
) -> Result<String, AppError> {
    let status = response.status();
    if !status.is_success() {
        let status_code = status.as_u16();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());

        tracing::error!(
            status_code = status_code,
            error_body = %error_body,
            "{} returned error status",
            provider
        );

        return Err(AppError::Provider(format!(
            "{} returned error status {}: {}",
            provider, status_code, error_body
        )));
    }

    response
        .text()
        .await
        .map_err(|e| AppError::Provider(format!("Failed to read {} response body: {}", provider, e)))
}

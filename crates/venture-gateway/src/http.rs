//! Shared HTTP response helpers.
//!
//! Status checks and completion-body extraction live here so the gateway
//! itself only deals with prompts and record decoding.

use crate::error::GatewayError;
use crate::parse::excerpt;
use crate::wire::ChatCompletion;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success, otherwise
/// [`GatewayError::Api`] with the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    if !resp.status().is_success() {
        return Err(GatewayError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read the assistant text out of a successful completion response.
///
/// An embedded `error` object becomes [`GatewayError::Api`]; a body that is
/// not a chat completion, or carries no text, becomes [`GatewayError::Format`].
pub async fn completion_text(resp: reqwest::Response) -> Result<String, GatewayError> {
    let status = resp.status().as_u16();
    let body = resp.text().await?;

    let completion: ChatCompletion =
        serde_json::from_str(&body).map_err(|e| GatewayError::Format {
            reason: format!("completion body is not a chat completion: {e}"),
            raw: excerpt(&body),
        })?;

    if let Some(error) = completion.error {
        return Err(GatewayError::Api {
            status: error.numeric_code().unwrap_or(status),
            message: error.message,
        });
    }

    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| GatewayError::Format {
            reason: "completion contained no message content".to_string(),
            raw: excerpt(&body),
        })
}

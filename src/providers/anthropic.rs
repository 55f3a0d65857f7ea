use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ApiKey;
use crate::error::RequestFailure;
use crate::model::RequestParams;
use crate::providers::http_errors::request_failure;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const EMPTY_BODY_PLACEHOLDER: &str = "<empty response body>";

#[derive(Debug, Serialize)]
struct CreateMessageRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateMessageResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub text: String,
}

fn messages_url(base_url: &str) -> String {
    format!("{}/v1/messages", base_url.trim_end_matches('/'))
}

fn api_error_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        EMPTY_BODY_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

fn classify_status(status: StatusCode, body: &str) -> RequestFailure {
    let message = api_error_message(body);
    match status.as_u16() {
        401 | 403 => RequestFailure::Authentication { status, message },
        429 => RequestFailure::RateLimited { message },
        400..=499 => RequestFailure::Rejected { status, message },
        _ => RequestFailure::Service { status, message },
    }
}

fn first_text(body: &str) -> Result<String, RequestFailure> {
    let parsed: CreateMessageResponse =
        serde_json::from_str(body).map_err(|err| RequestFailure::MalformedResponse {
            reason: err.to_string(),
        })?;

    parsed
        .content
        .into_iter()
        .find_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        })
        .ok_or(RequestFailure::MissingText)
}

pub async fn create_message(
    client: &Client,
    base_url: &str,
    api_key: &ApiKey,
    params: &RequestParams,
) -> Result<MessageResponse, RequestFailure> {
    let api_url = messages_url(base_url);
    let body = CreateMessageRequest {
        model: &params.model,
        max_tokens: params.max_tokens,
        messages: vec![WireMessage {
            role: "user",
            content: &params.prompt,
        }],
    };
    debug!(
        api_url = %api_url,
        model = %params.model,
        max_tokens = params.max_tokens,
        prompt_len = params.prompt.len(),
        "sending anthropic messages request"
    );

    let response = client
        .post(&api_url)
        .header("x-api-key", api_key.expose())
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&body)
        .send()
        .await
        .map_err(|err| {
            info!(
                api_url = %api_url,
                model = %params.model,
                error = %err,
                "anthropic request failed"
            );
            request_failure(err, &api_url)
        })?;

    let status = response.status();
    let response_body = response.text().await.map_err(|err| {
        info!(
            api_url = %api_url,
            model = %params.model,
            status = %status,
            error = %err,
            "anthropic response body could not be read"
        );
        request_failure(err, &api_url)
    })?;

    if !status.is_success() {
        info!(
            api_url = %api_url,
            model = %params.model,
            status = %status,
            response_body_len = response_body.len(),
            "anthropic returned non-success status"
        );
        return Err(classify_status(status, &response_body));
    }

    let text = first_text(&response_body).inspect_err(|err| {
        info!(
            model = %params.model,
            error = %err,
            "anthropic response could not be used"
        );
    })?;
    debug!(
        model = %params.model,
        response_len = text.len(),
        "received anthropic messages response"
    );
    Ok(MessageResponse { text })
}

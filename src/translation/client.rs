use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::capability::{TranslationCapability, TranslationError};

/// A fully built request: the directive and the raw text to translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub directive: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for OpenAI-compatible chat completion endpoints.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl TranslationClient {
    pub fn new(endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            model,
            api_key,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl TranslationCapability for TranslationClient {
    async fn translate(&self, directive: &str, content: &str) -> Result<String, TranslationError> {
        let url = self.completions_url();

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: [
                Message {
                    role: "system",
                    content: directive,
                },
                Message {
                    role: "user",
                    content,
                },
            ],
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        tracing::debug!(%url, model = %self.model, "sending chat completion request");

        let response = http_request
            .send()
            .await
            .map_err(|e| TranslationError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranslationError::Network(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(classify_status(status, body));
        }

        extract_content(&body)
    }
}

fn classify_status(status: StatusCode, body: String) -> TranslationError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TranslationError::Auth {
            status: status.as_u16(),
            body,
        },
        _ => TranslationError::Status {
            status: status.as_u16(),
            body,
        },
    }
}

/// Pulls the first choice's text out of a chat completion body.
///
/// A `null` content field is a successful empty reply; a body without any
/// choice is malformed.
fn extract_content(body: &str) -> Result<String, TranslationError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| TranslationError::MalformedResponse(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or_else(|| TranslationError::MalformedResponse("response has no choices".to_string()))
}

// Explanation service - remote collaborator that turns code into pseudocode

use super::error::ConvertError;
use super::prompt;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The remote collaborator. One request per call, no client-side timeout,
/// retry, or backoff; a dispatched request runs to completion or failure.
#[async_trait]
pub trait ExplanationService: Send + Sync {
    async fn explain(&self, fragment: &str, credential: &str) -> Result<String, ConvertError>;
}

/// HTTP implementation speaking the OpenAI-compatible chat completions
/// protocol. The wire format lives entirely here; the converter only sees
/// the `ExplanationService` seam.
pub struct HttpExplanationService {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f32,
}

impl HttpExplanationService {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            temperature: 0.2,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn build_request(&self, fragment: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: prompt::system_instruction().to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: prompt::render_user_prompt(fragment),
                },
            ],
            temperature: Some(self.temperature),
        }
    }
}

#[async_trait]
impl ExplanationService for HttpExplanationService {
    async fn explain(&self, fragment: &str, credential: &str) -> Result<String, ConvertError> {
        let request = self.build_request(fragment);

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.endpoint))
            .bearer_auth(credential)
            .json(&request)
            .send()
            .await
            .map_err(|e| ConvertError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ConvertError::Transport(e.to_string()))?;

        if !status.is_success() {
            // Prefer the upstream error message when the envelope parses
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ConvertError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            ConvertError::Transport(format!("malformed response from explanation service: {}", e))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| {
                ConvertError::Transport("explanation service returned no choices".to_string())
            })
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: UpstreamError,
}

#[derive(Deserialize)]
struct UpstreamError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_fragment_and_template() {
        let service = HttpExplanationService::new("https://api.example.com", "test-model");
        let request = service.build_request("x = y");

        assert_eq!(request.model, "test-model");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert!(request.messages[0].content.contains("pseudocode"));
        assert_eq!(request.messages[1].role, "user");
        assert!(request.messages[1].content.contains("x = y"));
    }

    #[test]
    fn test_request_serializes_to_chat_envelope() {
        let service = HttpExplanationService::new("https://api.example.com", "test-model");
        let json = serde_json::to_value(service.build_request("x = y")).unwrap();

        assert_eq!(json["model"], "test-model");
        assert_eq!(json["messages"][1]["role"], "user");
        assert!(json["temperature"].is_number());
    }

    #[test]
    fn test_error_envelope_parses_upstream_message() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.message, "Incorrect API key provided");
    }

    #[test]
    fn test_response_extracts_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"1. Set X to Y"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "1. Set X to Y");
    }
}

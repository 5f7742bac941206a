use std::time::Duration;

use anyhow::{Error, Result, anyhow, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ai::chat::ChatModel;

pub const DEFAULT_API_HOSTNAME: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "model")]
    Model,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Part {
    pub text: String,
}

/// A single role-tagged turn in a Gemini conversation.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn new(role: Role, text: &str) -> Self {
        Content {
            role,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }

    /// Concatenated text of every part
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Sampling settings sent with every request. These are fixed for the
/// lifetime of the process.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 8192,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
    generation_config: &'a GenerationConfig,
}

// {
//   "candidates": [
//     {
//       "content": {"parts": [{"text": "Hello!"}], "role": "model"},
//       "finishReason": "STOP"
//     }
//   ]
// }
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

fn model_path(model: &str) -> String {
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}

/// Send the full conversation history to Gemini and return the text of
/// the first candidate.
pub async fn generate_content(
    client: &reqwest::Client,
    contents: &[Content],
    generation_config: &GenerationConfig,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<String, Error> {
    let url = format!(
        "{}/v1beta/{}:generateContent",
        api_hostname.trim_end_matches("/"),
        model_path(model)
    );
    let payload = GenerateContentRequest {
        contents,
        generation_config,
    };

    let response = client
        .post(url)
        .query(&[("key", api_key)])
        .header("Content-Type", "application/json")
        .json(&payload)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        bail!("Gemini API error ({status}): {error_text}");
    }

    let result: GenerateContentResponse = response.json().await?;

    if let Some(err) = result.error {
        bail!("Gemini API error: {}", err.message);
    }

    let candidate = result
        .candidates
        .and_then(|c| c.into_iter().next())
        .ok_or_else(|| anyhow!("No candidates in Gemini response"))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    // Blocked or truncated candidates come back without any text
    if text.is_empty() {
        bail!(
            "Empty Gemini response (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        );
    }

    Ok(text)
}

/// `ChatModel` backed by the Gemini REST API.
pub struct GeminiClient {
    client: reqwest::Client,
    api_hostname: String,
    api_key: String,
    model: String,
    generation_config: GenerationConfig,
}

impl GeminiClient {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            generation_config: GenerationConfig::default(),
        })
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    async fn send(&self, history: &[Content]) -> Result<String, Error> {
        generate_content(
            &self.client,
            history,
            &self.generation_config,
            &self.api_hostname,
            &self.api_key,
            &self.model,
        )
        .await
    }
}

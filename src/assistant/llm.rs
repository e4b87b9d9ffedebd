//! Minimal client for the OpenAI Responses API.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct InputMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: Vec<InputMessage<'a>>,
}

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Building HTTP client")?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Send one system + user exchange and return the trimmed output text.
    pub async fn respond(&self, model: &str, system: &str, user: &str) -> Result<String> {
        let request = ResponsesRequest {
            model,
            input: vec![
                InputMessage {
                    role: "system",
                    content: system,
                },
                InputMessage {
                    role: "user",
                    content: user,
                },
            ],
        };
        let url = format!("{}/responses", self.base_url);
        debug!(%url, %model, prompt_chars = user.len(), "Sending responses request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Sending OpenAI request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenAI API error ({status}): {body}");
        }

        let body: Value = response
            .json()
            .await
            .context("Parsing OpenAI response")?;
        Ok(extract_output_text(&body))
    }
}

/// `output_text` when present, else every `output_text` content part joined.
pub fn extract_output_text(body: &Value) -> String {
    if let Some(text) = body["output_text"].as_str() {
        return text.trim().to_string();
    }

    body["output"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["content"].as_array())
                .flatten()
                .filter(|part| part["type"].as_str() == Some("output_text"))
                .filter_map(|part| part["text"].as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
        .trim()
        .to_string()
}

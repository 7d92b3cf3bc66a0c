//! LLM client - communicates with Ollama.

use anyhow::{Context, Result};
use scout_common::{
    ChatOptions, OllamaChatRequest, OllamaChatResponse, OllamaMessage, ScoutConfig,
};
use std::time::Duration;

/// Client for communicating with Ollama.
pub struct LlmClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(config: &ScoutConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.host.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Check if Ollama answers at all. Short timeout so startup stays snappy.
    pub async fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        let probe = self.client.get(&url).timeout(Duration::from_secs(2)).send().await;
        probe.map(|r| r.status().is_success()).unwrap_or(false)
    }

    /// Check if the configured model is present locally.
    pub async fn has_model(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        let response = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(_) => return false,
        };

        let Ok(json) = response.json::<serde_json::Value>().await else {
            return false;
        };
        json.get("models")
            .and_then(|m| m.as_array())
            .map(|models| {
                models.iter().any(|m| {
                    m.get("name")
                        .and_then(|n| n.as_str())
                        .map(|n| n.starts_with(&self.model))
                        .unwrap_or(false)
                })
            })
            .unwrap_or(false)
    }

    /// Send a chat with history.
    pub async fn chat_with_history(
        &self,
        messages: Vec<OllamaMessage>,
        options: ChatOptions,
    ) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);

        let request = OllamaChatRequest {
            model: self.model.clone(),
            messages,
            stream: false,
            options,
        };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Ollama")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("Ollama request failed ({}): {}", status, text);
        }

        let chat_resp: OllamaChatResponse = resp
            .json()
            .await
            .context("Failed to parse Ollama response")?;

        Ok(chat_resp.message.content.trim().to_string())
    }

    /// Send a single system+user exchange.
    pub async fn chat(
        &self,
        system_prompt: &str,
        user_message: &str,
        options: ChatOptions,
    ) -> Result<String> {
        self.chat_with_history(
            vec![
                OllamaMessage::system(system_prompt),
                OllamaMessage::user(user_message),
            ],
            options,
        )
        .await
    }
}

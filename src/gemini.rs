//! Gemini `generateContent` REST binding used by the idea form.

use serde::{Deserialize, Serialize};

pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// API key baked in at build time, as the page has no backend to hold it.
pub fn build_time_api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY").filter(|k| !k.trim().is_empty())
}

#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Self {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if it has any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

pub fn request_url(api_key: &str) -> String {
    format!("{GEMINI_ENDPOINT}/{GEMINI_MODEL}:generateContent?key={api_key}")
}

#[cfg(target_arch = "wasm32")]
pub use client::GeminiClient;

#[cfg(target_arch = "wasm32")]
mod client {
    use super::*;
    use crate::idea::TextService;
    use anyhow::{anyhow, Context};
    use gloo_net::http::Request;

    pub struct GeminiClient {
        api_key: String,
    }

    impl GeminiClient {
        pub fn new(api_key: impl Into<String>) -> Self {
            Self {
                api_key: api_key.into(),
            }
        }
    }

    impl TextService for GeminiClient {
        async fn generate_text(&self, prompt: &str) -> anyhow::Result<String> {
            if self.api_key.is_empty() {
                return Err(anyhow!("no GEMINI_API_KEY configured"));
            }
            let response = Request::post(&request_url(&self.api_key))
                .json(&GenerateRequest::new(prompt))
                .context("encode request")?
                .send()
                .await
                .context("send request")?;
            if !response.ok() {
                return Err(anyhow!("gemini returned HTTP {}", response.status()));
            }
            let body: GenerateResponse = response.json().await.context("decode response")?;
            body.text().ok_or_else(|| anyhow!("response had no candidate text"))
        }
    }
}

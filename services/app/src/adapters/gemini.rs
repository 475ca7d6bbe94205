//! services/app/src/adapters/gemini.rs
//!
//! This module contains the adapter for the remote text-generation API.
//! It implements the `GenerationService` port from the `core` crate against
//! the Gemini `generateContent` REST endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use specter_core::domain::{GeneratedAdvice, GeneratedQuote};
use specter_core::ports::{GenerationService, PortError, PortResult};
use tracing::{debug, error};

use crate::prompt;

/// Substituted when the remote model returns no usable quote text.
pub const FALLBACK_QUOTE: &str = "I don't get lucky, I make my own luck.";

/// Substituted when the advice call fails or returns an undecodable body.
pub const FALLBACK_ADVICE: &str = "Win a no-win situation by rewriting the rules.";
pub const FALLBACK_STRATEGY: &str =
    "When you're backed against the wall, break the goddamn thing down.";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements the `GenerationService` port using the Gemini API.
#[derive(Clone)]
pub struct GeminiGenerationAdapter {
    client: Client,
    api_key: String,
    base_url: String,
    quote_model: String,
    advice_model: String,
}

impl GeminiGenerationAdapter {
    /// Creates a new `GeminiGenerationAdapter`. An absent key is tolerated
    /// here; both operations enforce the credential precondition per call.
    pub fn new(api_key: Option<String>, quote_model: String, advice_model: String) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.unwrap_or_default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            quote_model,
            advice_model,
        }
    }

    /// Overrides the endpoint base URL. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builds the API URL for a given model.
    fn api_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        )
    }

    /// The shared precondition: a non-empty credential, checked before any
    /// network attempt.
    fn require_key(&self) -> PortResult<()> {
        if self.api_key.is_empty() {
            return Err(PortError::MissingCredential);
        }
        Ok(())
    }

    /// Posts a `generateContent` request and returns the decoded body.
    async fn generate(&self, model: &str, request_body: Value) -> PortResult<Value> {
        let response = self
            .client
            .post(self.api_url(model))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| PortError::Generation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PortError::Generation(format!(
                "Gemini API returned {}: {}",
                status, error_text
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| PortError::Generation(e.to_string()))
    }
}

//=========================================================================================
// Response Helpers
//=========================================================================================

/// Extracts the first candidate's concatenated text parts, if any.
fn extract_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Decodes an advice response body into the two-field shape.
fn decode_advice(response: &Value) -> PortResult<GeneratedAdvice> {
    let text = extract_text(response)
        .ok_or_else(|| PortError::MalformedResponse("response contained no text".to_string()))?;

    let value: Value = serde_json::from_str(text.trim())
        .map_err(|e| PortError::MalformedResponse(e.to_string()))?;

    let advice = value
        .get("advice")
        .and_then(Value::as_str)
        .ok_or_else(|| PortError::MalformedResponse("missing \"advice\" field".to_string()))?;
    let strategy = value
        .get("strategy")
        .and_then(Value::as_str)
        .ok_or_else(|| PortError::MalformedResponse("missing \"strategy\" field".to_string()))?;

    Ok(GeneratedAdvice {
        advice: advice.to_string(),
        strategy: strategy.to_string(),
    })
}

fn fallback_advice() -> GeneratedAdvice {
    GeneratedAdvice {
        advice: FALLBACK_ADVICE.to_string(),
        strategy: FALLBACK_STRATEGY.to_string(),
    }
}

//=========================================================================================
// `GenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl GenerationService for GeminiGenerationAdapter {
    /// Generates a short persona quote with elevated sampling randomness.
    async fn fetch_quote(&self, topic: Option<&str>) -> PortResult<GeneratedQuote> {
        self.require_key()?;

        let seed = prompt::random_seed();
        let request_body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt::quote_prompt(topic, seed) }]
            }],
            "systemInstruction": {
                "parts": [{ "text": prompt::PERSONA_INSTRUCTION }]
            },
            "generationConfig": {
                "maxOutputTokens": 100,
                "temperature": 1.0,
                "topK": 40,
                "topP": 0.95
            }
        });

        let response = self.generate(&self.quote_model, request_body).await?;
        debug!("Quote response: {}", response);

        let text = extract_text(&response).unwrap_or_else(|| FALLBACK_QUOTE.to_string());
        Ok(GeneratedQuote {
            text: text.trim().to_string(),
            topic: topic.map(str::to_string),
        })
    }

    /// Generates structured advice, substituting the fixed fallback pair for
    /// any transport, API, or decode failure.
    async fn fetch_advice(&self, situation: &str) -> PortResult<GeneratedAdvice> {
        self.require_key()?;

        let request_body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt::advice_prompt(situation) }]
            }],
            "systemInstruction": {
                "parts": [{ "text": prompt::PERSONA_INSTRUCTION }]
            },
            "generationConfig": {
                "responseMimeType": "application/json"
            }
        });

        let advice = match self
            .generate(&self.advice_model, request_body)
            .await
            .and_then(|response| decode_advice(&response))
        {
            Ok(advice) => advice,
            Err(e) => {
                error!("Advice generation failed, substituting fallback: {}", e);
                fallback_advice()
            }
        };

        Ok(advice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate_body(text: &str) -> Value {
        serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": text }]
                }
            }]
        })
    }

    #[test]
    fn extracts_first_candidate_text() {
        let body = candidate_body("You don't win by playing defense.");
        assert_eq!(
            extract_text(&body).as_deref(),
            Some("You don't win by playing defense.")
        );
    }

    #[test]
    fn concatenates_multiple_parts() {
        let body = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "Play the man, " }, { "text": "not the odds." }]
                }
            }]
        });
        assert_eq!(
            extract_text(&body).as_deref(),
            Some("Play the man, not the odds.")
        );
    }

    #[test]
    fn empty_or_missing_text_is_none() {
        assert_eq!(extract_text(&candidate_body("   ")), None);
        assert_eq!(extract_text(&serde_json::json!({ "candidates": [] })), None);
        assert_eq!(extract_text(&serde_json::json!({})), None);
    }

    #[test]
    fn decodes_well_formed_advice() {
        let body = candidate_body(
            r#"{ "advice": "Close the deal.", "strategy": "Never let them see you sweat." }"#,
        );
        let advice = decode_advice(&body).unwrap();
        assert_eq!(advice.advice, "Close the deal.");
        assert_eq!(advice.strategy, "Never let them see you sweat.");
    }

    #[test]
    fn malformed_advice_json_is_rejected() {
        let body = candidate_body("not json at all");
        assert!(matches!(
            decode_advice(&body),
            Err(PortError::MalformedResponse(_))
        ));
    }

    #[test]
    fn advice_missing_a_field_is_rejected() {
        let body = candidate_body(r#"{ "advice": "Close the deal." }"#);
        assert!(matches!(
            decode_advice(&body),
            Err(PortError::MalformedResponse(_))
        ));
    }

    #[test]
    fn fallback_pair_matches_the_published_lines() {
        let advice = fallback_advice();
        assert_eq!(advice.advice, "Win a no-win situation by rewriting the rules.");
        assert_eq!(
            advice.strategy,
            "When you're backed against the wall, break the goddamn thing down."
        );
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_request() {
        let adapter = GeminiGenerationAdapter::new(
            None,
            "quote-model".to_string(),
            "advice-model".to_string(),
        )
        // An unroutable base URL: reaching the network would error differently.
        .with_base_url("http://127.0.0.1:0");

        assert!(matches!(
            adapter.fetch_quote(Some("Risk")).await,
            Err(PortError::MissingCredential)
        ));
        assert!(matches!(
            adapter.fetch_advice("Backed against the wall.").await,
            Err(PortError::MissingCredential)
        ));
    }
}

//! Prompt construction and response normalization for the knowledge relay.
//!
//! The curator owns the single operation of this service: turn a topic
//! request into exactly one three-field knowledge record, absorbing every
//! failure into a fallback record of the same shape.

use crate::dtos::{KnowledgeRecord, KnowledgeRequest};
use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Fixed system instruction pinning the output contract: exactly one
/// fact, as a single JSON object with exactly the three named fields.
const SYSTEM_INSTRUCTION: &str = r#"You are the most widely read and witty knowledge curator in the world.
When the user gives you a topic, produce one fascinating piece of one-minute knowledge.

Hard rules:
1. Generate exactly ONE piece of knowledge. Never several.
2. Never use a JSON array ([]); return a single JSON object ({}).
3. Follow this shape exactly:
{
    "title": "a short title (with an emoji)",
    "content": "the body text (3-4 sentences)",
    "summary": "a one-line summary"
}"#;

/// Internal failure taxonomy. Never crosses the handler boundary; it only
/// exists so the fallback record can embed a precise description.
#[derive(Debug, Error)]
enum CurateError {
    #[error("{0}")]
    Provider(#[from] ProviderError),

    #[error("model returned no text")]
    EmptyResponse,

    #[error("model returned an empty list")]
    EmptyList,

    #[error("could not parse model output as JSON: {0}")]
    Unparseable(serde_json::Error),
}

/// Model output decode. A single object is the contract; an array is an
/// out-of-contract but recoverable reply.
#[derive(Deserialize)]
#[serde(untagged)]
enum ModelPayload {
    One(KnowledgeRecord),
    Many(Vec<KnowledgeRecord>),
}

pub struct KnowledgeCurator {
    provider: Arc<dyn TextProvider>,
}

impl KnowledgeCurator {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Produce a knowledge record for the request.
    ///
    /// Infallible by contract: every internal error is absorbed into the
    /// fallback record so the caller always receives a renderable
    /// three-field reply.
    pub async fn curate(&self, request: &KnowledgeRequest) -> KnowledgeRecord {
        tracing::info!(
            topic = %request.topic,
            angle = %request.angle,
            "Knowledge request received"
        );

        match self.generate(request).await {
            Ok(record) => record,
            Err(e) => {
                tracing::error!(error = %e, "Knowledge generation failed");
                KnowledgeRecord::fallback(&e.to_string())
            }
        }
    }

    async fn generate(&self, request: &KnowledgeRequest) -> Result<KnowledgeRecord, CurateError> {
        let params = GenerationParams {
            temperature: Some(request.temperature),
            top_p: Some(request.top_p),
            response_json: true,
        };

        let response = self
            .provider
            .generate(SYSTEM_INSTRUCTION, &user_prompt(request), &params)
            .await?;

        let raw = response.text.ok_or(CurateError::EmptyResponse)?;

        tracing::debug!(preview = %truncate(&raw, 100), "Model reply received");

        normalize(&raw)
    }
}

/// Per-request instruction. Topic and angle flow in verbatim.
fn user_prompt(request: &KnowledgeRequest) -> String {
    format!(
        "Topic: {}\nAngle: {}\n\n\
         Tell me exactly one fascinating fact most people do not know about \
         this topic, seen from the requested angle.",
        request.topic, request.angle
    )
}

/// Coerce the model reply into a single record: an object passes through,
/// an array is unwrapped to its head, anything else is a failure.
fn normalize(raw: &str) -> Result<KnowledgeRecord, CurateError> {
    match serde_json::from_str::<ModelPayload>(raw) {
        Ok(ModelPayload::One(record)) => Ok(record),
        Ok(ModelPayload::Many(records)) => {
            tracing::warn!(
                count = records.len(),
                "Model returned a list; taking the first entry"
            );
            records.into_iter().next().ok_or(CurateError::EmptyList)
        }
        Err(e) => Err(CurateError::Unparseable(e)),
    }
}

/// Character-boundary-safe truncation for log previews.
fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

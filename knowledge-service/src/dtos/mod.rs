//! Request and response shapes for the knowledge relay endpoint.

use serde::{Deserialize, Serialize};

/// Inbound topic request.
///
/// Nothing beyond type coercion is enforced; an empty topic is allowed
/// and simply produces a low-quality prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeRequest {
    pub topic: String,
    #[serde(default = "default_angle")]
    pub angle: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p", rename = "topP")]
    pub top_p: f32,
}

fn default_angle() -> String {
    "interesting-facts-oriented".to_string()
}

fn default_temperature() -> f32 {
    0.9
}

fn default_top_p() -> f32 {
    0.95
}

/// The single record shape used for both success and fallback replies.
///
/// Callers cannot tell the two apart by shape, only by reading the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeRecord {
    pub title: String,
    pub content: String,
    pub summary: String,
}

impl KnowledgeRecord {
    /// Fallback returned for any generation failure, with the error
    /// description embedded so a human reading the card can see what
    /// went wrong.
    pub fn fallback(description: &str) -> Self {
        Self {
            title: "Oh! The AI got lost in thought 😵".to_string(),
            content: format!(
                "A temporary error occurred. Please try again shortly.\n(error: {})",
                description
            ),
            summary: "Server communication error".to_string(),
        }
    }
}

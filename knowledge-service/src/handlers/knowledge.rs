use axum::{extract::State, Json};

use crate::dtos::{KnowledgeRecord, KnowledgeRequest};
use crate::AppState;

/// Relay endpoint.
///
/// Always answers 200: failures are encoded in the payload, never in the
/// status code, so browser front ends can render every reply the same way.
pub async fn generate_knowledge(
    State(state): State<AppState>,
    Json(request): Json<KnowledgeRequest>,
) -> Json<KnowledgeRecord> {
    Json(state.curator.curate(&request).await)
}

//! Free-form completion route
//!
//! Exercise generation and conversation analysis go straight to the LLM.
//! There is no offline fallback here, so upstream failures become 500s.

use std::sync::Arc;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::warn;
use crate::models::{ChatMessage, GenerateApiRequest};
use crate::services::Sampling;
use crate::state::AppState;
use crate::utils::errors::{FailureReason, LlmError};
use crate::utils::logging::log_api_error;
use super::error::{ApiError, ApiResult};

const GENERATE_TEMPERATURE: f32 = 0.7;
const GENERATE_MAX_TOKENS: u32 = 800;
const GENERATE_TOP_P: f32 = 0.9;

/// `POST /api/generate`
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GenerateApiRequest>,
) -> ApiResult<Value> {
    let prompt = body.prompt.filter(|p| !p.is_empty());
    let (messages, legacy) = match (prompt, body.messages) {
        (Some(prompt), _) => (vec![ChatMessage::user(prompt)], true),
        (None, Some(messages)) if !messages.is_empty() => (messages, false),
        _ => {
            return Err(ApiError::bad_request(
                "Missing required parameters. Please provide either prompt or messages.",
            ))
        }
    };

    let groq = &state.services.groq;
    let sampling = Sampling {
        model: body.model.unwrap_or_else(|| groq.sampling().model.clone()),
        temperature: body.temperature.unwrap_or(GENERATE_TEMPERATURE),
        max_tokens: body.max_tokens.unwrap_or(GENERATE_MAX_TOKENS),
        top_p: body.top_p.unwrap_or(GENERATE_TOP_P),
    };

    let outcome = tokio::time::timeout(groq.timeout(), groq.complete(&messages, &sampling))
        .await
        .unwrap_or(Err(FailureReason::Timeout));

    let content = match outcome {
        Ok(content) => content.trim().to_string(),
        Err(reason) => {
            log_api_error("groq", &reason.to_string(), Some("generate"));
            let error = LlmError::from(reason);
            if matches!(error, LlmError::MissingApiKey) {
                warn!("Generate called without GROQ_API_KEY");
                return Err(ApiError::internal(
                    "GROQ_API_KEY is not configured on the server.",
                    error.to_string(),
                ));
            }
            return Err(ApiError::internal(
                "Text generation failed. Please try again later.",
                error.to_string(),
            ));
        }
    };

    if legacy {
        Ok(Json(json!({ "text": content })))
    } else {
        Ok(Json(json!({
            "content": content,
            "model": sampling.model,
            "success": true,
        })))
    }
}

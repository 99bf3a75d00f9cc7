//! Chat proxy endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use dz_protocol::{ChatReply, ChatRequest, Provider};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST /chat: forward a conversation to the selected provider.
///
/// Provider failures are answered with an apology, never an error status.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatReply>> {
    let Json(request) = payload?;

    let provider = Provider::from_key(&request.provider).ok_or_else(|| {
        tracing::debug!(provider = %request.provider, "unknown chat provider");
        ApiError::BadRequest("Invalid provider specified.".into())
    })?;

    let reply = state.chat.reply(provider, &request.messages).await;
    Ok(Json(ChatReply { reply }))
}

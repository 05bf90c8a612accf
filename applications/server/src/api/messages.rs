/// Message API routes
use crate::{
    api::extract::{require_non_empty, ApiJson, ApiPath},
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use postbox_core::types::{is_valid_timestamp, Message, MessageId, NewMessage, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub content: String,
    pub send_at: String,
    pub send_to: i64,
    pub user_id: UserId,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: MessageId,
}

impl CreateMessageRequest {
    fn validate(&self) -> Result<()> {
        require_non_empty("content", &self.content)?;
        if !is_valid_timestamp(&self.send_at) {
            return Err(ServerError::BadRequest(
                "send_at must be formatted as YYYY-MM-DD HH:MM:SS".to_string(),
            ));
        }
        Ok(())
    }
}

fn message_not_found() -> ServerError {
    ServerError::NotFound("Message not found".to_string())
}

/// GET /api/message
pub async fn list_messages(State(app_state): State<AppState>) -> Result<Json<Vec<Message>>> {
    let messages = app_state.store.list_messages().await?;
    Ok(Json(messages))
}

/// GET /api/message/:id
pub async fn get_message(
    ApiPath(id): ApiPath<MessageId>,
    State(app_state): State<AppState>,
) -> Result<Json<Message>> {
    let message = app_state
        .store
        .get_message(id)
        .await?
        .ok_or_else(message_not_found)?;

    Ok(Json(message))
}

/// POST /api/message
pub async fn create_message(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<CreateMessageRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    req.validate()?;

    let id = app_state
        .store
        .create_message(NewMessage {
            content: req.content,
            user_id: req.user_id,
            send_to: req.send_to,
            send_at: req.send_at,
        })
        .await?;

    tracing::info!(message_id = id, user_id = req.user_id, "Message created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Message created".to_string(),
            id,
        }),
    ))
}

/// DELETE /api/message/:id
pub async fn delete_message(
    ApiPath(id): ApiPath<MessageId>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    if app_state.store.delete_message(id).await? == 0 {
        return Err(message_not_found());
    }

    tracing::info!(message_id = id, "Message deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// User API routes
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
use postbox_core::types::{NewUser, User, UserId, UserUpdate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub id: UserId,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub username: String,
    pub email: String,
    pub old_password: String,
    #[serde(default)]
    pub new_password: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: UserId,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
}

fn default_role() -> String {
    "user".to_string()
}

impl RegisterRequest {
    fn validate(&self) -> Result<()> {
        require_non_empty("username", &self.username)?;
        require_non_empty("password", &self.password)?;
        if !self.email.contains('@') {
            return Err(ServerError::BadRequest("email is not valid".to_string()));
        }
        Ok(())
    }
}

impl UpdateUserRequest {
    fn validate(&self) -> Result<()> {
        require_non_empty("username", &self.username)?;
        if let Some(new_password) = &self.new_password {
            require_non_empty("newPassword", new_password)?;
        }
        Ok(())
    }
}

fn user_not_found() -> ServerError {
    ServerError::NotFound("User not found".to_string())
}

async fn find_user(app_state: &AppState, id: UserId) -> Result<User> {
    app_state
        .store
        .get_user(id)
        .await?
        .ok_or_else(user_not_found)
}

/// GET /api/user
/// List every user
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.store.list_users().await?;
    Ok(Json(users))
}

/// GET /api/user/:id
pub async fn get_user(
    ApiPath(id): ApiPath<UserId>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user = find_user(&app_state, id).await?;
    Ok(Json(user))
}

/// POST /api/user/register
/// Hash the password and create the account
pub async fn register(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    req.validate()?;

    let password_hash = app_state.passwords.hash(&req.password).await?;

    let id = app_state
        .store
        .create_user(NewUser {
            username: req.username,
            email: req.email,
            password_hash,
            role: req.role,
        })
        .await?;

    tracing::info!(user_id = id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "User created".to_string(),
            id,
        }),
    ))
}

/// POST /api/user/login
/// Check a password against the stored hash of user `id`
pub async fn login(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<User>> {
    let user = find_user(&app_state, req.id).await?;

    if !app_state.passwords.verify(&req.password, &user.password).await? {
        tracing::warn!(user_id = req.id, "Login rejected");
        return Err(ServerError::Unauthorized("Unauthorized".to_string()));
    }

    Ok(Json(user))
}

/// PUT /api/user/:id
/// Update profile fields, and the password when `newPassword` is given.
/// The current password must always be supplied as `oldPassword`.
pub async fn update_user(
    ApiPath(id): ApiPath<UserId>,
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> Result<Json<StatusResponse>> {
    req.validate()?;

    let user = find_user(&app_state, id).await?;

    if !app_state
        .passwords
        .verify(&req.old_password, &user.password)
        .await?
    {
        tracing::warn!(user_id = id, "Update rejected: old password mismatch");
        return Err(ServerError::Unauthorized("Unauthorized".to_string()));
    }

    let password_hash = match &req.new_password {
        Some(new_password) => Some(app_state.passwords.hash(new_password).await?),
        None => None,
    };

    let affected = app_state
        .store
        .update_user(
            id,
            UserUpdate {
                username: req.username,
                email: req.email,
                password_hash,
                role: req.role,
            },
        )
        .await?;

    // Deleted between the read and the write
    if affected == 0 {
        return Err(user_not_found());
    }

    Ok(Json(StatusResponse {
        message: "User updated".to_string(),
    }))
}

/// DELETE /api/user/:id
pub async fn delete_user(
    ApiPath(id): ApiPath<UserId>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    if app_state.store.delete_user(id).await? == 0 {
        return Err(user_not_found());
    }

    tracing::info!(user_id = id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_uses_camel_case_fields() {
        let req: UpdateUserRequest = serde_json::from_value(serde_json::json!({
            "username": "a",
            "email": "a@x.com",
            "oldPassword": "secret",
            "newPassword": "fresh",
            "role": "admin"
        }))
        .unwrap();

        assert_eq!(req.old_password, "secret");
        assert_eq!(req.new_password.as_deref(), Some("fresh"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn update_request_new_password_is_optional() {
        let req: UpdateUserRequest = serde_json::from_value(serde_json::json!({
            "username": "a",
            "email": "a@x.com",
            "oldPassword": "secret"
        }))
        .unwrap();

        assert!(req.new_password.is_none());
        assert_eq!(req.role, "user");
    }

    #[test]
    fn register_validation() {
        let mut req = RegisterRequest {
            username: "a".to_string(),
            email: "a@x.com".to_string(),
            password: "secret".to_string(),
            role: "user".to_string(),
        };
        assert!(req.validate().is_ok());

        req.email = "not-an-email".to_string();
        assert!(matches!(req.validate(), Err(ServerError::BadRequest(_))));

        req.email = "a@x.com".to_string();
        req.password = "   ".to_string();
        assert!(matches!(req.validate(), Err(ServerError::BadRequest(_))));
    }
}

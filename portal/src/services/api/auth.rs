//! # Authentication Endpoints
//!
//! Login, registration and password change.

use shared::{AuthResponse, ChangePasswordRequest, LoginRequest, MessageResponse, RegisterRequest, UserInfo};

use super::client::{handle_response, ApiClient};
use crate::core::error::ApiError;

/// Login with username and password.
///
/// On success the token and role are written to the injected session store,
/// which is what the rest of the client reads on every authorized request.
#[tracing::instrument(skip(client, password), fields(username = %username))]
pub async fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    tracing::info!("attempting login");

    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response = client
        .client
        .post(client.url("/auth/login"))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "login network error");
            ApiError::Transport(e.to_string())
        })?;

    let auth: AuthResponse = handle_response(response).await?;
    client
        .session_store()
        .store(auth.token.clone(), auth.role);

    tracing::info!(role = %auth.role, "login successful");
    Ok(auth)
}

/// Register a new account. Unauthenticated by design.
#[tracing::instrument(skip(client, request), fields(username = %request.username))]
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<UserInfo, ApiError> {
    let response = client
        .client
        .post(client.url("/auth/register"))
        .json(request)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

/// Change the current user's password.
pub async fn change_password(
    client: &ApiClient,
    old_password: &str,
    new_password: &str,
) -> Result<MessageResponse, ApiError> {
    let request = ChangePasswordRequest {
        old_password: old_password.to_string(),
        new_password: new_password.to_string(),
    };

    let response = client
        .authorize(client.client.put(client.url("/auth/password")))
        .json(&request)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

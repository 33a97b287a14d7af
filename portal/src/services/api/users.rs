//! # User Administration Endpoints
//!
//! Account listing, deletion and status control. All admin-gated on the
//! server; the client only shapes the requests.

use shared::{AccountStatus, MessageResponse, UpdateUserStatusRequest, UserAccount};

use super::client::{handle_response, ApiClient};
use crate::core::error::ApiError;

/// List all user accounts.
pub async fn list_users(client: &ApiClient) -> Result<Vec<UserAccount>, ApiError> {
    let response = client
        .authorize(client.client.get(client.url("/users")))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

/// Delete a user account.
#[tracing::instrument(skip(client))]
pub async fn delete_user(client: &ApiClient, id: i64) -> Result<MessageResponse, ApiError> {
    let response = client
        .authorize(client.client.delete(client.url(&format!("/users/{id}"))))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

/// Enable or disable a user account.
#[tracing::instrument(skip(client))]
pub async fn update_user_status(
    client: &ApiClient,
    id: i64,
    status: AccountStatus,
) -> Result<MessageResponse, ApiError> {
    let request = UpdateUserStatusRequest { status };

    let response = client
        .authorize(client.client.put(client.url(&format!("/users/{id}/status"))))
        .json(&request)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

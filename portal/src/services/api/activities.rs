//! # Activity Endpoints
//!
//! Activity browsing, administration and per-activity registration listing.

use shared::{Activity, ActivityPayload, MessageResponse, Registration};

use super::client::{handle_response, ApiClient};
use crate::core::error::ApiError;

/// List activities open for registration (volunteer view).
pub async fn list_activities(client: &ApiClient) -> Result<Vec<Activity>, ApiError> {
    let response = client
        .authorize(client.client.get(client.url("/activities")))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

/// List all activities regardless of status (admin view).
pub async fn list_all_activities(client: &ApiClient) -> Result<Vec<Activity>, ApiError> {
    let response = client
        .authorize(client.client.get(client.url("/admin/activities")))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

/// Create a new activity.
#[tracing::instrument(skip(client, payload), fields(title = %payload.title))]
pub async fn create_activity(
    client: &ApiClient,
    payload: &ActivityPayload,
) -> Result<Activity, ApiError> {
    let response = client
        .authorize(client.client.post(client.url("/activities")))
        .json(payload)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "activity creation network error");
            ApiError::Transport(e.to_string())
        })?;

    handle_response(response).await
}

/// Update an existing activity.
#[tracing::instrument(skip(client, payload))]
pub async fn update_activity(
    client: &ApiClient,
    id: i64,
    payload: &ActivityPayload,
) -> Result<Activity, ApiError> {
    let response = client
        .authorize(client.client.put(client.url(&format!("/activities/{id}"))))
        .json(payload)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

/// Delete an activity.
#[tracing::instrument(skip(client))]
pub async fn delete_activity(client: &ApiClient, id: i64) -> Result<MessageResponse, ApiError> {
    let response = client
        .authorize(client.client.delete(client.url(&format!("/activities/{id}"))))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

/// List registrations under an activity.
pub async fn list_activity_registrations(
    client: &ApiClient,
    activity_id: i64,
) -> Result<Vec<Registration>, ApiError> {
    let response = client
        .authorize(
            client
                .client
                .get(client.url(&format!("/activities/{activity_id}/registrations"))),
        )
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

//! # Volunteer Endpoints
//!
//! The caller's own profile (`/volunteer/my-info`) and the admin roster
//! (`/volunteers`).

use shared::{MessageResponse, VolunteerPayload, VolunteerProfile};

use super::client::{handle_response, ApiClient};
use crate::core::error::ApiError;

/// Fetch the caller's own volunteer profile.
pub async fn my_info(client: &ApiClient) -> Result<VolunteerProfile, ApiError> {
    let response = client
        .authorize(client.client.get(client.url("/volunteer/my-info")))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

/// Update the caller's own volunteer profile.
#[tracing::instrument(skip(client, payload), fields(name = %payload.name))]
pub async fn update_my_info(
    client: &ApiClient,
    payload: &VolunteerPayload,
) -> Result<VolunteerProfile, ApiError> {
    let response = client
        .authorize(client.client.put(client.url("/volunteer/my-info")))
        .json(payload)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

/// List all volunteers.
pub async fn list_volunteers(client: &ApiClient) -> Result<Vec<VolunteerProfile>, ApiError> {
    let response = client
        .authorize(client.client.get(client.url("/volunteers")))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

/// Create a volunteer record.
#[tracing::instrument(skip(client, payload), fields(name = %payload.name))]
pub async fn create_volunteer(
    client: &ApiClient,
    payload: &VolunteerPayload,
) -> Result<VolunteerProfile, ApiError> {
    let response = client
        .authorize(client.client.post(client.url("/volunteers")))
        .json(payload)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

/// Update a volunteer record.
#[tracing::instrument(skip(client, payload))]
pub async fn update_volunteer(
    client: &ApiClient,
    id: i64,
    payload: &VolunteerPayload,
) -> Result<VolunteerProfile, ApiError> {
    let response = client
        .authorize(client.client.put(client.url(&format!("/volunteers/{id}"))))
        .json(payload)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

/// Delete a volunteer record.
#[tracing::instrument(skip(client))]
pub async fn delete_volunteer(client: &ApiClient, id: i64) -> Result<MessageResponse, ApiError> {
    let response = client
        .authorize(client.client.delete(client.url(&format!("/volunteers/{id}"))))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

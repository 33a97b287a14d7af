//! # Registration Endpoints
//!
//! Approval workflow for activity registrations.

use shared::{MessageResponse, RegistrationStatus, UpdateRegistrationStatusRequest};

use super::client::{handle_response, ApiClient};
use crate::core::error::ApiError;

/// Approve or reject a registration.
#[tracing::instrument(skip(client))]
pub async fn update_registration_status(
    client: &ApiClient,
    id: i64,
    status: RegistrationStatus,
) -> Result<MessageResponse, ApiError> {
    let request = UpdateRegistrationStatusRequest { status };

    let response = client
        .authorize(
            client
                .client
                .put(client.url(&format!("/registrations/{id}/status"))),
        )
        .json(&request)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    handle_response(response).await
}

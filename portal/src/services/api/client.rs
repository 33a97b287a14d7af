//! # API Client
//!
//! Main HTTP client for backend API communication.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::ErrorResponse;

use crate::app::session::SessionStore;
use crate::config::Config;
use crate::core::error::{ApiError, GENERIC_REQUEST_FAILURE};

/// HTTP client for the volunteer activity API.
///
/// Maintains a connection pool and carries the injected session store:
/// every request re-reads a session snapshot to decide whether to attach
/// the bearer header. The client never retries and enforces no timeout
/// unless one is configured; the transport's defaults apply otherwise.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(config: &Config, session: Arc<SessionStore>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    /// The session store this client reads tokens from.
    pub fn session_store(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Drop the local session. No remote call is involved.
    pub fn logout(&self) {
        tracing::info!("clearing session");
        self.session.clear();
    }

    /// Full URL for a path under the API base.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Attach the bearer header when the current session holds a token.
    /// Without a token the header is omitted entirely, never sent malformed.
    pub(crate) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.snapshot().token {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }
}

/// Decode a response uniformly across all operations.
///
/// Non-success statuses yield [`ApiError::Api`] with the server's message
/// when the error body is parseable, the generic fallback otherwise. A
/// success status with an empty or undecodable body yields
/// [`ApiError::MalformedResponse`].
pub(crate) async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_body(status, &body)
}

pub(crate) fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, ApiError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| GENERIC_REQUEST_FAILURE.to_string());
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }

    if body.is_empty() {
        return Err(ApiError::MalformedResponse);
    }

    serde_json::from_slice(body).map_err(|_| ApiError::MalformedResponse)
}

// Implement ApiService for ApiClient by delegating to the endpoint modules.
#[async_trait::async_trait]
impl crate::core::service::ApiService for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<shared::AuthResponse, ApiError> {
        super::auth::login(self, username, password).await
    }

    async fn register(&self, request: &shared::RegisterRequest) -> Result<shared::UserInfo, ApiError> {
        super::auth::register(self, request).await
    }

    async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<shared::MessageResponse, ApiError> {
        super::auth::change_password(self, old_password, new_password).await
    }

    async fn list_users(&self) -> Result<Vec<shared::UserAccount>, ApiError> {
        super::users::list_users(self).await
    }

    async fn delete_user(&self, id: i64) -> Result<shared::MessageResponse, ApiError> {
        super::users::delete_user(self, id).await
    }

    async fn update_user_status(
        &self,
        id: i64,
        status: shared::AccountStatus,
    ) -> Result<shared::MessageResponse, ApiError> {
        super::users::update_user_status(self, id, status).await
    }

    async fn list_activities(&self) -> Result<Vec<shared::Activity>, ApiError> {
        super::activities::list_activities(self).await
    }

    async fn list_all_activities(&self) -> Result<Vec<shared::Activity>, ApiError> {
        super::activities::list_all_activities(self).await
    }

    async fn create_activity(
        &self,
        payload: &shared::ActivityPayload,
    ) -> Result<shared::Activity, ApiError> {
        super::activities::create_activity(self, payload).await
    }

    async fn update_activity(
        &self,
        id: i64,
        payload: &shared::ActivityPayload,
    ) -> Result<shared::Activity, ApiError> {
        super::activities::update_activity(self, id, payload).await
    }

    async fn delete_activity(&self, id: i64) -> Result<shared::MessageResponse, ApiError> {
        super::activities::delete_activity(self, id).await
    }

    async fn list_activity_registrations(
        &self,
        activity_id: i64,
    ) -> Result<Vec<shared::Registration>, ApiError> {
        super::activities::list_activity_registrations(self, activity_id).await
    }

    async fn update_registration_status(
        &self,
        id: i64,
        status: shared::RegistrationStatus,
    ) -> Result<shared::MessageResponse, ApiError> {
        super::registrations::update_registration_status(self, id, status).await
    }

    async fn my_info(&self) -> Result<shared::VolunteerProfile, ApiError> {
        super::volunteers::my_info(self).await
    }

    async fn update_my_info(
        &self,
        payload: &shared::VolunteerPayload,
    ) -> Result<shared::VolunteerProfile, ApiError> {
        super::volunteers::update_my_info(self, payload).await
    }

    async fn list_volunteers(&self) -> Result<Vec<shared::VolunteerProfile>, ApiError> {
        super::volunteers::list_volunteers(self).await
    }

    async fn create_volunteer(
        &self,
        payload: &shared::VolunteerPayload,
    ) -> Result<shared::VolunteerProfile, ApiError> {
        super::volunteers::create_volunteer(self, payload).await
    }

    async fn update_volunteer(
        &self,
        id: i64,
        payload: &shared::VolunteerPayload,
    ) -> Result<shared::VolunteerProfile, ApiError> {
        super::volunteers::update_volunteer(self, id, payload).await
    }

    async fn delete_volunteer(&self, id: i64) -> Result<shared::MessageResponse, ApiError> {
        super::volunteers::delete_volunteer(self, id).await
    }
}

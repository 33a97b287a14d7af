//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{
    AccountStatus, Activity, ActivityPayload, AuthResponse, MessageResponse, Registration,
    RegistrationStatus, RegisterRequest, UserAccount, UserInfo, VolunteerPayload,
    VolunteerProfile,
};

use crate::core::error::ApiError;

/// Trait covering every operation of the remote volunteer activity API.
///
/// Implemented by [`crate::services::api::ApiClient`]; test doubles implement
/// it to exercise screens without a network.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Login with username and password. Persists the session on success.
    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError>;

    /// Register a new account.
    async fn register(&self, request: &RegisterRequest) -> Result<UserInfo, ApiError>;

    /// Change the current user's password.
    async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError>;

    /// List all user accounts (admin).
    async fn list_users(&self) -> Result<Vec<UserAccount>, ApiError>;

    /// Delete a user account (admin).
    async fn delete_user(&self, id: i64) -> Result<MessageResponse, ApiError>;

    /// Enable or disable a user account (admin).
    async fn update_user_status(
        &self,
        id: i64,
        status: AccountStatus,
    ) -> Result<MessageResponse, ApiError>;

    /// List activities open for registration (volunteer view).
    async fn list_activities(&self) -> Result<Vec<Activity>, ApiError>;

    /// List all activities regardless of status (admin view).
    async fn list_all_activities(&self) -> Result<Vec<Activity>, ApiError>;

    /// Create a new activity (admin).
    async fn create_activity(&self, payload: &ActivityPayload) -> Result<Activity, ApiError>;

    /// Update an existing activity (admin).
    async fn update_activity(
        &self,
        id: i64,
        payload: &ActivityPayload,
    ) -> Result<Activity, ApiError>;

    /// Delete an activity (admin).
    async fn delete_activity(&self, id: i64) -> Result<MessageResponse, ApiError>;

    /// List registrations under an activity (admin).
    async fn list_activity_registrations(
        &self,
        activity_id: i64,
    ) -> Result<Vec<Registration>, ApiError>;

    /// Approve or reject a registration (admin).
    async fn update_registration_status(
        &self,
        id: i64,
        status: RegistrationStatus,
    ) -> Result<MessageResponse, ApiError>;

    /// Fetch the caller's own volunteer profile.
    async fn my_info(&self) -> Result<VolunteerProfile, ApiError>;

    /// Update the caller's own volunteer profile.
    async fn update_my_info(&self, payload: &VolunteerPayload)
        -> Result<VolunteerProfile, ApiError>;

    /// List all volunteers (admin).
    async fn list_volunteers(&self) -> Result<Vec<VolunteerProfile>, ApiError>;

    /// Create a volunteer record (admin).
    async fn create_volunteer(
        &self,
        payload: &VolunteerPayload,
    ) -> Result<VolunteerProfile, ApiError>;

    /// Update a volunteer record (admin).
    async fn update_volunteer(
        &self,
        id: i64,
        payload: &VolunteerPayload,
    ) -> Result<VolunteerProfile, ApiError>;

    /// Delete a volunteer record (admin).
    async fn delete_volunteer(&self, id: i64) -> Result<MessageResponse, ApiError>;
}

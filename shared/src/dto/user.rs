use serde::{Deserialize, Serialize};

use super::auth::Role;

/// Account standing controlled by administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Disabled,
}

/// User account as listed on the administration screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub status: AccountStatus,
    pub created_at: String,
}

/// Status update request (`PUT /users/{id}/status`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserStatusRequest {
    pub status: AccountStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_update_body_shape() {
        let request = UpdateUserStatusRequest {
            status: AccountStatus::Disabled,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"status":"disabled"}"#
        );
    }
}

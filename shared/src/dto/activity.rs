use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of an activity as the server reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Open,
    Closed,
    Finished,
}

/// A volunteer activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub capacity: u32,
    pub registered_count: u32,
    pub status: ActivityStatus,
}

/// Create/update body for an activity (`POST /activities`, `PUT /activities/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityPayload {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub capacity: u32,
}

/// State of a volunteer's registration for an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
}

/// One registration row under an activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Registration {
    pub id: i64,
    pub activity_id: i64,
    pub volunteer_id: i64,
    pub volunteer_name: String,
    pub status: RegistrationStatus,
    pub created_at: String,
}

/// Status update request (`PUT /registrations/{id}/status`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateRegistrationStatusRequest {
    pub status: RegistrationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_activity_payload_round_trip() {
        let payload = ActivityPayload {
            title: "Park cleanup".to_string(),
            description: "Pick up litter along the river path".to_string(),
            location: "Riverside Park".to_string(),
            start_time: Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            capacity: 20,
        };

        let json = serde_json::to_string(&payload).unwrap();
        let parsed: ActivityPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn test_registration_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&UpdateRegistrationStatusRequest {
                status: RegistrationStatus::Approved,
            })
            .unwrap(),
            r#"{"status":"approved"}"#
        );
    }
}

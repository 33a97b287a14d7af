use serde::{Deserialize, Serialize};

/// Volunteer profile, either the caller's own (`/volunteer/my-info`) or a
/// row on the admin volunteer roster (`/volunteers`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolunteerProfile {
    pub id: i64,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    pub joined_at: String,
}

/// Create/update body for a volunteer, also used for my-info updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolunteerPayload {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volunteer_payload_round_trip() {
        let payload = VolunteerPayload {
            name: "Alice Chen".to_string(),
            phone: "13812345678".to_string(),
            email: Some("alice@example.com".to_string()),
            skills: None,
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("skills"));

        let parsed: VolunteerPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, payload);
    }
}

//! Integration tests for the API client against a local stub server.
//!
//! The stub implements just enough of the volunteer activity API to verify
//! the client's request shaping: bearer header handling, error message
//! extraction and the empty-success-body anomaly.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};

use portal::{ApiClient, ApiError, ApiService, Config, SessionStore};
use shared::{
    AuthResponse, ErrorResponse, LoginRequest, MessageResponse, Role, UserInfo, VolunteerProfile,
};

const TEST_TOKEN: &str = "test-token";

async fn login(
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, Json<ErrorResponse>)> {
    if body.username == "alice" && body.password == "Secret123" {
        Ok(Json(AuthResponse {
            user: UserInfo {
                id: 1,
                username: "alice".to_string(),
                created_at: "2024-01-01T00:00:00Z".to_string(),
            },
            token: TEST_TOKEN.to_string(),
            role: Role::Volunteer,
            message: "Login successful".to_string(),
        }))
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                message: Some("invalid username or password".to_string()),
            }),
        ))
    }
}

async fn list_volunteers(
    headers: HeaderMap,
) -> Result<Json<Vec<VolunteerProfile>>, (StatusCode, Json<ErrorResponse>)> {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {TEST_TOKEN}"))
        .unwrap_or(false);

    if !authorized {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                message: Some("unauthorized".to_string()),
            }),
        ));
    }

    Ok(Json(vec![VolunteerProfile {
        id: 7,
        name: "Alice Chen".to_string(),
        phone: "13812345678".to_string(),
        email: None,
        skills: None,
        joined_at: "2024-02-01T00:00:00Z".to_string(),
    }]))
}

async fn delete_volunteer(
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    if id == 5 {
        Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                message: Some("not found".to_string()),
            }),
        ))
    } else {
        Ok(Json(MessageResponse {
            message: "deleted".to_string(),
        }))
    }
}

// 200 with a completely empty body, which the client must reject.
async fn empty_activities() -> StatusCode {
    StatusCode::OK
}

async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/volunteers", get(list_volunteers))
        .route("/api/volunteers/{id}", delete(delete_volunteer))
        .route("/api/activities", get(empty_activities));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn test_client(base_url: String) -> (ApiClient, Arc<SessionStore>) {
    let config = Config {
        api_base_url: base_url,
        session_file: PathBuf::from("unused.json"),
        request_timeout: None,
    };
    let session = Arc::new(SessionStore::in_memory());
    (ApiClient::new(&config, session.clone()), session)
}

#[tokio::test]
async fn test_login_persists_session() {
    let base = spawn_stub().await;
    let (client, session) = test_client(base);

    let auth = client.login("alice", "Secret123").await.unwrap();
    assert_eq!(auth.user.username, "alice");

    let snapshot = session.snapshot();
    assert_eq!(snapshot.token.as_deref(), Some(TEST_TOKEN));
    assert_eq!(snapshot.role, Some(Role::Volunteer));
}

#[tokio::test]
async fn test_login_failure_surfaces_message_and_keeps_session_clear() {
    let base = spawn_stub().await;
    let (client, session) = test_client(base);

    let err = client.login("alice", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "invalid username or password");
    assert_eq!(err.status(), Some(401));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_bearer_header_attached_iff_token_present() {
    let base = spawn_stub().await;
    let (client, session) = test_client(base);

    // No token: header omitted, server rejects.
    let err = client.list_volunteers().await.unwrap_err();
    assert_eq!(err.status(), Some(401));

    session.store(TEST_TOKEN.to_string(), Role::Admin);
    let volunteers = client.list_volunteers().await.unwrap();
    assert_eq!(volunteers.len(), 1);
    assert_eq!(volunteers[0].name, "Alice Chen");
}

#[tokio::test]
async fn test_delete_error_carries_server_message() {
    let base = spawn_stub().await;
    let (client, session) = test_client(base);
    session.store(TEST_TOKEN.to_string(), Role::Admin);

    let err = client.delete_volunteer(5).await.unwrap_err();
    assert_eq!(err.to_string(), "not found");

    let ok = client.delete_volunteer(6).await.unwrap();
    assert_eq!(ok.message, "deleted");
}

#[tokio::test]
async fn test_empty_success_body_is_malformed() {
    let base = spawn_stub().await;
    let (client, session) = test_client(base);
    session.store(TEST_TOKEN.to_string(), Role::Volunteer);

    let err = client.list_activities().await.unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let base = spawn_stub().await;
    let (client, session) = test_client(base);

    client.login("alice", "Secret123").await.unwrap();
    assert!(session.is_authenticated());

    client.logout();
    assert!(!session.is_authenticated());
}

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

use sportshub::{
    build_router, AppState, InMemoryMatchRepository, InMemoryPlayerRepository,
    InMemoryTeamRepository,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// Full application wired onto fresh in-memory repositories, driven through
/// the router exactly like an HTTP client would.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let state = AppState::new(
            Arc::new(InMemoryMatchRepository::new()),
            Arc::new(InMemoryTeamRepository::new()),
            Arc::new(InMemoryPlayerRepository::new()),
        );
        Self {
            router: build_router(state),
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    // ------------------------------------------------------------------
    // Workflow shortcuts
    // ------------------------------------------------------------------

    /// Register a team and return its id.
    pub async fn create_team(&self, name: &str, sport: &str) -> String {
        let (status, body) = self
            .post(
                "/teams",
                serde_json::json!({ "name": name, "sport": sport }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create_team failed: {body}");
        body["id"].as_str().unwrap().to_string()
    }

    /// Schedule a match and return its id.
    pub async fn create_match(&self, sport: &str, home: &str, away: &str) -> String {
        let (status, body) = self
            .post(
                "/matches",
                serde_json::json!({
                    "sport": sport,
                    "home_team": home,
                    "away_team": away,
                    "start_time": "2025-03-10T17:00:00Z",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create_match failed: {body}");
        body["id"].as_str().unwrap().to_string()
    }

    /// Record a final score and mark the match completed.
    pub async fn finish_match(&self, match_id: &str, home: u32, away: u32) {
        let (status, body) = self
            .put(
                &format!("/matches/{match_id}/score"),
                serde_json::json!({ "home": home, "away": away }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "score update failed: {body}");

        let (status, body) = self
            .put(
                &format!("/matches/{match_id}/status"),
                serde_json::json!({ "status": "completed" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "status update failed: {body}");
    }

    /// Add a player to a roster and return their id.
    pub async fn create_player(&self, name: &str, team_id: &str) -> String {
        let (status, body) = self
            .post(
                "/players",
                serde_json::json!({ "name": name, "team_id": team_id }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create_player failed: {body}");
        body["id"].as_str().unwrap().to_string()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

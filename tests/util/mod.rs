//! Shared helpers for controller integration tests

use axum::{body::to_bytes, response::Response};
use fantasy_test_utils::TestContext;
use mle_fantasy::server::model::{app::AppState, session::user::SessionUserId};

/// Extension trait for TestContext to build the application state and log users in
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;

    fn login(&self, user_id: i32) -> impl std::future::Future<Output = ()>;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state::<AppState>()
    }

    async fn login(&self, user_id: i32) {
        SessionUserId::insert(&self.session, user_id)
            .await
            .expect("Failed to insert user ID into session");
    }
}

/// Read the `error` message of a JSON error response
pub async fn error_message(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body: serde_json::Value =
        serde_json::from_slice(&bytes).expect("Response body is not JSON");

    body["error"].as_str().unwrap_or_default().to_string()
}

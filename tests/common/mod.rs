#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use campus::router::init_router;
use campus::state::AppState;
use campus_auth::create_access_token;
use campus_config::{CorsConfig, JwtConfig};
use campus_core::{LookupError, MembershipLookup, ProfileLookup};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test-secret-for-integration-tests";

/// In-memory profile and membership store with call counters.
///
/// Clones share storage, so a test can keep a handle after moving one into
/// the app state and still edit rows or read the counters.
#[derive(Clone, Default)]
pub struct FakeDirectory {
    profiles: Arc<Mutex<HashMap<Uuid, Option<String>>>>,
    memberships: Arc<Mutex<HashMap<(Uuid, Uuid), Vec<String>>>>,
    failing: Arc<Mutex<bool>>,
    pub profile_calls: Arc<AtomicUsize>,
    pub membership_calls: Arc<AtomicUsize>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, user_id: Uuid, user_type: Option<&str>) -> Self {
        self.set_profile(user_id, user_type);
        self
    }

    pub fn with_membership(self, department_id: Uuid, user_id: Uuid, roles: &[&str]) -> Self {
        self.memberships.lock().unwrap().insert(
            (department_id, user_id),
            roles.iter().map(|r| r.to_string()).collect(),
        );
        self
    }

    pub fn failing(self) -> Self {
        *self.failing.lock().unwrap() = true;
        self
    }

    pub fn set_profile(&self, user_id: Uuid, user_type: Option<&str>) {
        self.profiles
            .lock()
            .unwrap()
            .insert(user_id, user_type.map(str::to_string));
    }

    pub fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }

    pub fn membership_calls(&self) -> usize {
        self.membership_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileLookup for FakeDirectory {
    async fn user_type(&self, user_id: Uuid) -> Result<Option<String>, LookupError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        if *self.failing.lock().unwrap() {
            return Err(LookupError::new("connection refused"));
        }
        Ok(self.profiles.lock().unwrap().get(&user_id).cloned().flatten())
    }
}

#[async_trait]
impl MembershipLookup for FakeDirectory {
    async fn active_roles(
        &self,
        department_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<String>, LookupError> {
        self.membership_calls.fetch_add(1, Ordering::SeqCst);
        if *self.failing.lock().unwrap() {
            return Err(LookupError::new("connection refused"));
        }
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .get(&(department_id, user_id))
            .cloned()
            .unwrap_or_default())
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        audience: None,
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app(directory: FakeDirectory) -> Router {
    let state = AppState::new(
        directory,
        test_jwt_config(),
        CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    );
    init_router(state)
}

pub fn bearer_for(user_id: Uuid) -> String {
    let token = create_access_token(user_id, "user@example.edu", &test_jwt_config()).unwrap();
    format!("Bearer {}", token)
}

/// Sends a GET request and returns the status with the decoded JSON body.
pub async fn get_json(
    app: Router,
    uri: &str,
    authorization: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, body)
}

/// Asserts that every flag in a serialized capability set is false.
pub fn assert_all_false(capabilities: &serde_json::Value) {
    let flags = capabilities.as_object().expect("capabilities should be an object");
    assert!(!flags.is_empty());
    for (name, value) in flags {
        assert_eq!(value, &serde_json::Value::Bool(false), "flag `{}` should be false", name);
    }
}

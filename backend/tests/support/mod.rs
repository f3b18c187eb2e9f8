#![allow(dead_code)]

use std::sync::Mutex;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use roman_numeral::config::CONFIG_PATH_ENV;
use roman_numeral::http::{create_router, AppState};

/// Every variable `ServerConfig::load` reads.
const SERVER_ENV: [&str; 5] = [CONFIG_PATH_ENV, "HOST", "PORT", "RUST_LOG", "LOG_FORMAT"];

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with only `vars` set among the server's environment variables.
///
/// Holds a process-wide lock for the duration; previous values come back
/// when the guard drops, including on panic.
pub fn with_server_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = EnvRestore::capture();
    for key in SERVER_ENV {
        std::env::remove_var(key);
    }
    for (key, value) in vars {
        std::env::set_var(key, value);
    }
    f()
}

struct EnvRestore(Vec<(&'static str, Option<String>)>);

impl EnvRestore {
    fn capture() -> Self {
        Self(SERVER_ENV.iter().map(|k| (*k, std::env::var(k).ok())).collect())
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (key, value) in &self.0 {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}

/// Router over a fresh state, plus the state for inspecting metrics.
pub fn test_app() -> (Router, AppState) {
    let state = AppState::default();
    (create_router(state.clone()), state)
}

/// Response pieces collected from a single request.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Send a GET through the router without binding a socket.
pub async fn get(router: &Router, uri: &str) -> TestResponse {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

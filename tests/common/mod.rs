#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

/// Router over a fresh SQLite file; the file is removed when dropped.
pub struct TestApp {
    pub app: Router,
    path: PathBuf,
}

impl TestApp {
    pub async fn spawn(tag: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "classroom-{tag}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));

        let cfg = classroom_api::Config {
            database_url: format!("sqlite:{}", path.display()),
            ..classroom_api::Config::default()
        };
        let pool = classroom_api::db::connect(&cfg)
            .await
            .expect("failed to open database");
        classroom_api::db::init_schema(&pool)
            .await
            .expect("failed to init schema");

        let state = classroom_api::router::ClassroomState::new(pool);
        let app = classroom_api::router::classroom_router(state);
        Self { app, path }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let resp = self
            .app
            .clone()
            .oneshot(builder.body(body).expect("failed to build request"))
            .await
            .expect("request failed");

        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body was not json")
        };
        (status, json)
    }

    pub async fn raw_post(&self, uri: &str, raw: &str) -> (StatusCode, Value) {
        let resp = self
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(raw.to_string()))
                    .expect("failed to build request"),
            )
            .await
            .expect("request failed");
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        (
            status,
            serde_json::from_slice(&bytes).expect("response body was not json"),
        )
    }

    pub async fn create_instructor(&self, name: &str) -> i64 {
        let (status, body) = self
            .request(
                "POST",
                "/instructors/",
                Some(serde_json::json!({
                    "name": name,
                    "age": 38,
                    "class_assignment": "Class A"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["id"].as_i64().expect("id missing")
    }

    pub async fn create_student(&self, name: &str, instructor_id: i64) -> i64 {
        let (status, body) = self
            .request(
                "POST",
                "/students/",
                Some(serde_json::json!({
                    "name": name,
                    "age": 11,
                    "instructor_id": instructor_id
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["id"].as_i64().expect("id missing")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

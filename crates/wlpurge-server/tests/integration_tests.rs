//! Integration tests for the purge server
//!
//! Exercises the full flow through the router: stored-record events
//! against a real directory, admin toggling, and the dedup cache.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;
use wlpurge_engine::{PurgeConfig, PurgeEngine, PurgeGate};
use wlpurge_server::handlers::{create_router, AppState, RecordStoredResponse};
use wlpurge_worklist::PassthroughDecoder;

fn test_state(dir: &Path, enabled: bool) -> AppState {
    let config = PurgeConfig::new(dir.join("worklists")).with_cache_dir(dir.join("cache"));
    std::fs::create_dir_all(&config.worklist_dir).unwrap();
    std::fs::create_dir_all(&config.cache_dir).unwrap();
    let engine = PurgeEngine::new(config, PurgeGate::new(enabled), PassthroughDecoder::new());
    AppState {
        engine: Arc::new(engine),
    }
}

fn write_worklist(dir: &Path, name: &str, study: &str, accession: &str) -> std::path::PathBuf {
    let path = dir.join("worklists").join(name);
    let body = format!(r#"{{"0020,000d": "{}", "0008,0050": "{}"}}"#, study, accession);
    std::fs::write(&path, body).unwrap();
    path
}

fn event_request(id: &str, study: &str, accession: &str) -> Request<Body> {
    let record = format!(
        r#"{{"StudyInstanceUID": "{}", "AccessionNumber": "{}"}}"#,
        study, accession
    );
    let payload = serde_json::json!({ "id": id, "record": record });
    Request::builder()
        .method("POST")
        .uri("/events/record-stored")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_event_purges_matching_file() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path(), true);
    let app = create_router(state);

    let a = write_worklist(dir.path(), "a.wl", "1.2.3", "");
    let b = write_worklist(dir.path(), "b.wl", "9.9.9", "");

    let response = app
        .oneshot(event_request("rec-1", "1.2.3", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let parsed: RecordStoredResponse = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(parsed.outcome, "purged");
    assert_eq!(parsed.purged_path.as_deref(), Some(a.to_str().unwrap()));
    assert!(!a.exists());
    assert!(b.exists());

    // The processed pair landed in the day's cache file.
    let cache_files: Vec<_> = std::fs::read_dir(dir.path().join("cache"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(cache_files.len(), 1);
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&cache_files[0]).unwrap()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["study"], "1.2.3");
}

#[tokio::test]
async fn test_repeated_event_is_deduplicated() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path(), true);
    let app = create_router(state);

    write_worklist(dir.path(), "a.wl", "1.2.3", "ACC1");

    let first = app
        .clone()
        .oneshot(event_request("rec-1", "1.2.3", "ACC1"))
        .await
        .unwrap();
    let parsed: RecordStoredResponse = serde_json::from_str(&body_text(first).await).unwrap();
    assert_eq!(parsed.outcome, "purged");

    let second = app
        .oneshot(event_request("rec-1", "1.2.3", "ACC1"))
        .await
        .unwrap();
    let parsed: RecordStoredResponse = serde_json::from_str(&body_text(second).await).unwrap();
    assert_eq!(parsed.outcome, "already-processed");
}

#[tokio::test]
async fn test_disabled_purger_leaves_directory_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path(), false);
    let app = create_router(state);

    let a = write_worklist(dir.path(), "a.wl", "1.2.3", "");

    let response = app
        .oneshot(event_request("rec-1", "1.2.3", ""))
        .await
        .unwrap();
    let parsed: RecordStoredResponse = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(parsed.outcome, "disabled");
    assert!(a.exists());
}

#[tokio::test]
async fn test_enable_then_event_purges() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path(), false);
    let app = create_router(state);

    let a = write_worklist(dir.path(), "a.wl", "", "ACC7");

    let enable = Request::builder()
        .uri("/worklist-purger/enable")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(enable).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(event_request("rec-1", "", "ACC7"))
        .await
        .unwrap();
    let parsed: RecordStoredResponse = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(parsed.outcome, "purged");
    assert!(!a.exists());
}

#[tokio::test]
async fn test_status_reflects_toggling() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path(), true);
    let app = create_router(state);

    let status = Request::builder()
        .uri("/worklist-purger/status")
        .body(Body::empty())
        .unwrap();
    let text = body_text(app.clone().oneshot(status).await.unwrap()).await;
    assert!(text.contains("Enabled"));

    let disable = Request::builder()
        .uri("/worklist-purger/disable")
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(disable).await.unwrap();

    let status = Request::builder()
        .uri("/worklist-purger/status")
        .body(Body::empty())
        .unwrap();
    let text = body_text(app.oneshot(status).await.unwrap()).await;
    assert!(text.contains("Disabled"));
}

#[tokio::test]
async fn test_uppercase_extension_still_matches() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path(), true);
    let app = create_router(state);

    let a = write_worklist(dir.path(), "a.WL", "1.2.3", "");
    write_worklist(dir.path(), "b.wl2", "1.2.3", "");

    let response = app
        .oneshot(event_request("rec-1", "1.2.3", ""))
        .await
        .unwrap();
    let parsed: RecordStoredResponse = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(parsed.outcome, "purged");
    assert!(!a.exists());
    assert!(dir.path().join("worklists").join("b.wl2").exists());
}

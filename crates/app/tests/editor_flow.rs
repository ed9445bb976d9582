//! Integration tests for form editing against persisted view-mode preferences.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use serde_json::json;

use courier_application::ports::ViewModeStore;
use courier_application::{FORM_URLENCODED_PREFERENCE, FormUrlencodedEditor};
use courier_domain::{EditorMode, HttpRequest, HttpRequestBody, Settings};
use courier_infrastructure::{InMemoryViewModeStore, SettingsRepository, encode_form};

fn login_request(id: &str) -> HttpRequest {
    HttpRequest {
        id: id.to_string(),
        workspace_id: "w1".to_string(),
        name: "Login".to_string(),
        body: HttpRequestBody {
            form: json!([
                {"id": "p1", "name": "user", "value": "ana", "enabled": true},
                {"id": "p2", "name": "debug", "value": "1", "enabled": false}
            ]),
        },
    }
}

#[tokio::test]
async fn test_bulk_preference_survives_restart() {
    let temp = tempfile::tempdir().unwrap();
    let repo = SettingsRepository::with_path(temp.path().join("settings.json"));

    let store = Arc::new(InMemoryViewModeStore::from_settings(
        &repo.load().await.unwrap().editor,
    ));
    let mut editor = FormUrlencodedEditor::mount(&login_request("r1"), "0", store.clone(), |_| {});
    assert_eq!(editor.model().mode(), EditorMode::Structured);
    editor.model_mut().toggle_mode();

    let settings = Settings {
        editor: store.editor_settings(&[FORM_URLENCODED_PREFERENCE]),
        ..repo.load().await.unwrap()
    };
    repo.save(&settings).await.unwrap();

    let restored = Arc::new(InMemoryViewModeStore::from_settings(
        &repo.load().await.unwrap().editor,
    ));
    assert_eq!(restored.get("urlencoded.r1"), None);

    let other = FormUrlencodedEditor::mount(&login_request("r2"), "0", restored, |_| {});
    assert_eq!(other.model().mode(), EditorMode::Bulk);
}

#[test]
fn test_bulk_edit_produces_encodable_body() {
    let bodies: Arc<Mutex<Vec<HttpRequestBody>>> = Arc::default();
    let sink = bodies.clone();
    let mut editor = FormUrlencodedEditor::mount(
        &login_request("r1"),
        "0",
        Arc::new(InMemoryViewModeStore::new()),
        move |body| sink.lock().push(body),
    );

    assert_eq!(editor.model().bulk_text(), "user: ana\n# debug: 1");
    editor
        .model_mut()
        .set_bulk_text("user: ana maria\ndebug: 1\nnote: line one\\nline two");

    let body = bodies.lock().last().cloned().unwrap();
    let pairs = body.form_pairs();
    assert_eq!(pairs.iter().map(|p| p.id.as_str()).take(2).collect::<Vec<_>>(), vec!["p1", "p2"]);
    assert_eq!(pairs.all()[2].value, "line one\nline two");
    assert_eq!(
        encode_form(&pairs).unwrap(),
        "user=ana+maria&debug=1&note=line+one%0Aline+two"
    );
}

#[test]
fn test_switching_request_remounts_editor() {
    let store = Arc::new(InMemoryViewModeStore::new());
    let mut editor = FormUrlencodedEditor::mount(&login_request("r1"), "0", store.clone(), |_| {});
    editor.model_mut().set_mode(EditorMode::Bulk);

    let mut other = login_request("r2");
    other.body.form = json!([{"name": "q", "value": "x"}]);
    assert!(editor.sync(&other, "0"));
    assert_eq!(editor.model().pairs().len(), 1);
    assert_eq!(editor.model().mode(), EditorMode::Bulk);

    assert!(!editor.sync(&other, "0"));
    assert!(editor.sync(&other, "1"));
    assert_eq!(store.get("urlencoded.r1"), Some(EditorMode::Bulk));
}

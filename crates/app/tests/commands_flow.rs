//! Integration tests for the command layer wired to the in-memory adapters.
//!
//! The backend and prompt are scripted fakes; cache, router and active
//! workspace are the real infrastructure adapters.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use courier_application::ports::{
    Analytics, Backend, BackendError, Clock, PromptOptions, PromptService, QueryCache, QueryKey,
    SearchParams, get_query_data,
};
use courier_application::{ApplicationError, CommandContext, Commands};
use courier_domain::{Folder, FolderPatch, HttpResponse, WorkspacePatch};
use courier_infrastructure::{ActiveWorkspaceState, InMemoryQueryCache, InMemoryRouter, Location};

#[derive(Default)]
struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<Value, BackendError>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl ScriptedBackend {
    fn reply(&self, reply: Result<Value, BackendError>) {
        self.replies.lock().push_back(reply);
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl Backend for ScriptedBackend {
    async fn invoke(&self, cmd: &str, args: Value) -> Result<Value, BackendError> {
        self.calls.lock().push((cmd.to_string(), args));
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Transport("no scripted reply".to_string())))
    }
}

#[derive(Default)]
struct ScriptedPrompt {
    answer: Mutex<Option<String>>,
    asked: Mutex<Vec<PromptOptions>>,
}

#[async_trait]
impl PromptService for ScriptedPrompt {
    async fn prompt(&self, options: PromptOptions) -> Option<String> {
        self.asked.lock().push(options);
        self.answer.lock().clone()
    }
}

#[derive(Default)]
struct RecordingAnalytics {
    events: Mutex<Vec<(String, String)>>,
}

impl Analytics for RecordingAnalytics {
    fn track_event(&self, resource: &str, action: &str) {
        self.events
            .lock()
            .push((resource.to_string(), action.to_string()));
    }
}

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

struct Harness {
    backend: Arc<ScriptedBackend>,
    prompt: Arc<ScriptedPrompt>,
    analytics: Arc<RecordingAnalytics>,
    router: InMemoryRouter,
    cache: InMemoryQueryCache,
    workspace: ActiveWorkspaceState,
    commands: Commands,
}

const NOW_MILLIS: i64 = 1_700_000_000_000;

fn harness(workspace: ActiveWorkspaceState, router: InMemoryRouter) -> Harness {
    let backend = Arc::new(ScriptedBackend::default());
    let prompt = Arc::new(ScriptedPrompt::default());
    let analytics = Arc::new(RecordingAnalytics::default());
    let cache = InMemoryQueryCache::new();
    let clock = FixedClock(Utc.timestamp_millis_opt(NOW_MILLIS).unwrap());

    let ctx = CommandContext {
        backend: backend.clone(),
        prompt: prompt.clone(),
        navigator: Arc::new(router.clone()),
        cache: Arc::new(cache.clone()),
        analytics: analytics.clone(),
        workspace: Arc::new(workspace.clone()),
        clock: Arc::new(clock),
    };

    Harness {
        backend,
        prompt,
        analytics,
        router,
        cache,
        workspace,
        commands: Commands::new(&ctx),
    }
}

fn in_workspace(id: &str) -> Harness {
    harness(ActiveWorkspaceState::with_active(id), InMemoryRouter::new())
}

fn events(h: &Harness) -> Vec<(String, String)> {
    h.analytics.events.lock().clone()
}

#[tokio::test]
async fn test_building_commands_does_no_work() {
    let h = in_workspace("w1");
    assert!(h.backend.calls().is_empty());
    assert!(h.cache.is_empty());
    assert!(events(&h).is_empty());
    assert!(!h.commands.create_folder.is_pending());
}

#[tokio::test]
async fn test_create_folder_prompts_and_caches() {
    let h = in_workspace("w1");
    *h.prompt.answer.lock() = Some("Api".to_string());
    h.backend.reply(Ok(json!({
        "id": "f1",
        "workspaceId": "w1",
        "name": "Api",
        "sortPriority": -1_700_000_000_000.0
    })));

    let folder = h
        .commands
        .create_folder
        .run(FolderPatch::default())
        .await
        .unwrap()
        .expect("folder created");
    assert_eq!(folder.id, "f1");

    let asked = h.prompt.asked.lock().clone();
    assert_eq!(asked.len(), 1);
    assert_eq!(asked[0].id, "new-folder");
    assert_eq!(asked[0].default_value.as_deref(), Some("Folder"));

    let calls = h.backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "cmd_update_folder");
    assert_eq!(
        calls[0].1,
        json!({"folder": {"workspaceId": "w1", "name": "Api", "sortPriority": -1_700_000_000_000.0}})
    );

    let cached: Vec<Folder> = get_query_data(&h.cache, &QueryKey::folders("w1")).unwrap();
    assert_eq!(cached, vec![folder]);
    assert_eq!(events(&h), vec![("folder".to_string(), "create".to_string())]);
}

#[tokio::test]
async fn test_create_folder_with_name_skips_prompt() {
    let h = in_workspace("w1");
    h.backend.reply(Ok(json!({
        "id": "f2",
        "workspaceId": "w1",
        "folderId": "f1",
        "name": "Nested",
        "sortPriority": 3.0
    })));

    let patch = FolderPatch {
        sort_priority: Some(3.0),
        ..FolderPatch::named("Nested").in_folder("f1")
    };
    h.commands.create_folder.run(patch).await.unwrap();

    assert!(h.prompt.asked.lock().is_empty());
    let args = &h.backend.calls()[0].1;
    assert_eq!(args["folder"]["sortPriority"], json!(3.0));
    assert_eq!(args["folder"]["folderId"], json!("f1"));
}

#[tokio::test]
async fn test_create_folder_cancelled_prompt() {
    let h = in_workspace("w1");

    let result = h.commands.create_folder.run(FolderPatch::default()).await.unwrap();

    assert!(result.is_none());
    assert!(h.backend.calls().is_empty());
    assert!(h.cache.is_empty());
    assert!(h.router.history().await.is_empty());
    assert_eq!(events(&h), vec![("folder".to_string(), "create".to_string())]);
}

#[tokio::test]
async fn test_create_folder_requires_active_workspace() {
    let h = harness(ActiveWorkspaceState::new(), InMemoryRouter::new());

    let err = h
        .commands
        .create_folder
        .run(FolderPatch::named("Api"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Precondition(_)));
    assert_eq!(
        err.to_string(),
        "Cannot create folder when there's no active workspace"
    );
    assert!(h.backend.calls().is_empty());
    assert!(h.prompt.asked.lock().is_empty());
}

#[tokio::test]
async fn test_create_folder_follows_workspace_switch() {
    let h = in_workspace("w1");
    h.workspace.activate("w2");
    h.backend.reply(Ok(json!({"id": "f1", "workspaceId": "w2", "name": "Api"})));

    h.commands.create_folder.run(FolderPatch::named("Api")).await.unwrap();

    assert_eq!(h.backend.calls()[0].1["folder"]["workspaceId"], json!("w2"));
    assert!(h.cache.get(&QueryKey::folders("w2")).is_some());
}

#[tokio::test]
async fn test_create_workspace_navigates() {
    let h = in_workspace("w0");
    h.backend.reply(Ok(json!({"id": "w9", "name": "Team"})));

    let workspace = h
        .commands
        .create_workspace
        .run(WorkspacePatch::named("Team"))
        .await
        .unwrap();

    assert_eq!(workspace.id, "w9");
    assert_eq!(h.backend.calls()[0], (
        "cmd_update_workspace".to_string(),
        json!({"workspace": {"name": "Team"}})
    ));
    assert_eq!(h.router.current().await.path, "/workspaces/w9");
    assert_eq!(events(&h), vec![("workspace".to_string(), "create".to_string())]);
}

#[tokio::test]
async fn test_create_workspace_failure_still_tracks() {
    let h = in_workspace("w0");
    h.backend.reply(Err(BackendError::Command {
        cmd: "cmd_update_workspace".to_string(),
        message: "disk full".to_string(),
    }));

    let err = h
        .commands
        .create_workspace
        .run(WorkspacePatch::named("Team"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Backend(BackendError::Command { .. })));
    assert!(h.router.history().await.is_empty());
    assert_eq!(events(&h), vec![("workspace".to_string(), "create".to_string())]);
}

#[tokio::test]
async fn test_duplicate_websocket_request_selects_copy() {
    let mut search = SearchParams::new();
    search.insert("environment_id".to_string(), "e1".to_string());
    search.insert("request_id".to_string(), "ws1".to_string());
    let router = InMemoryRouter::starting_at(Location {
        path: "/workspaces/w1".to_string(),
        search,
    });
    let h = harness(ActiveWorkspaceState::with_active("w1"), router);
    h.backend.reply(Ok(json!({
        "id": "ws2",
        "workspaceId": "w1",
        "name": "Socket (copy)",
        "url": "wss://example.test"
    })));

    let copy = h
        .commands
        .duplicate_websocket_request
        .run("ws1".to_string())
        .await
        .unwrap();

    assert_eq!(copy.id, "ws2");
    assert_eq!(h.backend.calls()[0], (
        "cmd_duplicate_websocket_request".to_string(),
        json!({"requestId": "ws1"})
    ));

    let current = h.router.current().await;
    assert_eq!(current.path, "/workspaces/w1");
    assert_eq!(current.search.get("request_id").map(String::as_str), Some("ws2"));
    assert_eq!(current.search.get("environment_id").map(String::as_str), Some("e1"));
}

#[tokio::test]
async fn test_delete_response_filters_cache() {
    let h = in_workspace("w1");
    h.cache.insert(
        QueryKey::responses("r1"),
        json!([
            {"id": "a", "requestId": "r1", "workspaceId": "w1", "status": 200},
            {"id": "b", "requestId": "r1", "workspaceId": "w1", "status": 404}
        ]),
    );
    h.cache.insert(
        QueryKey::responses("r2"),
        json!([{"id": "c", "requestId": "r2", "workspaceId": "w1", "status": 200}]),
    );
    h.backend.reply(Ok(json!({"id": "b", "requestId": "r1", "workspaceId": "w1", "status": 404})));

    let deleted = h.commands.delete_response.run("b".to_string()).await.unwrap();
    assert_eq!(deleted.id, "b");
    assert_eq!(h.backend.calls()[0], ("delete_response".to_string(), json!({"id": "b"})));

    let remaining: Vec<HttpResponse> = get_query_data(&h.cache, &QueryKey::responses("r1")).unwrap();
    assert_eq!(remaining.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["a"]);
    let untouched: Vec<HttpResponse> = get_query_data(&h.cache, &QueryKey::responses("r2")).unwrap();
    assert_eq!(untouched.len(), 1);
}

#[tokio::test]
async fn test_delete_response_failure_leaves_cache() {
    let h = in_workspace("w1");
    let listed = json!([{"id": "a", "requestId": "r1", "workspaceId": "w1", "status": 200}]);
    h.cache.insert(QueryKey::responses("r1"), listed.clone());

    let err = h.commands.delete_response.run("a".to_string()).await.unwrap_err();

    assert!(matches!(err, ApplicationError::Backend(BackendError::Transport(_))));
    assert_eq!(h.cache.get(&QueryKey::responses("r1")), Some(listed));
}

#[tokio::test]
async fn test_malformed_backend_result() {
    let h = in_workspace("w1");
    h.backend.reply(Ok(json!({"unexpected": true})));

    let err = h.commands.delete_response.run("a".to_string()).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Serialization(_)));
}

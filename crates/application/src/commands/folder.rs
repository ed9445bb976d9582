//! Create-folder command.

use courier_domain::{Folder, FolderPatch};
use serde::Serialize;

use super::{CommandContext, CreateFolder};
use crate::error::{ApplicationError, ApplicationResult};
use crate::mutation::{MutationDescriptor, create_mutation};
use crate::ports::{PromptOptions, QueryCache, QueryKey, invoke_cmd, set_query_data};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewFolder<'a> {
    workspace_id: &'a str,
    #[serde(flatten)]
    patch: &'a FolderPatch,
}

#[derive(Serialize)]
struct CreateFolderArgs<'a> {
    folder: NewFolder<'a>,
}

/// Creates a folder in the active workspace.
///
/// Without a name in the patch the user is prompted for one; cancelling
/// the prompt resolves to `None` without calling the backend.
#[must_use]
pub fn create_folder(ctx: &CommandContext) -> CreateFolder {
    let op_ctx = ctx.clone();
    let cache = ctx.cache.clone();
    let analytics = ctx.analytics.clone();

    create_mutation(
        MutationDescriptor::new("create_folder", move |patch: FolderPatch| {
            let ctx = op_ctx.clone();
            async move { run(&ctx, patch).await }
        })
        .on_success(move |folder: &Option<Folder>, _: &FolderPatch| {
            if let Some(folder) = folder {
                remember_folder(cache.as_ref(), folder.clone());
            }
            async { Ok(()) }
        })
        .on_settled(move |_, _| {
            analytics.track_event("folder", "create");
            async { Ok(()) }
        }),
    )
}

async fn run(ctx: &CommandContext, mut patch: FolderPatch) -> ApplicationResult<Option<Folder>> {
    let Some(workspace_id) = ctx.workspace.active_workspace_id() else {
        return Err(ApplicationError::Precondition(
            "Cannot create folder when there's no active workspace".to_string(),
        ));
    };

    if patch.provided_name().is_none() {
        let options = PromptOptions::new("new-folder", "New Folder", "Name")
            .default_value("Folder")
            .placeholder("Name")
            .confirm_text("Create");
        let Some(name) = ctx.prompt.prompt(options).await else {
            tracing::debug!("folder name prompt cancelled");
            return Ok(None);
        };
        patch.name = Some(name);
    }

    patch.sort_priority = Some(sort_priority(patch.sort_priority, ctx.clock.now_millis()));

    let args = serde_json::to_value(CreateFolderArgs {
        folder: NewFolder {
            workspace_id: &workspace_id,
            patch: &patch,
        },
    })
    .map_err(|e| ApplicationError::Serialization(e.to_string()))?;

    invoke_cmd::<Folder>(ctx.backend.as_ref(), "cmd_update_folder", args)
        .await
        .map(Some)
}

/// Keeps any non-zero, non-NaN priority; otherwise sorts newest first.
fn sort_priority(requested: Option<f64>, now_millis: i64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let created_at = now_millis as f64;
    requested
        .filter(|priority| priority.abs() > 0.0)
        .unwrap_or(-created_at)
}

fn remember_folder(cache: &dyn QueryCache, folder: Folder) {
    set_query_data(
        cache,
        QueryKey::folders(&folder.workspace_id),
        move |prior: Option<Vec<Folder>>| {
            let mut folders = prior.unwrap_or_default();
            folders.retain(|f| f.id != folder.id);
            folders.push(folder);
            folders
        },
    );
}

//! Create-workspace command.

use courier_domain::{Workspace, WorkspacePatch};

use super::{CommandContext, CreateWorkspace, WORKSPACE_ROUTE, command_args};
use crate::mutation::{MutationDescriptor, create_mutation};
use crate::ports::{NavigateOptions, invoke_cmd};

/// Creates the workspace from a patch, then opens it.
#[must_use]
pub fn create_workspace(ctx: &CommandContext) -> CreateWorkspace {
    let backend = ctx.backend.clone();
    let navigator = ctx.navigator.clone();
    let analytics = ctx.analytics.clone();

    create_mutation(
        MutationDescriptor::new("create_workspace", move |patch: WorkspacePatch| {
            let backend = backend.clone();
            async move {
                let args = command_args("workspace", &patch)?;
                invoke_cmd::<Workspace>(backend.as_ref(), "cmd_update_workspace", args).await
            }
        })
        .on_success(move |workspace: &Workspace, _: &WorkspacePatch| {
            let navigator = navigator.clone();
            let options = NavigateOptions::new(WORKSPACE_ROUTE).param("workspaceId", &workspace.id);
            async move { navigator.navigate(options).await }
        })
        .on_settled(move |_, _| {
            analytics.track_event("workspace", "create");
            async { Ok(()) }
        }),
    )
}

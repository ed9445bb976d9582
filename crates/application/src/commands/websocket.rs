//! Duplicate-WebSocket-request command.

use courier_domain::WebsocketRequest;

use super::{CommandContext, DuplicateWebsocketRequest, WORKSPACE_ROUTE, command_args};
use crate::mutation::{MutationDescriptor, create_mutation};
use crate::ports::{NavigateOptions, invoke_cmd};

/// Duplicates a WebSocket request and selects the copy.
#[must_use]
pub fn duplicate_websocket_request(ctx: &CommandContext) -> DuplicateWebsocketRequest {
    let backend = ctx.backend.clone();
    let navigator = ctx.navigator.clone();

    create_mutation(
        MutationDescriptor::new("duplicate_websocket_request", move |request_id: String| {
            let backend = backend.clone();
            async move {
                let args = command_args("requestId", &request_id)?;
                invoke_cmd::<WebsocketRequest>(
                    backend.as_ref(),
                    "cmd_duplicate_websocket_request",
                    args,
                )
                .await
            }
        })
        .on_success(move |request: &WebsocketRequest, _: &String| {
            let navigator = navigator.clone();
            let selected = request.id.clone();
            let options = NavigateOptions::new(WORKSPACE_ROUTE)
                .param("workspaceId", &request.workspace_id)
                .search(move |mut search| {
                    search.insert("request_id".to_string(), selected);
                    search
                });
            async move { navigator.navigate(options).await }
        }),
    )
}

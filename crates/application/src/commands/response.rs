//! Delete-response command.

use courier_domain::HttpResponse;

use super::{CommandContext, DeleteResponse, command_args};
use crate::mutation::{MutationDescriptor, create_mutation};
use crate::ports::{QueryKey, invoke_cmd, set_query_data};

/// Deletes a response and removes it from its request's cached list.
#[must_use]
pub fn delete_response(ctx: &CommandContext) -> DeleteResponse {
    let backend = ctx.backend.clone();
    let cache = ctx.cache.clone();

    create_mutation(
        MutationDescriptor::new("delete_response", move |response_id: String| {
            let backend = backend.clone();
            async move {
                let args = command_args("id", &response_id)?;
                invoke_cmd::<HttpResponse>(backend.as_ref(), "delete_response", args).await
            }
        })
        .on_success(move |deleted: &HttpResponse, _: &String| {
            let deleted_id = deleted.id.clone();
            set_query_data(
                cache.as_ref(),
                QueryKey::responses(&deleted.request_id),
                move |prior: Option<Vec<HttpResponse>>| {
                    prior
                        .unwrap_or_default()
                        .into_iter()
                        .filter(|r| r.id != deleted_id)
                        .collect()
                },
            );
            async { Ok(()) }
        }),
    )
}

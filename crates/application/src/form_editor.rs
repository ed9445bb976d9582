//! Form-urlencoded body editor.

use std::sync::Arc;

use courier_domain::{EditorKey, HttpRequest, HttpRequestBody, PairCollection};

use crate::pair_editor::{PairEditorOptions, PairListModel};
use crate::ports::ViewModeStore;

/// Preference name shared by all form-urlencoded editors.
pub const FORM_URLENCODED_PREFERENCE: &str = "form_urlencoded";

/// State key of the form editor for one request.
#[must_use]
pub fn form_state_key(request_id: &str) -> String {
    format!("urlencoded.{request_id}")
}

/// Returns the normalized form pairs of a request.
#[must_use]
pub fn form_pairs(request: &HttpRequest) -> PairCollection {
    request.body.form_pairs()
}

/// Edits the url-encoded form body of one request.
///
/// Every change is reported as a complete replacement body.
#[derive(Debug)]
pub struct FormUrlencodedEditor {
    model: PairListModel,
}

impl FormUrlencodedEditor {
    /// Mounts the editor for `request`.
    pub fn mount(
        request: &HttpRequest,
        force_update_key: impl Into<String>,
        store: Arc<dyn ViewModeStore>,
        mut on_change: impl FnMut(HttpRequestBody) + Send + 'static,
    ) -> Self {
        let model = PairListModel::mount(
            editor_key(request, force_update_key),
            &request.body.form,
            PairEditorOptions::with_preference(FORM_URLENCODED_PREFERENCE).multiline_values(),
            store,
            move |form| on_change(HttpRequestBody { form }),
        );
        Self { model }
    }

    /// Returns the underlying pair model.
    #[must_use]
    pub const fn model(&self) -> &PairListModel {
        &self.model
    }

    /// Returns the underlying pair model for editing.
    pub const fn model_mut(&mut self) -> &mut PairListModel {
        &mut self.model
    }

    /// Follows the caller to another request or a forced refresh.
    ///
    /// Returns whether the editor was remounted.
    pub fn sync(&mut self, request: &HttpRequest, force_update_key: impl Into<String>) -> bool {
        self.model
            .sync(editor_key(request, force_update_key), &request.body.form)
    }
}

fn editor_key(request: &HttpRequest, force_update_key: impl Into<String>) -> EditorKey {
    EditorKey::new(form_state_key(&request.id), force_update_key)
}

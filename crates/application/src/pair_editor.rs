//! Editing model for one mounted pair editor.
//!
//! A [`PairListModel`] is the transient editing projection of a pair list
//! owned by some domain object. It holds the structured pairs, derives the
//! bulk text from them, and reports every change through the owner's change
//! callback in the serialized domain form. Which projection is displayed is
//! kept in a [`ViewModeStore`] under the editor's state key.

use std::fmt;
use std::sync::Arc;

use courier_domain::{
    DomainResult, EditorKey, EditorMode, Pair, PairCollection, from_bulk_text_with_ids,
    from_domain, to_bulk_text, to_domain,
};
use serde_json::Value;

use crate::ports::ViewModeStore;

type ChangeCallback = Box<dyn FnMut(Value) + Send>;

/// Options of a pair editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairEditorOptions {
    /// Preference shared by every editor of the same kind (`form_urlencoded`).
    pub preference_name: Option<String>,
    /// Whether values may contain newlines.
    pub allow_multiline_values: bool,
}

impl PairEditorOptions {
    /// Creates options for editors sharing `preference_name`.
    #[must_use]
    pub fn with_preference(preference_name: impl Into<String>) -> Self {
        Self {
            preference_name: Some(preference_name.into()),
            allow_multiline_values: false,
        }
    }

    /// Allows values to span several lines.
    #[must_use]
    pub const fn multiline_values(mut self) -> Self {
        self.allow_multiline_values = true;
        self
    }
}

/// Structured and bulk editing of one pair list.
pub struct PairListModel {
    key: EditorKey,
    options: PairEditorOptions,
    pairs: PairCollection,
    mode: EditorMode,
    store: Arc<dyn ViewModeStore>,
    on_change: ChangeCallback,
}

impl PairListModel {
    /// Mounts an editor for the pair data `raw`.
    ///
    /// `raw` is normalized, so malformed data mounts as an empty or
    /// partially-defaulted list. The displayed mode is the one stored for
    /// the state key, else the one stored for the preference name, else
    /// structured.
    pub fn mount(
        key: EditorKey,
        raw: &Value,
        options: PairEditorOptions,
        store: Arc<dyn ViewModeStore>,
        on_change: impl FnMut(Value) + Send + 'static,
    ) -> Self {
        let mode = resolve_mode(store.as_ref(), &key, &options);
        tracing::debug!(state_key = %key.state_key, ?mode, "mounting pair editor");
        Self {
            pairs: from_domain(raw),
            key,
            options,
            mode,
            store,
            on_change: Box::new(on_change),
        }
    }

    /// Returns the editor key.
    #[must_use]
    pub const fn key(&self) -> &EditorKey {
        &self.key
    }

    /// Returns the editor options.
    #[must_use]
    pub const fn options(&self) -> &PairEditorOptions {
        &self.options
    }

    /// Returns the current pairs.
    #[must_use]
    pub const fn pairs(&self) -> &PairCollection {
        &self.pairs
    }

    /// Returns the bulk-text projection of the current pairs.
    #[must_use]
    pub fn bulk_text(&self) -> String {
        to_bulk_text(&self.pairs)
    }

    /// Returns the displayed mode.
    #[must_use]
    pub const fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Switches the displayed mode and remembers it.
    ///
    /// The mode is stored for this editor's state key and, when set, for the
    /// preference name so editors opened later start in the same mode.
    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
        self.store.set(&self.key.state_key, mode);
        if let Some(preference) = &self.options.preference_name {
            self.store.set(preference, mode);
        }
    }

    /// Flips between structured and bulk mode, returning the new mode.
    pub fn toggle_mode(&mut self) -> EditorMode {
        let mode = self.mode.toggled();
        self.set_mode(mode);
        mode
    }

    /// Replaces the pairs wholesale and reports the serialized result.
    pub fn set_pairs(&mut self, next: PairCollection) {
        let next = if self.options.allow_multiline_values {
            next
        } else {
            next.into_iter().map(single_line).collect()
        };
        let serialized = to_domain(&next);
        self.pairs = next;
        (self.on_change)(serialized);
    }

    /// Replaces the pairs from edited bulk text.
    ///
    /// Lines that still match the pair at the same position keep its id.
    pub fn set_bulk_text(&mut self, text: &str) {
        let next = from_bulk_text_with_ids(text, &self.pairs);
        self.set_pairs(next);
    }

    /// Appends a pair, returning its id.
    pub fn add_pair(&mut self, pair: Pair) -> String {
        let mut next = self.pairs.clone();
        let id = next.push(pair);
        self.set_pairs(next);
        id
    }

    /// Inserts a pair after the pair `after`, returning the new id.
    ///
    /// # Errors
    /// Returns `PairNotFound` if `after` is not in the list.
    pub fn insert_pair_after(&mut self, after: &str, pair: Pair) -> DomainResult<String> {
        self.edit(|pairs| pairs.insert_after(after, pair))
    }

    /// Removes a pair.
    ///
    /// # Errors
    /// Returns `PairNotFound` if no such pair exists.
    pub fn remove_pair(&mut self, id: &str) -> DomainResult<Pair> {
        self.edit(|pairs| pairs.remove(id))
    }

    /// Renames a pair.
    ///
    /// # Errors
    /// Returns `PairNotFound` if no such pair exists.
    pub fn rename_pair(&mut self, id: &str, name: impl Into<String>) -> DomainResult<()> {
        self.edit(|pairs| pairs.rename(id, name))
    }

    /// Replaces a pair's value.
    ///
    /// # Errors
    /// Returns `PairNotFound` if no such pair exists.
    pub fn set_pair_value(&mut self, id: &str, value: impl Into<String>) -> DomainResult<()> {
        self.edit(|pairs| pairs.set_value(id, value))
    }

    /// Flips a pair's enabled flag, returning the new state.
    ///
    /// # Errors
    /// Returns `PairNotFound` if no such pair exists.
    pub fn toggle_pair(&mut self, id: &str) -> DomainResult<bool> {
        self.edit(|pairs| pairs.toggle(id))
    }

    /// Moves a pair to `index`.
    ///
    /// # Errors
    /// Returns `PairNotFound` or `IndexOutOfRange`.
    pub fn move_pair(&mut self, id: &str, index: usize) -> DomainResult<()> {
        self.edit(|pairs| pairs.move_to(id, index))
    }

    /// Brings the model in line with the caller's current key and data.
    ///
    /// With an unchanged key this is a no-op: the model keeps its own edits
    /// and `raw` is ignored. A changed state key or force-update key remounts
    /// the editor from `raw` and re-reads the displayed mode. Returns whether
    /// a remount happened.
    pub fn sync(&mut self, key: EditorKey, raw: &Value) -> bool {
        if key == self.key {
            return false;
        }
        tracing::debug!(
            from = %self.key.state_key,
            to = %key.state_key,
            "remounting pair editor"
        );
        self.mode = resolve_mode(self.store.as_ref(), &key, &self.options);
        self.pairs = from_domain(raw);
        self.key = key;
        true
    }

    fn edit<T>(&mut self, f: impl FnOnce(&mut PairCollection) -> DomainResult<T>) -> DomainResult<T> {
        let mut next = self.pairs.clone();
        let out = f(&mut next)?;
        self.set_pairs(next);
        Ok(out)
    }
}

impl fmt::Debug for PairListModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairListModel")
            .field("key", &self.key)
            .field("options", &self.options)
            .field("pairs", &self.pairs)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

fn resolve_mode(store: &dyn ViewModeStore, key: &EditorKey, options: &PairEditorOptions) -> EditorMode {
    store
        .get(&key.state_key)
        .or_else(|| {
            options
                .preference_name
                .as_deref()
                .and_then(|preference| store.get(preference))
        })
        .unwrap_or_default()
}

fn single_line(mut pair: Pair) -> Pair {
    if pair.value.contains(['\n', '\r']) {
        pair.value = pair.value.replace("\r\n", " ").replace(['\n', '\r'], " ");
    }
    pair
}

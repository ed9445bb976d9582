//! Single text input state.
//!
//! Models what the view expects from a text-editing surface: the current
//! value, focus, validity, password obscuring, and remounting when the
//! caller's force-update key changes. Rendering, highlighting and
//! autocomplete are the surface's concern.

use std::fmt;

/// Kind of text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    /// Plain text.
    #[default]
    Text,
    /// Secret text, obscured until revealed.
    Password,
}

/// Extra validation beyond `required`.
#[derive(Clone, Copy, Default)]
pub enum Validation {
    /// No extra validation.
    #[default]
    None,
    /// Validity decided by the caller.
    Fixed(bool),
    /// Validity computed from the current value.
    Predicate(fn(&str) -> bool),
}

impl fmt::Debug for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Fixed(valid) => f.debug_tuple("Fixed").field(valid).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// State of one text input.
#[derive(Debug, Clone)]
pub struct TextInputModel {
    value: String,
    kind: InputKind,
    required: bool,
    validation: Validation,
    read_only: bool,
    obscured: bool,
    focused: bool,
    force_update_key: Option<String>,
}

impl TextInputModel {
    /// Creates an input holding `default_value`.
    #[must_use]
    pub fn new(default_value: impl Into<String>) -> Self {
        Self {
            value: default_value.into(),
            kind: InputKind::Text,
            required: false,
            validation: Validation::None,
            read_only: false,
            obscured: false,
            focused: false,
            force_update_key: None,
        }
    }

    /// Sets the input kind. Passwords start obscured.
    #[must_use]
    pub const fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self.obscured = matches!(kind, InputKind::Password);
        self
    }

    /// Marks the input as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets extra validation.
    #[must_use]
    pub const fn validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Marks the input as read-only.
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Sets the initial force-update key.
    #[must_use]
    pub fn force_update_key(mut self, key: impl Into<String>) -> Self {
        self.force_update_key = Some(key.into());
        self
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value after a user edit.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Returns whether the current value passes `required` and validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if self.required && self.value.is_empty() {
            return false;
        }
        match self.validation {
            Validation::None => true,
            Validation::Fixed(valid) => valid,
            Validation::Predicate(check) => check(&self.value),
        }
    }

    /// Returns whether Enter should submit the enclosing form.
    #[must_use]
    pub fn should_submit_on_enter(&self) -> bool {
        self.is_valid()
    }

    /// Focuses the input. Read-only inputs never take focus.
    ///
    /// Returns whether the input is now focused.
    pub const fn focus(&mut self) -> bool {
        if !self.read_only {
            self.focused = true;
        }
        self.focused
    }

    /// Removes focus.
    pub const fn blur(&mut self) {
        self.focused = false;
    }

    /// Returns whether the input has focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns whether the value is currently hidden.
    #[must_use]
    pub const fn is_obscured(&self) -> bool {
        self.obscured
    }

    /// Shows or hides a password value. Has no effect on text inputs.
    pub const fn toggle_obscured(&mut self) -> bool {
        if matches!(self.kind, InputKind::Password) {
            self.obscured = !self.obscured;
        }
        self.obscured
    }

    /// Resets the value to `default_value` when `force_update_key` differs
    /// from the one the input was mounted with.
    ///
    /// Returns whether the input was reset.
    pub fn remount(&mut self, default_value: &str, force_update_key: &str) -> bool {
        if self.force_update_key.as_deref() == Some(force_update_key) {
            return false;
        }
        self.value = default_value.to_string();
        self.force_update_key = Some(force_update_key.to_string());
        self.obscured = matches!(self.kind, InputKind::Password);
        true
    }
}

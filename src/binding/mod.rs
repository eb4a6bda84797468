//! Binding engine: moves values between widgets and model fields.
//!
//! A [`Binding`] pairs one property path with one widget. The [`Registry`]
//! owns all bindings of a screen and runs `clear`, `refresh` and `commit`
//! across them, tracking whether any widget changed since the last sync.

pub mod choice;
pub mod error;
pub mod list;
pub mod optional;
pub mod property;
pub mod registry;
pub mod text;

use std::fmt;

pub use choice::{ComboBinding, RadioBinding, ToggleBinding};
pub use error::{BindingError, CommitError, RegistrationError};
pub use list::ListBinding;
pub use optional::OptComponentBinding;
pub use property::Property;
pub use registry::Registry;
pub use text::{OptTextListBinding, TextBinding, TextListBinding};

use crate::widgets::{Handle, TextArea, Widget};

/// Valid fields drop the marker and take focus back; invalid ones only get marked.
fn mark<W: Widget>(widget: &Handle<W>, valid: bool) {
    widget.set_invalid(!valid);
    if valid {
        widget.request_focus();
    }
}

/// The closed set of widget/value pairings.
pub enum Binding<M> {
    Text(TextBinding<M>),
    MultiText(TextBinding<M, TextArea>),
    Toggle(ToggleBinding<M>),
    Radio(RadioBinding<M>),
    Combo(ComboBinding<M>),
    List(ListBinding<M>),
    TextList(TextListBinding<M>),
    OptTextList(OptTextListBinding<M>),
    Component(OptComponentBinding<M>),
}

macro_rules! each_variant {
    ($self:expr, $b:ident => $body:expr) => {
        match $self {
            Binding::Text($b) => $body,
            Binding::MultiText($b) => $body,
            Binding::Toggle($b) => $body,
            Binding::Radio($b) => $body,
            Binding::Combo($b) => $body,
            Binding::List($b) => $body,
            Binding::TextList($b) => $body,
            Binding::OptTextList($b) => $body,
            Binding::Component($b) => $body,
        }
    };
}

impl<M> Binding<M> {
    pub fn property(&self) -> &str {
        each_variant!(self, b => b.property())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Binding::Text(_) => "text",
            Binding::MultiText(_) => "multi-text",
            Binding::Toggle(_) => "toggle",
            Binding::Radio(_) => "radio",
            Binding::Combo(_) => "combo",
            Binding::List(_) => "list",
            Binding::TextList(_) => "text-list",
            Binding::OptTextList(_) => "opt-text-list",
            Binding::Component(_) => "component",
        }
    }

    /// Resets the widget to the variant's default state.
    pub fn clear(&self) {
        each_variant!(self, b => b.clear())
    }

    /// Model to widget.
    pub fn put(&self, model: &M) -> Result<(), BindingError> {
        each_variant!(self, b => b.put(model))
    }

    /// Widget to model.
    pub fn get(&self, model: &mut M) -> Result<(), BindingError> {
        each_variant!(self, b => b.get(model))
    }

    pub fn mark_valid(&self) {
        each_variant!(self, b => b.mark(true))
    }

    pub fn mark_invalid(&self) {
        each_variant!(self, b => b.mark(false))
    }

    pub fn set_enabled(&self, enabled: bool) {
        each_variant!(self, b => b.set_enabled(enabled))
    }

    pub fn as_component(&self) -> Option<&OptComponentBinding<M>> {
        match self {
            Binding::Component(c) => Some(c),
            _ => None,
        }
    }
}

impl<M> fmt::Debug for Binding<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("kind", &self.kind())
            .field("property", &self.property())
            .finish()
    }
}

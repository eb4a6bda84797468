use std::fmt::Display;
use std::rc::Rc;
use std::str::FromStr;

use crate::binding::error::BindingError;
use crate::binding::{mark, Property};
use crate::widgets::{Handle, TextArea, TextInput, TextWidget, Toggle};

type ReadText<M> = Box<dyn Fn(&M) -> Result<String, BindingError>>;
type WriteText<M> = Box<dyn Fn(&mut M, &str) -> Result<(), BindingError>>;

/// Text field bound to any value that parses from and prints to a string.
/// The widget is a single-line [`TextInput`] unless stated otherwise; a
/// [`TextArea`] binds the whole text, line breaks included.
pub struct TextBinding<M, W = TextInput> {
    path: String,
    widget: Handle<W>,
    default: String,
    read: ReadText<M>,
    write: WriteText<M>,
}

impl<M: 'static, W: TextWidget> TextBinding<M, W> {
    pub fn new<V>(property: Property<M, V>, widget: Handle<W>, default: &str) -> Self
    where
        V: FromStr + Display + 'static,
        V::Err: Display,
    {
        let path = property.path().to_string();
        let property = Rc::new(property);
        let reader = Rc::clone(&property);
        Self {
            path,
            widget,
            default: default.to_string(),
            read: Box::new(move |m: &M| reader.read(m).map(|v| v.to_string())),
            write: Box::new(move |m: &mut M, text: &str| -> Result<(), BindingError> {
                let value = text.parse::<V>().map_err(|e| BindingError::Conversion {
                    property: property.path().to_string(),
                    value: text.to_string(),
                    reason: e.to_string(),
                })?;
                property.write(m, value)
            }),
        }
    }
}

impl<M, W: TextWidget> TextBinding<M, W> {
    pub fn property(&self) -> &str {
        &self.path
    }

    pub fn widget(&self) -> &Handle<W> {
        &self.widget
    }

    /// Resets to the default and pulls focus to the field.
    pub fn clear(&self) {
        self.widget.edit(|w| w.set_value(&self.default));
        self.widget.request_focus();
    }

    pub fn put(&self, model: &M) -> Result<(), BindingError> {
        let text = (self.read)(model)?;
        self.widget.edit(|w| w.set_value(&text));
        Ok(())
    }

    pub fn get(&self, model: &mut M) -> Result<(), BindingError> {
        let text = self.widget.with(|w| w.value());
        (self.write)(model, &text)
    }

    pub fn mark(&self, valid: bool) {
        mark(&self.widget, valid);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.widget.set_enabled(enabled);
    }
}

/// Splits editor lines into list items, dropping blank lines.
fn items_from_lines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .cloned()
        .collect()
}

/// Multi-line editor where every non-blank line is one list element.
pub struct TextListBinding<M> {
    property: Property<M, Vec<String>>,
    widget: Handle<TextArea>,
}

impl<M> TextListBinding<M> {
    pub fn new(property: Property<M, Vec<String>>, widget: Handle<TextArea>) -> Self {
        Self { property, widget }
    }

    pub fn property(&self) -> &str {
        self.property.path()
    }

    pub fn widget(&self) -> &Handle<TextArea> {
        &self.widget
    }

    pub fn clear(&self) {
        self.widget.edit(|w| w.set_text(""));
    }

    pub fn put(&self, model: &M) -> Result<(), BindingError> {
        let items = self.property.read(model)?;
        self.widget.edit(|w| w.set_lines(items));
        Ok(())
    }

    pub fn get(&self, model: &mut M) -> Result<(), BindingError> {
        let items = self.widget.with(|w| items_from_lines(w.lines()));
        self.property.write(model, items)
    }

    pub fn mark(&self, valid: bool) {
        mark(&self.widget, valid);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.widget.set_enabled(enabled);
    }
}

/// Multi-line list whose model value is absent while the gate toggle is off.
/// The editor is only enabled while the gate is on.
///
/// With a `state` property the gate is also mirrored into a boolean field,
/// and `put` takes the gate from that field instead of from presence.
pub struct OptTextListBinding<M> {
    property: Property<M, Option<Vec<String>>>,
    state: Option<Property<M, bool>>,
    gate: Handle<Toggle>,
    widget: Handle<TextArea>,
}

impl<M> OptTextListBinding<M> {
    pub fn new(
        property: Property<M, Option<Vec<String>>>,
        gate: Handle<Toggle>,
        widget: Handle<TextArea>,
    ) -> Self {
        let weak_gate = gate.downgrade();
        let editor = widget.clone();
        gate.subscribe(move || {
            if let Some(gate) = weak_gate.upgrade() {
                let on = gate.with(|t| t.is_on()) && gate.is_enabled();
                editor.set_enabled(on);
            }
        });
        Self {
            property,
            state: None,
            gate,
            widget,
        }
    }

    pub fn with_state(mut self, state: Property<M, bool>) -> Self {
        self.state = Some(state);
        self
    }

    pub fn property(&self) -> &str {
        self.property.path()
    }

    pub fn gate(&self) -> &Handle<Toggle> {
        &self.gate
    }

    pub fn widget(&self) -> &Handle<TextArea> {
        &self.widget
    }

    pub fn clear(&self) {
        self.gate.edit(|t| t.set_on(false));
        self.widget.edit(|w| w.set_text(""));
        self.widget.set_enabled(false);
    }

    pub fn put(&self, model: &M) -> Result<(), BindingError> {
        let value = self.property.read(model)?;
        let on = match &self.state {
            Some(state) => state.read(model)?,
            None => value.is_some(),
        };
        self.gate.edit(|t| t.set_on(on));
        self.widget
            .edit(|w| w.set_lines(value.unwrap_or_default()));
        self.widget.set_enabled(on && self.gate.is_enabled());
        Ok(())
    }

    pub fn get(&self, model: &mut M) -> Result<(), BindingError> {
        let on = self.gate.with(|t| t.is_on());
        if let Some(state) = &self.state {
            state.write(model, on)?;
        }
        let value = on.then(|| self.widget.with(|w| items_from_lines(w.lines())));
        self.property.write(model, value)
    }

    pub fn mark(&self, valid: bool) {
        mark(&self.widget, valid);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.gate.set_enabled(enabled);
        let on = self.gate.with(|t| t.is_on());
        self.widget.set_enabled(enabled && on);
    }
}

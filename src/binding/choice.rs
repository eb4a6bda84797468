use crate::binding::error::{BindingError, RegistrationError};
use crate::binding::{mark, Property};
use crate::widgets::{ComboBox, Handle, RadioGroup, Toggle};

/// Checkbox bound to a boolean.
pub struct ToggleBinding<M> {
    property: Property<M, bool>,
    widget: Handle<Toggle>,
    default: bool,
}

impl<M> ToggleBinding<M> {
    pub fn new(property: Property<M, bool>, widget: Handle<Toggle>, default: bool) -> Self {
        Self {
            property,
            widget,
            default,
        }
    }

    pub fn property(&self) -> &str {
        self.property.path()
    }

    pub fn widget(&self) -> &Handle<Toggle> {
        &self.widget
    }

    pub fn clear(&self) {
        self.widget.edit(|t| t.set_on(self.default));
    }

    pub fn put(&self, model: &M) -> Result<(), BindingError> {
        let on = self.property.read(model)?;
        self.widget.edit(|t| t.set_on(on));
        Ok(())
    }

    pub fn get(&self, model: &mut M) -> Result<(), BindingError> {
        let on = self.widget.with(|t| t.is_on());
        self.property.write(model, on)
    }

    pub fn mark(&self, valid: bool) {
        mark(&self.widget, valid);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.widget.set_enabled(enabled);
    }
}

fn check_default(property: &str, index: usize, len: usize) -> Result<(), RegistrationError> {
    if index < len {
        Ok(())
    } else {
        Err(RegistrationError::DefaultOutOfRange {
            property: property.to_string(),
            index,
            len,
        })
    }
}

fn out_of_range(property: &str, index: usize, len: usize) -> BindingError {
    BindingError::IndexOutOfRange {
        property: property.to_string(),
        index,
        len,
    }
}

/// Radio button group bound to the index of the selected button.
pub struct RadioBinding<M> {
    property: Property<M, usize>,
    widget: Handle<RadioGroup>,
    default: usize,
}

impl<M> RadioBinding<M> {
    pub fn new(
        property: Property<M, usize>,
        widget: Handle<RadioGroup>,
        default: usize,
    ) -> Result<Self, RegistrationError> {
        check_default(property.path(), default, widget.with(|g| g.len()))?;
        Ok(Self {
            property,
            widget,
            default,
        })
    }

    pub fn property(&self) -> &str {
        self.property.path()
    }

    pub fn widget(&self) -> &Handle<RadioGroup> {
        &self.widget
    }

    pub fn clear(&self) {
        self.widget.edit(|g| g.select(self.default));
    }

    pub fn put(&self, model: &M) -> Result<(), BindingError> {
        let index = self.property.read(model)?;
        if self.widget.edit(|g| g.select(index)) {
            Ok(())
        } else {
            Err(out_of_range(
                self.property(),
                index,
                self.widget.with(|g| g.len()),
            ))
        }
    }

    pub fn get(&self, model: &mut M) -> Result<(), BindingError> {
        let index = self
            .widget
            .with(|g| g.selected())
            .ok_or_else(|| BindingError::NoSelection(self.property().to_string()))?;
        self.property.write(model, index)
    }

    pub fn mark(&self, valid: bool) {
        mark(&self.widget, valid);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.widget.set_enabled(enabled);
    }
}

/// Drop-down bound to the index of the selected option.
pub struct ComboBinding<M> {
    property: Property<M, usize>,
    widget: Handle<ComboBox>,
    default: usize,
}

impl<M> ComboBinding<M> {
    pub fn new(
        property: Property<M, usize>,
        widget: Handle<ComboBox>,
        default: usize,
    ) -> Result<Self, RegistrationError> {
        check_default(property.path(), default, widget.with(|c| c.len()))?;
        Ok(Self {
            property,
            widget,
            default,
        })
    }

    pub fn property(&self) -> &str {
        self.property.path()
    }

    pub fn widget(&self) -> &Handle<ComboBox> {
        &self.widget
    }

    pub fn clear(&self) {
        self.widget.edit(|c| c.select(self.default));
    }

    pub fn put(&self, model: &M) -> Result<(), BindingError> {
        let index = self.property.read(model)?;
        if self.widget.edit(|c| c.select(index)) {
            Ok(())
        } else {
            Err(out_of_range(
                self.property(),
                index,
                self.widget.with(|c| c.len()),
            ))
        }
    }

    pub fn get(&self, model: &mut M) -> Result<(), BindingError> {
        let index = self
            .widget
            .with(|c| c.selected())
            .ok_or_else(|| BindingError::NoSelection(self.property().to_string()))?;
        self.property.write(model, index)
    }

    pub fn mark(&self, valid: bool) {
        mark(&self.widget, valid);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.widget.set_enabled(enabled);
    }
}

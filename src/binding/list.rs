use crate::binding::error::BindingError;
use crate::binding::{mark, Property};
use crate::widgets::{Handle, ListView};

/// List view bound to an ordered sequence. `put` and `clear` hand the view a
/// fresh backing collection rather than editing the one it holds.
pub struct ListBinding<M> {
    property: Property<M, Vec<String>>,
    widget: Handle<ListView>,
}

impl<M> ListBinding<M> {
    pub fn new(property: Property<M, Vec<String>>, widget: Handle<ListView>) -> Self {
        Self { property, widget }
    }

    pub fn property(&self) -> &str {
        self.property.path()
    }

    pub fn widget(&self) -> &Handle<ListView> {
        &self.widget
    }

    pub fn clear(&self) {
        self.widget.edit(|l| l.set_items(Vec::new()));
    }

    pub fn put(&self, model: &M) -> Result<(), BindingError> {
        let items = self.property.read(model)?;
        self.widget.edit(|l| l.set_items(items));
        Ok(())
    }

    pub fn get(&self, model: &mut M) -> Result<(), BindingError> {
        let items = self.widget.with(|l| l.items().to_vec());
        self.property.write(model, items)
    }

    pub fn mark(&self, valid: bool) {
        mark(&self.widget, valid);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.widget.set_enabled(enabled);
    }
}

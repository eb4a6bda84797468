pub mod chrome;
pub mod combo;
pub mod list;
pub mod radio;
pub mod text_area;
pub mod text_input;
pub mod toggle;

pub use combo::ComboBox;
pub use list::ListView;
pub use radio::RadioGroup;
pub use text_area::TextArea;
pub use text_input::TextInput;
pub use toggle::Toggle;

use crossterm::event::KeyCode;
use ratatui::prelude::*;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A terminal input control that can be bound to a model property.
pub trait Widget {
    fn render(&mut self, f: &mut Frame, area: Rect, focused: bool);
    /// Applies a key press. Returns `true` when the displayed value changed.
    fn on_key(&mut self, key: KeyCode) -> bool;
    fn chrome(&self) -> &Chrome;
    fn chrome_mut(&mut self) -> &mut Chrome;
}

/// A widget whose value is free text.
pub trait TextWidget: Widget {
    fn value(&self) -> String;
    fn set_value(&mut self, text: &str);
}

/// Presentation state shared by every widget: label, enabled state, the
/// "invalid" marker and a pending focus request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chrome {
    pub label: String,
    enabled: bool,
    invalid: bool,
    focus_requested: bool,
}

impl Chrome {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            invalid: false,
            focus_requested: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    pub fn request_focus(&mut self) {
        self.focus_requested = true;
    }

    pub fn focus_requested(&self) -> bool {
        self.focus_requested
    }

    /// Returns and resets the pending focus request.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

type Listener = Rc<dyn Fn()>;

struct Shared<W> {
    widget: RefCell<W>,
    listeners: RefCell<Vec<Listener>>,
}

/// Shared reference to a widget, held by the screen that renders it and by
/// the one binding that reads and writes its value.
///
/// Value changes (`edit`, accepted `on_key` input) notify subscribers once
/// the widget borrow has been released, so listeners may inspect the widget.
/// Chrome changes never notify.
pub struct Handle<W> {
    inner: Rc<Shared<W>>,
}

impl<W> Clone for Handle<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<W: Widget> Handle<W> {
    pub fn new(widget: W) -> Self {
        Self {
            inner: Rc::new(Shared {
                widget: RefCell::new(widget),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        f(&self.inner.widget.borrow())
    }

    /// Mutates the widget value and notifies subscribers.
    pub fn edit<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let out = {
            let mut w = self.inner.widget.borrow_mut();
            f(&mut w)
        };
        self.notify();
        out
    }

    /// Mutates presentation state only; subscribers are not notified.
    pub fn restyle<R>(&self, f: impl FnOnce(&mut Chrome) -> R) -> R {
        let mut w = self.inner.widget.borrow_mut();
        f(w.chrome_mut())
    }

    /// Routes a key press to the widget. Disabled widgets ignore input.
    pub fn on_key(&self, key: KeyCode) -> bool {
        let changed = {
            let mut w = self.inner.widget.borrow_mut();
            if !w.chrome().is_enabled() {
                return false;
            }
            w.on_key(key)
        };
        if changed {
            self.notify();
        }
        changed
    }

    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool) {
        self.inner.widget.borrow_mut().render(f, area, focused);
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn downgrade(&self) -> WeakHandle<W> {
        WeakHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.with(|w| w.chrome().is_enabled())
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.restyle(|c| c.set_enabled(enabled));
    }

    pub fn is_invalid(&self) -> bool {
        self.with(|w| w.chrome().is_invalid())
    }

    pub fn set_invalid(&self, invalid: bool) {
        self.restyle(|c| c.set_invalid(invalid));
    }

    pub fn request_focus(&self) {
        self.restyle(|c| c.request_focus());
    }

    pub fn take_focus_request(&self) -> bool {
        self.restyle(|c| c.take_focus_request())
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn notify(&self) {
        // Snapshot so a listener may subscribe without re-entering the borrow.
        let listeners: Vec<Listener> = self.inner.listeners.borrow().clone();
        for l in listeners {
            l();
        }
    }
}

/// Non-owning widget reference, used by listeners registered on the widget
/// itself so the handle does not keep itself alive.
pub struct WeakHandle<W> {
    inner: Weak<Shared<W>>,
}

impl<W> Clone for WeakHandle<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<W> WeakHandle<W> {
    pub fn upgrade(&self) -> Option<Handle<W>> {
        self.inner.upgrade().map(|inner| Handle { inner })
    }
}

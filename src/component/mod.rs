pub mod layout;

pub use self::layout::Layout;

use std::{fmt, rc::Rc};

use crate::terminal::{Key, Rect};

/// A widget in the component model.
///
/// Components are stateful: they are created from a `Properties` value, told
/// about property and frame changes, fed messages produced by their key
/// bindings and asked to describe themselves as a [`Layout`] whenever the
/// application re-renders.
pub trait Component: Sized + 'static {
    type Message;
    type Properties: Clone;

    /// Creates the component from its initial properties and frame.
    fn create(properties: Self::Properties, frame: Rect) -> Self;

    /// Called when the parent re-renders with new properties.
    fn change(&mut self, properties: Self::Properties) -> ShouldRender;

    /// Called when the component is laid out with a different frame.
    fn resize(&mut self, _frame: Rect) -> ShouldRender {
        ShouldRender::No
    }

    /// Processes a message produced by `input_binding`.
    fn update(&mut self, _message: Self::Message) -> ShouldRender {
        ShouldRender::Yes
    }

    /// Renders the component.
    fn view(&self) -> Layout;

    fn has_focus(&self) -> bool {
        false
    }

    /// Maps the sequence of keys pressed so far to a message.
    fn input_binding(&self, _pressed: &[Key]) -> BindingMatch<Self::Message> {
        BindingMatch {
            transition: BindingTransition::Clear,
            message: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShouldRender {
    Yes,
    No,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingTransition {
    /// The keys pressed so far are a prefix of a longer binding; keep them.
    Continue,
    /// Clear the pressed keys, whether or not a message was produced.
    Clear,
    /// Ask the event loop to exit.
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingMatch<Message> {
    pub transition: BindingTransition,
    pub message: Option<Message>,
}

/// A callback a component uses to notify its parent, e.g. of an edit.
///
/// Cheap to clone; equality is by identity which keeps `Properties` that
/// contain callbacks comparable.
pub struct Callback<InputT = ()>(Rc<dyn Fn(InputT)>);

impl<InputT> Callback<InputT> {
    pub fn emit(&self, value: InputT) {
        (self.0)(value)
    }
}

impl<InputT> Clone for Callback<InputT> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<InputT> PartialEq for Callback<InputT> {
    #[allow(clippy::vtable_address_comparisons)]
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<InputT> fmt::Debug for Callback<InputT> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Callback(Rc<dyn Fn>)")
    }
}

impl<InputT, FnT: Fn(InputT) + 'static> From<FnT> for Callback<InputT> {
    fn from(function: FnT) -> Self {
        Self(Rc::new(function))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn callback_emit_and_identity_equality() {
        let count = Rc::new(Cell::new(0));
        let callback: Callback<usize> = {
            let count = Rc::clone(&count);
            Callback::from(move |increment| count.set(count.get() + increment))
        };
        let clone = callback.clone();
        callback.emit(2);
        clone.emit(3);
        assert_eq!(count.get(), 5);
        assert_eq!(callback, clone);

        let other: Callback<usize> = Callback::from(|_| {});
        assert_ne!(callback, other);
    }
}

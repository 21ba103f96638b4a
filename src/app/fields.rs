//! Value holders injected into the calculator
//!
//! The controller never looks controls up by name. Hosts hand it anything
//! that can yield the current input text and anything that can display a
//! line of result text.

use std::cell::RefCell;
use std::rc::Rc;

/// Source of user-typed operand text
pub trait InputField {
    /// Current text of the field, read fresh on every call
    fn text(&self) -> String;
}

/// Surface that displays the latest result
pub trait OutputField {
    /// Replaces whatever the field currently shows
    fn set_text(&self, text: &str);
}

impl<T: InputField + ?Sized> InputField for &T {
    fn text(&self) -> String {
        (**self).text()
    }
}

impl<T: OutputField + ?Sized> OutputField for &T {
    fn set_text(&self, text: &str) {
        (**self).set_text(text)
    }
}

/// In-memory text holder
///
/// Clones share one buffer, so a host can keep a handle to edit or inspect
/// the same field the calculator owns.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    content: Rc<RefCell<String>>,
}

impl TextField {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            content: Rc::new(RefCell::new(text.into())),
        }
    }

    pub fn set(&self, text: impl Into<String>) {
        *self.content.borrow_mut() = text.into();
    }

    pub fn get(&self) -> String {
        self.content.borrow().clone()
    }
}

impl InputField for TextField {
    fn text(&self) -> String {
        self.get()
    }
}

impl OutputField for TextField {
    fn set_text(&self, text: &str) {
        self.set(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_content() {
        let field = TextField::new("10");
        let handle = field.clone();
        handle.set("4");
        assert_eq!(field.text(), "4");
    }

    #[test]
    fn set_text_replaces_content() {
        let output = TextField::default();
        output.set_text("14");
        output.set_text("30");
        assert_eq!(output.get(), "30");
    }

    #[test]
    fn references_forward_to_the_field() {
        fn read<I: InputField>(field: I) -> String {
            field.text()
        }

        let field = TextField::new("7");
        assert_eq!(read(&field), "7");
    }
}

//! # Primitive Controls
//!
//! Leaf editing state wrapped by value, operator, variable and scene nodes.
//!
//! Controls own the validation of raw user input: a [`NumberField`] never
//! commits text that does not parse, so nodes reading it can rely on a
//! valid value. Every control reports through the notifier of the node that
//! owns it, and only when its value actually changes.

use crate::change::{ChangeNotifier, ChangeOrigin};
use crate::errors::{EditorError, EditorResult};
use std::fmt;

/// Single-line free text
#[derive(Debug)]
pub struct TextField {
    text: String,
    read_only: bool,
    changes: ChangeNotifier,
}

impl TextField {
    pub fn new(text: impl Into<String>, changes: &ChangeNotifier) -> Self {
        Self {
            text: text.into(),
            read_only: false,
            changes: changes.clone(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> EditorResult<()> {
        if self.read_only {
            return Err(EditorError::ReadOnly);
        }

        let text = text.into();
        if text != self.text {
            self.text = text;
            self.changes.notify(ChangeOrigin::Control);
        }
        Ok(())
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

/// Numeric text entry that only commits parseable, finite numbers
#[derive(Debug)]
pub struct NumberField {
    text: String,
    value: f64,
    read_only: bool,
    changes: ChangeNotifier,
}

impl NumberField {
    pub fn new(value: f64, changes: &ChangeNotifier) -> Self {
        Self {
            text: value.to_string(),
            value,
            read_only: false,
            changes: changes.clone(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Replace the text, rejecting input that is not a number. Rejected
    /// input leaves the field untouched.
    pub fn set_text(&mut self, text: &str) -> EditorResult<()> {
        if self.read_only {
            return Err(EditorError::ReadOnly);
        }

        let value = parse_number(text)?;
        if text != self.text {
            self.text = text.to_string();
            self.value = value;
            self.changes.notify(ChangeOrigin::Control);
        }
        Ok(())
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

fn parse_number(text: &str) -> EditorResult<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EditorError::InvalidNumber(text.to_string())),
    }
}

/// Single selection from a fixed list of options
#[derive(Debug)]
pub struct Choice<T> {
    options: Vec<T>,
    selected: usize,
    read_only: bool,
    changes: ChangeNotifier,
}

impl<T: PartialEq + fmt::Display> Choice<T> {
    /// Returns `None` when `initial` is not one of `options`
    pub fn new(options: Vec<T>, initial: &T, changes: &ChangeNotifier) -> Option<Self> {
        let selected = options.iter().position(|option| option == initial)?;

        Some(Self {
            options,
            selected,
            read_only: false,
            changes: changes.clone(),
        })
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn selected(&self) -> &T {
        &self.options[self.selected]
    }

    pub fn select(&mut self, option: &T) -> EditorResult<()> {
        if self.read_only {
            return Err(EditorError::ReadOnly);
        }

        let index = self
            .options
            .iter()
            .position(|candidate| candidate == option)
            .ok_or_else(|| EditorError::UnknownOption(option.to_string()))?;

        if index != self.selected {
            self.selected = index;
            self.changes.notify(ChangeOrigin::Control);
        }
        Ok(())
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

/// Title and comment of a scene, edited as two separate fields and shown
/// together as one block
#[derive(Debug)]
pub struct CommentBox {
    title: TextField,
    comment: TextField,
}

impl CommentBox {
    pub fn new(title: &str, comment: &str, changes: &ChangeNotifier) -> Self {
        Self {
            title: TextField::new(title, changes),
            comment: TextField::new(comment, changes),
        }
    }

    /// Display text: the title on the first line, the comment below it
    pub fn text(&self) -> String {
        if self.comment.text().is_empty() {
            self.title.text().to_string()
        } else {
            format!("{}\n{}", self.title.text(), self.comment.text())
        }
    }

    pub fn title(&self) -> &str {
        self.title.text()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> EditorResult<()> {
        self.title.set_text(title)
    }

    pub fn comment(&self) -> &str {
        self.comment.text()
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) -> EditorResult<()> {
        self.comment.set_text(comment)
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.title.set_read_only(read_only);
        self.comment.set_read_only(read_only);
    }

    pub fn is_read_only(&self) -> bool {
        self.title.is_read_only()
    }
}

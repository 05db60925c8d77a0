//! Get and set variable statements.
//!
//! Variable names come from a fixed set known to the scene runtime. A
//! statement naming anything else cannot be represented in the editor.

use crate::change::ChangeNotifier;
use crate::controls::Choice;
use crate::drag::DropTarget;
use crate::editable::EditableNode;
use crate::errors::{EditorError, EditorResult};
use crate::slot::NumberSlot;
use montage_language::{NumberExpression, Statement};
use tracing::warn;

/// Variables a statement may name
pub const VARIABLE_NAMES: [&str; 4] = ["item", "curr_video", "curr_duration", "curr_offset"];

fn variable_choice(name: &str, changes: &ChangeNotifier) -> EditorResult<Choice<String>> {
    let options = VARIABLE_NAMES.iter().map(|option| option.to_string()).collect();

    Choice::new(options, &name.to_string(), changes).ok_or_else(|| {
        warn!(name = %name, "Unknown variable");
        EditorError::UnknownVariable(name.to_string())
    })
}

fn select_variable(choice: &mut Choice<String>, name: &str) -> EditorResult<()> {
    if !VARIABLE_NAMES.contains(&name) {
        return Err(EditorError::UnknownVariable(name.to_string()));
    }
    choice.select(&name.to_string())
}

/// Reads a variable
#[derive(Debug)]
pub struct GetNode {
    name: Choice<String>,
    changes: ChangeNotifier,
}

impl GetNode {
    pub fn new(name: &str, owner: &ChangeNotifier) -> EditorResult<Self> {
        let changes = owner.child();

        Ok(Self {
            name: variable_choice(name, &changes)?,
            changes,
        })
    }

    pub fn name(&self) -> &str {
        self.name.selected()
    }

    pub fn select_variable(&mut self, name: &str) -> EditorResult<()> {
        select_variable(&mut self.name, name)
    }
}

impl EditableNode for GetNode {
    type Model = Statement;

    fn to_model(&self) -> Statement {
        Statement::get(self.name())
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.name.set_read_only(read_only);
    }

    fn is_read_only(&self) -> bool {
        self.name.is_read_only()
    }

    fn changes(&self) -> &ChangeNotifier {
        &self.changes
    }
}

/// Assigns a number to a variable
#[derive(Debug)]
pub struct SetNode {
    name: Choice<String>,
    value: NumberSlot,
    changes: ChangeNotifier,
}

impl SetNode {
    pub fn new(name: &str, value: NumberExpression, owner: &ChangeNotifier) -> EditorResult<Self> {
        let changes = owner.child();

        Ok(Self {
            name: variable_choice(name, &changes)?,
            value: NumberSlot::new(value, &changes)?,
            changes,
        })
    }

    pub fn name(&self) -> &str {
        self.name.selected()
    }

    pub fn select_variable(&mut self, name: &str) -> EditorResult<()> {
        select_variable(&mut self.name, name)
    }

    pub fn value(&self) -> &NumberSlot {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut NumberSlot {
        &mut self.value
    }
}

impl EditableNode for SetNode {
    type Model = Statement;

    fn to_model(&self) -> Statement {
        Statement::set(self.name(), self.value.to_model())
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.name.set_read_only(read_only);
        self.value.set_read_only(read_only);
    }

    fn is_read_only(&self) -> bool {
        self.name.is_read_only()
    }

    fn changes(&self) -> &ChangeNotifier {
        &self.changes
    }

    fn for_each_target(&mut self, visit: &mut dyn FnMut(&mut dyn DropTarget)) {
        self.value.for_each_target(visit);
    }
}

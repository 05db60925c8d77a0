//! # Append-only List Editors
//!
//! Ordered sequence of sibling nodes of one category, followed by an append
//! gap that accepts drops. Entries are only ever added at the end: there is
//! no insert-at-index, removal or reordering.

use crate::category::ListCategory;
use crate::change::{ChangeNotifier, ChangeOrigin};
use crate::drag::DropTarget;
use crate::editable::EditableNode;
use crate::errors::{EditorError, EditorResult};
use crate::registry;
use montage_language::{Category, CommandSequence, LanguageComponent, Statement};
use tracing::{debug, error};

/// Trailing drop zone of a list. Never a data element.
#[derive(Debug, Default)]
struct AppendGap {
    read_only: bool,
    highlighted: bool,
}

#[derive(Debug)]
pub struct ListEditor<C: ListCategory> {
    items: Vec<C::Node>,
    gap: AppendGap,
    changes: ChangeNotifier,
}

impl<C: ListCategory> ListEditor<C> {
    /// Editor holding `initial` in order. Construction does not notify.
    pub fn new(initial: Vec<C>, owner: &ChangeNotifier) -> EditorResult<Self> {
        let changes = owner.child();
        let items = initial
            .into_iter()
            .map(|component| registry::build_as(component, &changes))
            .collect::<EditorResult<Vec<_>>>()?;

        Ok(Self {
            items,
            gap: AppendGap::default(),
            changes,
        })
    }

    /// Build a node for `component` and add it after the last entry
    pub fn append(&mut self, component: C) -> EditorResult<()> {
        let mut node = registry::build_as(component, &self.changes)?;
        node.set_read_only(self.gap.read_only);

        self.items.push(node);

        debug!(category = %C::CATEGORY, len = self.items.len(), "Appended to list");
        self.changes.notify(ChangeOrigin::ListAppended);
        Ok(())
    }

    /// `append` for an untyped component, failing if it belongs elsewhere
    pub fn append_component(&mut self, component: LanguageComponent) -> EditorResult<()> {
        let kind = component.kind();

        let component = C::try_from(component).map_err(|_| {
            error!(expected = %C::CATEGORY, found = ?kind, "Incompatible component reached list");
            EditorError::IncompatibleComponent {
                expected: C::CATEGORY,
                found: kind,
            }
        })?;

        self.append(component)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[C::Node] {
        &self.items
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut C::Node> {
        self.items.get_mut(index)
    }

    pub fn accepts(&self, component: &LanguageComponent) -> bool {
        component.category() == C::CATEGORY
    }

    /// Whether the append gap should take a drop of `component` right now
    pub fn is_acceptable(&self, component: &LanguageComponent) -> bool {
        !self.gap.read_only && self.accepts(component)
    }

    pub fn append_label(&self) -> &'static str {
        C::APPEND_LABEL
    }
}

impl<C: ListCategory> EditableNode for ListEditor<C> {
    type Model = Vec<C>;

    fn to_model(&self) -> Vec<C> {
        self.items.iter().map(|item| item.to_model()).collect()
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.gap.read_only = read_only;
        for item in &mut self.items {
            item.set_read_only(read_only);
        }
    }

    fn is_read_only(&self) -> bool {
        self.gap.read_only
    }

    fn changes(&self) -> &ChangeNotifier {
        &self.changes
    }

    fn for_each_target(&mut self, visit: &mut dyn FnMut(&mut dyn DropTarget)) {
        for item in &mut self.items {
            item.for_each_target(visit);
        }
        visit(self);
    }
}

impl<C: ListCategory> DropTarget for ListEditor<C> {
    fn category(&self) -> Category {
        C::CATEGORY
    }

    fn label(&self) -> &'static str {
        C::APPEND_LABEL
    }

    fn is_drop_enabled(&self) -> bool {
        !self.gap.read_only
    }

    fn is_acceptable(&self, component: &LanguageComponent) -> bool {
        ListEditor::is_acceptable(self, component)
    }

    fn accept(&mut self, component: LanguageComponent) -> EditorResult<()> {
        self.append_component(component)
    }

    fn is_highlighted(&self) -> bool {
        self.gap.highlighted
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        self.gap.highlighted = highlighted;
    }
}

/// Pre- or post-commands of a scene
#[derive(Debug)]
pub struct CommandSequenceEditor {
    commands: ListEditor<Statement>,
}

impl CommandSequenceEditor {
    pub fn new(sequence: CommandSequence, owner: &ChangeNotifier) -> EditorResult<Self> {
        Ok(Self {
            commands: ListEditor::new(sequence.commands, owner)?,
        })
    }

    pub fn add_command(&mut self, command: Statement) -> EditorResult<()> {
        self.commands.append(command)
    }

    pub fn commands(&self) -> &ListEditor<Statement> {
        &self.commands
    }

    pub fn commands_mut(&mut self) -> &mut ListEditor<Statement> {
        &mut self.commands
    }
}

impl EditableNode for CommandSequenceEditor {
    type Model = CommandSequence;

    fn to_model(&self) -> CommandSequence {
        CommandSequence::new(self.commands.to_model())
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.commands.set_read_only(read_only);
    }

    fn is_read_only(&self) -> bool {
        self.commands.is_read_only()
    }

    fn changes(&self) -> &ChangeNotifier {
        self.commands.changes()
    }

    fn for_each_target(&mut self, visit: &mut dyn FnMut(&mut dyn DropTarget)) {
        self.commands.for_each_target(visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use montage_language::{NumberExpression, TextExpression};

    fn commands() -> Vec<Statement> {
        vec![
            Statement::set("curr_duration", NumberExpression::value(5.0)),
            Statement::get("item"),
            Statement::set("curr_offset", NumberExpression::Gap),
        ]
    }

    #[test]
    fn test_append_preserves_call_order() {
        let owner = ChangeNotifier::root();
        let mut editor = CommandSequenceEditor::new(CommandSequence::empty(), &owner).unwrap();

        for command in commands() {
            editor.add_command(command).unwrap();
        }

        assert_eq!(editor.to_model(), CommandSequence::new(commands()));
        assert_eq!(owner.emitted(), 3);
    }

    #[test]
    fn test_initial_entries_are_silent() {
        let owner = ChangeNotifier::root();
        let editor = CommandSequenceEditor::new(CommandSequence::new(commands()), &owner).unwrap();

        assert_eq!(editor.commands().len(), 3);
        assert_eq!(owner.emitted(), 0);
    }

    #[test]
    fn test_failed_append_leaves_list_untouched() {
        let owner = ChangeNotifier::root();
        let mut editor = CommandSequenceEditor::new(CommandSequence::empty(), &owner).unwrap();

        let result = editor.add_command(Statement::get("not_a_variable"));
        assert!(matches!(result, Err(EditorError::UnknownVariable(_))));
        assert!(editor.commands().is_empty());
        assert_eq!(owner.emitted(), 0);
    }

    #[test]
    fn test_append_component_checks_category() {
        let owner = ChangeNotifier::root();
        let mut list = ListEditor::<Statement>::new(vec![], &owner).unwrap();

        let result = list.append_component(TextExpression::value("hello").into());
        assert!(matches!(result, Err(EditorError::IncompatibleComponent { .. })));
        assert!(list.is_empty());
    }

    #[test]
    fn test_read_only_list_keeps_gap_but_rejects_drops() {
        let owner = ChangeNotifier::root();
        let mut list = ListEditor::<Statement>::new(commands(), &owner).unwrap();
        let candidate: LanguageComponent = Statement::get("item").into();

        assert!(list.is_acceptable(&candidate));
        list.set_read_only(true);

        assert!(!list.is_acceptable(&candidate));
        assert_eq!(list.append_label(), "drag command here");
        assert!(list.items().iter().all(|item| item.is_read_only()));
    }
}

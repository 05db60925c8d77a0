use crate::change::ChangeNotifier;
use crate::drag::DropTarget;

/// Capability shared by every widget that represents a language component
///
/// Each implementation:
/// - Rebuilds its component from current UI state on every `to_model()`
/// - Forwards read-only state to every nested control, slot and list
/// - Reports mutations through its own `changes()` notifier
pub trait EditableNode {
    /// Component this node derives
    type Model;

    /// Reconstruct the current component from widget state
    fn to_model(&self) -> Self::Model;

    fn set_read_only(&mut self, read_only: bool);

    fn is_read_only(&self) -> bool;

    /// Notifier this node reports through
    fn changes(&self) -> &ChangeNotifier;

    /// Visit nested drop targets depth-first, in layout order
    fn for_each_target(&mut self, _visit: &mut dyn FnMut(&mut dyn DropTarget)) {}
}

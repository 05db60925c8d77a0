//! # Typed Slots
//!
//! A slot is a single-child container keyed to one AST category.
//!
//! ## Semantics
//!
//! ### fill
//! - Builds the new occupant first, then evicts the old one
//! - A gap sentinel leaves the slot empty
//! - Always notifies, even when the slot goes from empty to empty
//!
//! ### empty
//! - Fails with `SlotNotOccupied` if there is nothing to evict
//!
//! ### to_model
//! - The occupant's current component, or the category's gap sentinel
//!
//! Acceptance is decided by [`Slot::is_acceptable`] at the drop boundary;
//! `fill` trusts its caller, while `fill_component` re-checks the category
//! because it receives an untyped component.

use crate::category::GapCategory;
use crate::change::{ChangeNotifier, ChangeOrigin};
use crate::drag::DropTarget;
use crate::editable::EditableNode;
use crate::errors::{EditorError, EditorResult};
use crate::registry;
use montage_language::{
    Category, LanguageComponent, NumberExpression, TextExpression, VideoCollectionExpression,
    VideoExpression,
};
use tracing::{debug, error};

pub type NumberSlot = Slot<NumberExpression>;
pub type TextSlot = Slot<TextExpression>;
pub type VideoSlot = Slot<VideoExpression>;
pub type VideoCollectionSlot = Slot<VideoCollectionExpression>;

/// Single-occupant container accepting one category
#[derive(Debug)]
pub struct Slot<C: GapCategory> {
    occupant: Option<Box<C::Node>>,
    read_only: bool,
    highlighted: bool,
    changes: ChangeNotifier,
}

impl<C: GapCategory> Slot<C> {
    /// Slot holding `initial` (a gap leaves it empty). Construction does not
    /// notify.
    pub fn new(initial: C, owner: &ChangeNotifier) -> EditorResult<Self> {
        let changes = owner.child();
        let occupant = Self::materialize(initial, &changes)?;

        Ok(Self {
            occupant,
            read_only: false,
            highlighted: false,
            changes,
        })
    }

    pub fn empty_slot(owner: &ChangeNotifier) -> Self {
        Self {
            occupant: None,
            read_only: false,
            highlighted: false,
            changes: owner.child(),
        }
    }

    fn materialize(component: C, changes: &ChangeNotifier) -> EditorResult<Option<Box<C::Node>>> {
        if component.is_gap() {
            return Ok(None);
        }
        registry::build_as(component, changes).map(|node| Some(Box::new(node)))
    }

    /// Replace the occupant with a widget built from `component`
    pub fn fill(&mut self, component: C) -> EditorResult<()> {
        let mut occupant = Self::materialize(component, &self.changes)?;

        if let Some(node) = occupant.as_mut() {
            node.set_read_only(self.read_only);
        }

        if let Some(evicted) = std::mem::replace(&mut self.occupant, occupant) {
            debug!(category = %C::CATEGORY, evicted = ?evicted, "Evicted slot occupant");
        }

        debug!(category = %C::CATEGORY, full = self.is_full(), "Filled slot");
        self.changes.notify(ChangeOrigin::SlotFilled);
        Ok(())
    }

    /// `fill` for an untyped component, failing if it belongs elsewhere
    pub fn fill_component(&mut self, component: LanguageComponent) -> EditorResult<()> {
        let kind = component.kind();

        let component = C::try_from(component).map_err(|_| {
            error!(expected = %C::CATEGORY, found = ?kind, "Incompatible component reached slot");
            EditorError::IncompatibleComponent {
                expected: C::CATEGORY,
                found: kind,
            }
        })?;

        self.fill(component)
    }

    /// Remove the occupant
    pub fn empty(&mut self) -> EditorResult<()> {
        if self.occupant.take().is_none() {
            return Err(EditorError::SlotNotOccupied {
                category: C::CATEGORY,
            });
        }

        debug!(category = %C::CATEGORY, "Emptied slot");
        self.changes.notify(ChangeOrigin::SlotEmptied);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.occupant.is_some()
    }

    /// True if `component` belongs to this slot's category, regardless of
    /// read-only state
    pub fn accepts(&self, component: &LanguageComponent) -> bool {
        component.category() == C::CATEGORY
    }

    /// Whether a drop of `component` should be allowed right now
    pub fn is_acceptable(&self, component: &LanguageComponent) -> bool {
        !self.read_only && self.accepts(component)
    }

    pub fn occupant(&self) -> Option<&C::Node> {
        self.occupant.as_deref()
    }

    pub fn occupant_mut(&mut self) -> Option<&mut C::Node> {
        self.occupant.as_deref_mut()
    }

    pub fn placeholder(&self) -> &'static str {
        C::PLACEHOLDER
    }
}

impl<C: GapCategory> EditableNode for Slot<C> {
    type Model = C;

    fn to_model(&self) -> C {
        match &self.occupant {
            Some(node) => node.to_model(),
            None => C::gap(),
        }
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
        if let Some(node) = self.occupant.as_mut() {
            node.set_read_only(read_only);
        }
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn changes(&self) -> &ChangeNotifier {
        &self.changes
    }

    fn for_each_target(&mut self, visit: &mut dyn FnMut(&mut dyn DropTarget)) {
        visit(self);
        if let Some(node) = self.occupant.as_mut() {
            node.for_each_target(visit);
        }
    }
}

impl<C: GapCategory> DropTarget for Slot<C> {
    fn category(&self) -> Category {
        C::CATEGORY
    }

    fn label(&self) -> &'static str {
        C::PLACEHOLDER
    }

    fn is_full(&self) -> bool {
        Slot::is_full(self)
    }

    fn is_drop_enabled(&self) -> bool {
        !self.read_only
    }

    fn is_acceptable(&self, component: &LanguageComponent) -> bool {
        Slot::is_acceptable(self, component)
    }

    fn accept(&mut self, component: LanguageComponent) -> EditorResult<()> {
        self.fill_component(component)
    }

    fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}

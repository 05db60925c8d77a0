//! # Script Document
//!
//! Editable tree of one act, plus the bookkeeping an application needs
//! around it.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Build → Edit / Drop → to_model → Save
//!   ↓      ↓          ↓            ↓        ↓
//! JSON  ActNode   notifications   Act     JSON
//! ```
//!
//! Every structural change below the root bumps `version` and marks the
//! document dirty. Building the tree does neither.

use crate::change::{ChangeNotifier, ScriptChange};
use crate::drag::{DragController, DragOutcome, DragPayload};
use crate::editable::EditableNode;
use crate::errors::EditorResult;
use crate::nodes::ActNode;
use crate::targets::{self, TargetInfo};
use montage_language::Act;
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct Revision {
    version: Cell<u64>,
    dirty: Cell<bool>,
}

/// Editable act with change tracking
#[derive(Debug)]
pub struct ScriptDocument {
    root: ActNode,
    changes: ChangeNotifier,
    revision: Rc<Revision>,
}

impl ScriptDocument {
    pub fn new(act: Act) -> EditorResult<Self> {
        let changes = ChangeNotifier::root();
        let root = ActNode::new(act, &changes)?;

        let revision = Rc::new(Revision::default());
        let tracker = revision.clone();
        changes.subscribe(move |change: &ScriptChange| {
            tracker.version.set(tracker.version.get() + 1);
            tracker.dirty.set(true);
            debug!(origin = ?change.origin, version = tracker.version.get(), "Script changed");
        });

        info!(scenes = root.scenes().len(), "Opened script");
        Ok(Self {
            root,
            changes,
            revision,
        })
    }

    /// Current act, derived from the live tree
    pub fn to_model(&self) -> Act {
        self.root.to_model()
    }

    pub fn root(&self) -> &ActNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut ActNode {
        &mut self.root
    }

    /// Listen for every change anywhere in the tree
    pub fn subscribe(&self, listener: impl Fn(&ScriptChange) + 'static) {
        self.changes.subscribe(listener);
    }

    /// Number of changes since the document was opened
    pub fn version(&self) -> u64 {
        self.revision.version.get()
    }

    pub fn is_dirty(&self) -> bool {
        self.revision.dirty.get()
    }

    /// Mark the current state as saved
    pub fn mark_clean(&mut self) {
        self.revision.dirty.set(false);
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.root.set_read_only(read_only);
    }

    pub fn targets(&mut self) -> Vec<TargetInfo> {
        targets::collect_targets(&mut self.root)
    }

    /// Highlight the targets that would take `payload`
    pub fn highlight_for(&mut self, payload: &DragPayload) -> EditorResult<usize> {
        let component = payload.decode()?;
        Ok(targets::highlight_acceptable(&mut self.root, &component))
    }

    pub fn clear_highlights(&mut self) {
        targets::clear_highlights(&mut self.root);
    }

    /// Release `drag` over the target at `index`
    pub fn drop_at(&mut self, drag: &mut DragController, index: usize) -> EditorResult<DragOutcome> {
        let outcome = targets::drop_at(drag, &mut self.root, index);
        if !drag.is_dragging() {
            self.clear_highlights();
        }
        outcome
    }
}

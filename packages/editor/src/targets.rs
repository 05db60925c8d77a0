//! # Drop-target Traversal
//!
//! Every slot and list append gap below a node is a drop target. Targets are
//! numbered depth-first in layout order, which is the order
//! [`EditableNode::for_each_target`] visits them; the numbering is only
//! stable until the next structural change.

use crate::drag::{DragController, DragOutcome, DropTarget};
use crate::editable::EditableNode;
use crate::errors::{EditorError, EditorResult};
use montage_language::{Category, LanguageComponent};
use serde::Serialize;
use tracing::debug;

/// Snapshot of one drop target, for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetInfo {
    pub index: usize,
    pub category: Category,
    pub label: &'static str,
    pub full: bool,
    pub enabled: bool,
    pub highlighted: bool,
}

pub fn collect_targets<N: EditableNode + ?Sized>(root: &mut N) -> Vec<TargetInfo> {
    let mut targets = Vec::new();

    root.for_each_target(&mut |target: &mut dyn DropTarget| {
        let index = targets.len();
        targets.push(TargetInfo {
            index,
            category: target.category(),
            label: target.label(),
            full: target.is_full(),
            enabled: target.is_drop_enabled(),
            highlighted: target.is_highlighted(),
        });
    });

    targets
}

/// Run `f` on the target at `index`
pub fn with_target<N, R>(
    root: &mut N,
    index: usize,
    f: impl FnOnce(&mut dyn DropTarget) -> R,
) -> EditorResult<R>
where
    N: EditableNode + ?Sized,
{
    let mut f = Some(f);
    let mut result = None;
    let mut position = 0;

    root.for_each_target(&mut |target: &mut dyn DropTarget| {
        if position == index {
            if let Some(f) = f.take() {
                result = Some(f(target));
            }
        }
        position += 1;
    });

    result.ok_or(EditorError::NoSuchTarget(index))
}

/// Highlight every target that would take `component` and clear the rest.
/// Returns how many were highlighted.
pub fn highlight_acceptable<N: EditableNode + ?Sized>(
    root: &mut N,
    component: &LanguageComponent,
) -> usize {
    let mut highlighted = 0;

    root.for_each_target(&mut |target: &mut dyn DropTarget| {
        let acceptable = target.is_acceptable(component);
        target.set_highlighted(acceptable);
        if acceptable {
            highlighted += 1;
        }
    });

    debug!(kind = ?component.kind(), highlighted, "Highlighted drop targets");
    highlighted
}

pub fn clear_highlights<N: EditableNode + ?Sized>(root: &mut N) {
    root.for_each_target(&mut |target: &mut dyn DropTarget| target.set_highlighted(false));
}

/// Release the active drag over the target at `index`. An index past the
/// last target fails with `NoSuchTarget` and leaves the drag active.
pub fn drop_at<N: EditableNode + ?Sized>(
    drag: &mut DragController,
    root: &mut N,
    index: usize,
) -> EditorResult<DragOutcome> {
    if !drag.is_dragging() {
        return Err(EditorError::NoActiveDrag);
    }

    with_target(root, index, |target| drag.drop_on(target))?
}

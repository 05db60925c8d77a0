//! # Montage Editor
//!
//! Typed-slot, drag-and-drop structural editor for montage scripts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ language: Act / Scene / expressions (AST)   │
//! └─────────────────────────────────────────────┘
//!                ↓ registry::build    ↑ to_model
//! ┌─────────────────────────────────────────────┐
//! │ editor: live tree of editable nodes         │
//! │  - Slots holding one node of one category   │
//! │  - Append-only lists of statements/scenes   │
//! │  - Change notifications up to the root      │
//! │  - Drag payloads dropped onto targets       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ application: dirty flag, autosave, UI       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The widget tree is the source of truth**: the AST is derived on
//!    demand and never patched in place
//! 2. **Slots are typed**: a slot only ever holds a node of its category
//! 3. **Mutations are atomic**: a failed fill or append leaves no trace and
//!    emits nothing
//! 4. **Drags carry copies**: a payload is a detached snapshot, consumed by
//!    at most one target
//!
//! ## Usage
//!
//! ```rust,ignore
//! use montage_editor::{palette, DragController, ScriptDocument};
//!
//! let mut document = ScriptDocument::new(act)?;
//! let mut drag = DragController::new();
//!
//! drag.start(palette::find("Number").unwrap())?;
//! document.drop_at(&mut drag, 2)?;
//!
//! let act = document.to_model();
//! ```

mod category;
mod change;
mod controls;
mod document;
mod drag;
mod editable;
mod errors;
mod list;
mod slot;

pub mod nodes;
pub mod palette;
pub mod registry;
pub mod targets;

pub use category::{EditableCategory, GapCategory, ListCategory};
pub use change::{ChangeNotifier, ChangeOrigin, ScriptChange};
pub use controls::{Choice, CommentBox, NumberField, TextField};
pub use document::ScriptDocument;
pub use drag::{
    CancelReason, DragController, DragEvent, DragOutcome, DragPayload, DragSource, DragState,
    DropTarget, LC_MIME_FORMAT,
};
pub use editable::EditableNode;
pub use errors::{EditorError, EditorResult};
pub use list::{CommandSequenceEditor, ListEditor};
pub use nodes::Node;
pub use slot::{NumberSlot, Slot, TextSlot, VideoCollectionSlot, VideoSlot};
pub use targets::TargetInfo;

// Re-export the language for convenience
pub use montage_language as language;

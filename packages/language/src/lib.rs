//! # Montage Language
//!
//! Abstract syntax tree of the video-scene scripting language.
//!
//! Components are plain immutable values. The editor builds editable
//! widgets from them and derives fresh ones back on demand; nothing in this
//! crate is ever mutated in place by the editor.

pub mod ast;
pub mod category;
pub mod document;
pub mod error;

pub use ast::*;
pub use category::{Category, ComponentKind};
pub use error::{DocumentError, DocumentResult};

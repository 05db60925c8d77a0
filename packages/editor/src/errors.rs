//! Error types for the editor

use montage_language::{Category, ComponentKind};
use thiserror::Error;

pub type EditorResult<T> = Result<T, EditorError>;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("No editable representation is registered for {0:?}")]
    UnsupportedComponent(ComponentKind),

    #[error("The {category} slot is not occupied")]
    SlotNotOccupied { category: Category },

    #[error("{found:?} cannot be placed where a {expected} is expected")]
    IncompatibleComponent {
        expected: Category,
        found: ComponentKind,
    },

    #[error("Not a number: {0:?}")]
    InvalidNumber(String),

    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Option is not available: {0}")]
    UnknownOption(String),

    #[error("Component is read-only")]
    ReadOnly,

    #[error("A drag is already in progress")]
    DragInProgress,

    #[error("No drag is in progress")]
    NoActiveDrag,

    #[error("Unknown payload format: {0}")]
    UnknownPayloadFormat(String),

    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("No drop target at index {0}")]
    NoSuchTarget(usize),
}

use crate::category::ComponentKind;
use thiserror::Error;

pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected an act at the document root, found {found:?}")]
    NotAnAct { found: ComponentKind },
}

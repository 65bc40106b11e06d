//! Error types for grid model operations

use crate::{BoxId, ContentKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridModelError {
    #[error("Duplicate box id: {0}")]
    DuplicateBoxId(BoxId),

    #[error("Box id must not be empty")]
    EmptyBoxId,

    #[error("Invalid size for box {id}: {w}x{h}")]
    InvalidSize { id: BoxId, w: u32, h: u32 },

    #[error("Grid must have at least one column, got {0}")]
    InvalidColumns(u32),

    #[error("Empty {0} content submitted")]
    EmptyContent(ContentKind),

    #[error("Unknown content type: {0}")]
    UnknownContentKind(String),
}

pub type Result<T> = std::result::Result<T, GridModelError>;

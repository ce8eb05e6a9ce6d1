//! Board error types

/// Errors raised by indexed board accessors and table validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("node index {index} out of range (board has {len} nodes)")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid adjacency table: {0}")]
    InvalidAdjacency(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;

/// Check `index` against a table of `len` entries
pub(crate) fn check_index(index: usize, len: usize) -> Result<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(BoardError::OutOfRange { index, len })
    }
}

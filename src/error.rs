use thiserror::Error;

// Unified error type for sparse-row

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("invalid row access index {row} (matrix has {rows} rows)")]
    InvalidRowIndex { row: usize, rows: usize },
    #[error("vector sizes do not match: expected {expected}, found {found}")]
    SizeMismatch { expected: usize, found: usize },
    #[error("bad access index: element ({row}, {column}) already exists")]
    DuplicateEntry { row: usize, column: usize },
    #[error("division by zero detected")]
    DivisionByZero,
    #[error("invalid matrix index ({row}, {column}) for a {rows}x{columns} matrix")]
    InvalidIndex {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

/// Fails with [`RowError::SizeMismatch`] unless both sizes agree.
pub(crate) fn check_size(expected: usize, found: usize) -> Result<(), RowError> {
    if expected != found {
        return Err(RowError::SizeMismatch { expected, found });
    }
    Ok(())
}

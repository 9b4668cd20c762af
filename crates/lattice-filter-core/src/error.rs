//! Error types for Lattice Filter.

/// A specialized Result type for Lattice Filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;

/// The main error type for Lattice Filter operations.
///
/// Removal past the end of a list is not an error: `remove_at` reports it as
/// an absent value instead, since UI-driven removals routinely race with the
/// list shrinking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// A position-addressed read fell outside the displayed rows.
    #[error("Index {index} is out of range for {len} displayed rows")]
    IndexOutOfRange { index: usize, len: usize },

    /// A structural change does not fit the list it was applied to.
    #[error("Change at index {index} does not fit a mirrored list of {len} rows")]
    ChangeOutOfRange { index: usize, len: usize },
}

impl FilterError {
    /// Create an out-of-range read error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an error for a change that does not fit a mirrored list.
    pub fn change_out_of_range(index: usize, len: usize) -> Self {
        Self::ChangeOutOfRange { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FilterError::index_out_of_range(5, 3);
        assert_eq!(err.to_string(), "Index 5 is out of range for 3 displayed rows");

        let err = FilterError::change_out_of_range(4, 2);
        assert_eq!(
            err.to_string(),
            "Change at index 4 does not fit a mirrored list of 2 rows"
        );
    }
}

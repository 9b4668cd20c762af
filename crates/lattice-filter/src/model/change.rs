//! Structural changes emitted by list models.

use lattice_filter_core::{FilterError, Result};

/// A single positional edit to a displayed list.
///
/// Indices are always relative to the list as it stood when the change was
/// emitted, so an observer can replay changes one by one against its own
/// mirror of the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListChange {
    /// A row was inserted at `index`.
    Inserted(usize),
    /// The row at `index` was removed.
    Removed(usize),
    /// The row at `from` was taken out and reinserted at `to`.
    Moved { from: usize, to: usize },
    /// Rows `start..start + count` should be redrawn.
    ///
    /// This is a coarse invalidation hint that follows single-row inserts and
    /// removals. It carries no structural change of its own.
    RangeChanged { start: usize, count: usize },
    /// All rows were replaced; observers should reload them wholesale.
    Reset,
}

impl ListChange {
    /// Returns `true` for changes that alter the row layout.
    pub fn is_structural(&self) -> bool {
        !matches!(self, Self::RangeChanged { .. })
    }

    /// Applies this change to an observer-side mirror of the rows.
    ///
    /// `current` is the model's rows right after the change, used to pick up
    /// the value of an inserted row. Fails without touching `mirror` when an
    /// index does not fit.
    pub fn apply_to<T: Clone>(&self, mirror: &mut Vec<T>, current: &[T]) -> Result<()> {
        match *self {
            Self::Inserted(index) => {
                if index > mirror.len() {
                    return Err(FilterError::change_out_of_range(index, mirror.len()));
                }
                let value = current
                    .get(index)
                    .ok_or_else(|| FilterError::change_out_of_range(index, current.len()))?;
                mirror.insert(index, value.clone());
            }
            Self::Removed(index) => {
                if index >= mirror.len() {
                    return Err(FilterError::change_out_of_range(index, mirror.len()));
                }
                mirror.remove(index);
            }
            Self::Moved { from, to } => {
                let len = mirror.len();
                if from >= len || to >= len {
                    return Err(FilterError::change_out_of_range(from.max(to), len));
                }
                let value = mirror.remove(from);
                mirror.insert(to, value);
            }
            Self::RangeChanged { start, count } => {
                if start + count > mirror.len() {
                    return Err(FilterError::change_out_of_range(start + count, mirror.len()));
                }
            }
            Self::Reset => {
                mirror.clear();
                mirror.extend_from_slice(current);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_insert_takes_value_from_current() {
        let mut mirror = vec!["a", "c"];
        ListChange::Inserted(1)
            .apply_to(&mut mirror, &["a", "b", "c"])
            .unwrap();
        assert_eq!(mirror, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_apply_move_is_remove_then_insert() {
        let mut mirror = vec!["x", "y", "z"];
        ListChange::Moved { from: 2, to: 0 }
            .apply_to(&mut mirror, &[])
            .unwrap();
        assert_eq!(mirror, vec!["z", "x", "y"]);
    }

    #[test]
    fn test_apply_rejects_out_of_range() {
        let mut mirror = vec![1, 2];
        assert_eq!(
            ListChange::Removed(2).apply_to(&mut mirror, &[1, 2]),
            Err(FilterError::change_out_of_range(2, 2))
        );
        assert!(ListChange::Inserted(3).apply_to(&mut mirror, &[1, 2, 3]).is_err());
        assert!(
            ListChange::Moved { from: 0, to: 2 }
                .apply_to(&mut mirror, &[])
                .is_err()
        );
        assert_eq!(mirror, vec![1, 2]);
    }

    #[test]
    fn test_range_hint_is_not_structural() {
        let mut mirror = vec![1, 2, 3];
        let hint = ListChange::RangeChanged { start: 1, count: 2 };
        assert!(!hint.is_structural());
        hint.apply_to(&mut mirror, &[1, 2, 3]).unwrap();
        assert_eq!(mirror, vec![1, 2, 3]);
        assert!(ListChange::Removed(0).is_structural());
    }

    #[test]
    fn test_apply_reset_reloads_rows() {
        let mut mirror = vec![1, 2, 3];
        ListChange::Reset.apply_to(&mut mirror, &[7, 8]).unwrap();
        assert_eq!(mirror, vec![7, 8]);
    }
}

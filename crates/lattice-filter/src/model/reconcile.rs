//! Animated reconciliation of a displayed list towards a target list.
//!
//! [`reconcile`] edits a list in place until it matches a target, reporting
//! every edit as a [`ListChange`]. Edits come in three phases:
//!
//! 1. **Removals**, walking the current list from the back, so earlier indices
//!    stay put while later rows disappear.
//! 2. **Additions**, walking the target from the front, inserting each missing
//!    row at its target index.
//! 3. **Moves**, walking the target from the back, pulling each row into its
//!    target index. Rows behind the cursor are already in place and are never
//!    disturbed again.
//!
//! Every reported index is valid against the list at the moment it is
//! reported, which lets a view apply the edits one at a time and animate them.
//! The edit sequence is not minimal in the edit-distance sense.
//!
//! # Duplicates
//!
//! Rows are matched by equality, so equal rows are interchangeable. Presence
//! is counted rather than tested: a value held `k` times by the target keeps
//! its leftmost `k` copies during removal and gains copies during addition
//! until the counts match. During the move phase a row already sitting at its
//! target index stays; otherwise the leftmost equal row not yet placed is
//! taken.
//!
//! # Example
//!
//! ```
//! use lattice_filter::model::{reconcile, ListChange};
//!
//! let mut rows = vec!["x", "y", "z"];
//! let mut changes = Vec::new();
//! reconcile(&mut rows, &["z", "x", "y"], |change, _| changes.push(change));
//!
//! assert_eq!(rows, vec!["z", "x", "y"]);
//! assert_eq!(
//!     changes,
//!     vec![ListChange::Moved { from: 1, to: 2 }, ListChange::Moved { from: 0, to: 1 }]
//! );
//! ```

use lattice_filter_core::logging::targets;

use super::change::ListChange;

/// Counts of the edits performed by one reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Rows removed during the removal phase.
    pub removed: usize,
    /// Rows inserted during the addition phase.
    pub inserted: usize,
    /// Rows relocated during the move phase.
    pub moved: usize,
}

impl ReconcileSummary {
    /// Total number of edits.
    pub fn total(&self) -> usize {
        self.removed + self.inserted + self.moved
    }

    /// Returns `true` if nothing had to change.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Transforms `current` into `target`, reporting each edit to `on_change`.
///
/// `on_change` receives the edit together with the rows as they stand right
/// after it was applied. When this returns, `current == target`.
#[tracing::instrument(
    skip_all,
    target = "lattice_filter::reconcile",
    level = "trace",
    fields(from_len = current.len(), to_len = target.len())
)]
pub fn reconcile<V, F>(current: &mut Vec<V>, target: &[V], mut on_change: F) -> ReconcileSummary
where
    V: PartialEq + Clone,
    F: FnMut(ListChange, &[V]),
{
    let summary = ReconcileSummary {
        removed: apply_removals(current, target, &mut on_change),
        inserted: apply_additions(current, target, &mut on_change),
        moved: apply_moves(current, target, &mut on_change),
    };
    debug_assert!(current.as_slice() == target);

    tracing::trace!(
        target: targets::RECONCILE,
        removed = summary.removed,
        inserted = summary.inserted,
        moved = summary.moved,
        "reconciled"
    );
    summary
}

fn count_of<V: PartialEq>(rows: &[V], value: &V) -> usize {
    rows.iter().filter(|row| *row == value).count()
}

fn apply_removals<V, F>(current: &mut Vec<V>, target: &[V], on_change: &mut F) -> usize
where
    V: PartialEq,
    F: FnMut(ListChange, &[V]),
{
    let mut removed = 0;
    for index in (0..current.len()).rev() {
        let row = &current[index];
        let wanted = count_of(target, row);
        // Rows in front of `index` are untouched so far.
        if count_of(&current[..index], row) >= wanted {
            current.remove(index);
            removed += 1;
            on_change(ListChange::Removed(index), current.as_slice());
        }
    }
    removed
}

fn apply_additions<V, F>(current: &mut Vec<V>, target: &[V], on_change: &mut F) -> usize
where
    V: PartialEq + Clone,
    F: FnMut(ListChange, &[V]),
{
    let mut inserted = 0;
    for (index, row) in target.iter().enumerate() {
        // `current` holds at least `index` rows here: every earlier target row
        // is already present.
        if count_of(current, row) < count_of(&target[..=index], row) {
            current.insert(index, row.clone());
            inserted += 1;
            on_change(ListChange::Inserted(index), current.as_slice());
        }
    }
    inserted
}

fn apply_moves<V, F>(current: &mut Vec<V>, target: &[V], on_change: &mut F) -> usize
where
    V: PartialEq,
    F: FnMut(ListChange, &[V]),
{
    let mut moved = 0;
    for to in (0..target.len()).rev() {
        let row = &target[to];
        if current[to] == *row {
            continue;
        }
        // Rows past `to` already match the target.
        let Some(from) = current[..to].iter().position(|candidate| candidate == row) else {
            continue;
        };
        let value = current.remove(from);
        current.insert(to, value);
        moved += 1;
        on_change(ListChange::Moved { from, to }, current.as_slice());
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs a reconciliation while replaying every change against a mirror
    /// that only sees the change stream.
    fn reconcile_mirrored<V: PartialEq + Clone + std::fmt::Debug>(
        current: &[V],
        target: &[V],
    ) -> (Vec<V>, Vec<ListChange>, ReconcileSummary) {
        let mut rows = current.to_vec();
        let mut mirror = current.to_vec();
        let mut changes = Vec::new();
        let summary = reconcile(&mut rows, target, |change, now| {
            change.apply_to(&mut mirror, now).unwrap();
            assert_eq!(mirror.as_slice(), now);
            changes.push(change);
        });
        assert_eq!(rows.as_slice(), target);
        (rows, changes, summary)
    }

    #[test]
    fn test_removals_run_back_to_front() {
        let (_, changes, summary) = reconcile_mirrored(
            &["Apple", "Banana", "Cherry", "Avocado"],
            &["Avocado"],
        );
        assert_eq!(
            changes,
            vec![
                ListChange::Removed(2),
                ListChange::Removed(1),
                ListChange::Removed(0),
            ]
        );
        assert_eq!(summary, ReconcileSummary { removed: 3, inserted: 0, moved: 0 });
    }

    #[test]
    fn test_additions_land_at_target_index() {
        let (_, changes, _) = reconcile_mirrored(&["b", "d"], &["a", "b", "c", "d", "e"]);
        assert_eq!(
            changes,
            vec![
                ListChange::Inserted(0),
                ListChange::Inserted(2),
                ListChange::Inserted(4),
            ]
        );
    }

    #[test]
    fn test_rotation_moves_from_the_back() {
        let (_, changes, summary) = reconcile_mirrored(&["X", "Y", "Z"], &["Z", "X", "Y"]);
        assert_eq!(
            changes,
            vec![
                ListChange::Moved { from: 1, to: 2 },
                ListChange::Moved { from: 0, to: 1 },
            ]
        );
        assert_eq!(summary.moved, 2);
    }

    #[test]
    fn test_all_phases_in_order() {
        let (_, changes, summary) = reconcile_mirrored(&[1, 2, 3, 4], &[4, 5, 2]);
        assert_eq!(
            changes,
            vec![
                ListChange::Removed(2),
                ListChange::Removed(0),
                ListChange::Inserted(1),
                ListChange::Moved { from: 0, to: 2 },
                ListChange::Moved { from: 0, to: 1 },
            ]
        );
        assert_eq!(summary.total(), 5);
    }

    #[test]
    fn test_identical_lists_emit_nothing() {
        let (_, changes, summary) = reconcile_mirrored(&[1, 2, 3], &[1, 2, 3]);
        assert!(changes.is_empty());
        assert!(summary.is_empty());
    }

    #[test]
    fn test_empty_edges() {
        let (_, changes, _) = reconcile_mirrored::<i32>(&[], &[1, 2]);
        assert_eq!(changes, vec![ListChange::Inserted(0), ListChange::Inserted(1)]);

        let (_, changes, _) = reconcile_mirrored(&[1, 2], &[]);
        assert_eq!(changes, vec![ListChange::Removed(1), ListChange::Removed(0)]);
    }

    #[test]
    fn test_duplicates_are_counted() {
        // An extra copy is dropped from the right.
        let (_, changes, _) = reconcile_mirrored(&["a", "b", "a"], &["a", "b"]);
        assert_eq!(changes, vec![ListChange::Removed(2)]);

        // A missing copy is added even though the value is present.
        let (_, changes, _) = reconcile_mirrored(&["a"], &["a", "a"]);
        assert_eq!(changes, vec![ListChange::Inserted(1)]);

        // A copy already in place is left alone.
        let (_, changes, _) = reconcile_mirrored(&["a", "b", "a"], &["b", "a", "a"]);
        assert_eq!(changes, vec![ListChange::Moved { from: 0, to: 1 }]);
    }
}

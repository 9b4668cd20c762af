//! Signals emitted by filterable list models.

use lattice_filter_core::Signal;

use super::change::ListChange;

/// Collection of signals emitted by a [`FilterableList`](super::FilterableList).
///
/// Views connect to these signals to stay synchronized with the model. All
/// signals are emitted after the model has applied the change they describe,
/// so indices refer to the rows as they stand at emission time.
///
/// # Signal Usage
///
/// - **Row edits**: `item_inserted`, `item_removed`, `item_moved`
/// - **Redraw hints**: `range_changed` follows single-row inserts/removals
/// - **Single stream**: `changed` repeats every edit and hint in order
/// - **Wholesale replacement**: `model_reset`
/// - **Filter completion**: `filtered`
pub struct ListSignals<V, Q> {
    /// Emitted after a row has been inserted.
    /// Args: inserted row
    pub item_inserted: Signal<usize>,

    /// Emitted after a row has been removed.
    /// Args: removed row
    pub item_removed: Signal<usize>,

    /// Emitted after a row has been moved.
    /// Args: (from row, to row)
    pub item_moved: Signal<(usize, usize)>,

    /// Emitted after a single-row insert or removal to invalidate the shifted
    /// rows.
    /// Args: (first row, row count)
    pub range_changed: Signal<(usize, usize)>,

    /// Emitted for every change above, in emission order.
    pub changed: Signal<ListChange>,

    /// Emitted after the displayed rows were replaced wholesale.
    pub model_reset: Signal<()>,

    /// Emitted once per completed filter pass.
    /// Args: (displayed rows, query)
    pub filtered: Signal<(Vec<V>, Option<Q>)>,
}

impl<V: 'static, Q: 'static> Default for ListSignals<V, Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: 'static, Q: 'static> ListSignals<V, Q> {
    /// Creates a new set of list signals.
    pub fn new() -> Self {
        Self {
            item_inserted: Signal::new(),
            item_removed: Signal::new(),
            item_moved: Signal::new(),
            range_changed: Signal::new(),
            changed: Signal::new(),
            model_reset: Signal::new(),
            filtered: Signal::new(),
        }
    }

    /// Emits the dedicated signal for `change`, then `changed`.
    pub fn emit_change(&self, change: ListChange) {
        match change {
            ListChange::Inserted(row) => self.item_inserted.emit(row),
            ListChange::Removed(row) => self.item_removed.emit(row),
            ListChange::Moved { from, to } => self.item_moved.emit((from, to)),
            ListChange::RangeChanged { start, count } => self.range_changed.emit((start, count)),
            ListChange::Reset => self.model_reset.emit(()),
        }
        self.changed.emit(change);
    }

    /// Emits a redraw hint for the rows from `start` to the end of a list of
    /// `len` rows. Nothing is emitted for an empty range.
    pub fn emit_suffix_changed(&self, start: usize, len: usize) {
        if start < len {
            self.emit_change(ListChange::RangeChanged {
                start,
                count: len - start,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_list_signals_creation() {
        let signals = ListSignals::<String, String>::new();
        assert_eq!(signals.item_inserted.connection_count(), 0);
        assert_eq!(signals.changed.connection_count(), 0);
    }

    #[test]
    fn test_emit_change_hits_both_signals() {
        let signals = ListSignals::<i32, i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let recv_moved = received.clone();
        signals.item_moved.connect(move |(from, to)| {
            recv_moved.lock().push(format!("moved {from}->{to}"));
        });

        let recv_changed = received.clone();
        signals.changed.connect(move |change| {
            recv_changed.lock().push(format!("{change:?}"));
        });

        signals.emit_change(ListChange::Moved { from: 2, to: 0 });

        let events = received.lock();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], "moved 2->0");
        assert_eq!(events[1], "Moved { from: 2, to: 0 }");
    }

    #[test]
    fn test_suffix_hint_skips_empty_range() {
        let signals = ListSignals::<i32, i32>::new();
        let hints = Arc::new(Mutex::new(Vec::new()));

        let recv = hints.clone();
        signals.range_changed.connect(move |&(start, count)| {
            recv.lock().push((start, count));
        });

        signals.emit_suffix_changed(1, 4);
        signals.emit_suffix_changed(3, 3);

        assert_eq!(*hints.lock(), vec![(1, 3)]);
    }
}

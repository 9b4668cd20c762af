//! Filterable list model.
//!
//! `FilterableList<V, Q>` keeps a full list of items together with the rows
//! currently shown for a query, and animates the shown rows from one query to
//! the next.

use std::sync::Arc;

use lattice_filter_core::logging::targets;
use lattice_filter_core::{FilterError, Result};

use super::builder::FilterableListBuilder;
use super::change::ListChange;
use super::reconcile::{reconcile, ReconcileSummary};
use super::signals::ListSignals;

/// Type alias for a filter predicate.
///
/// Returns `true` if the item should be shown for the query. Predicates should
/// be pure and total: a panicking predicate propagates to the caller.
pub type PredicateFn<V, Q> = Arc<dyn Fn(&V, &Q) -> bool + Send + Sync>;

/// Type alias for a filter completion callback.
///
/// Receives the displayed rows and the query once a filter pass completes.
pub type FilterCallback<V, Q> = Arc<dyn Fn(&[V], Option<&Q>) + Send + Sync>;

/// A list model that shows the subset of its items matching a query.
///
/// The model owns two lists:
///
/// - the **original** items, in insertion order, duplicates allowed;
/// - the **displayed** rows, the items matching the last query in original
///   order, or a full copy of the original when no filtering is active.
///
/// Position-addressed operations (`item_at`, `remove_at`, row binding) always
/// address the displayed rows. Every change to the displayed rows is
/// published through [`signals`](Self::signals) as it happens.
///
/// Items are matched by equality (`PartialEq`) when locating them across the
/// two lists. Equality must stay stable while an item is stored.
///
/// # Example
///
/// ```
/// use lattice_filter::model::FilterableList;
///
/// let mut list = FilterableList::with_predicate(
///     vec!["Apple", "Banana", "Cherry", "Avocado"],
///     |item: &&str, query: &String| item.to_lowercase().contains(query.as_str()),
/// );
///
/// list.filter(Some("av".to_string()));
/// assert_eq!(list.displayed(), &["Avocado"]);
///
/// list.filter(None);
/// assert_eq!(list.displayed_count(), 4);
/// ```
pub struct FilterableList<V, Q> {
    original: Vec<V>,
    displayed: Vec<V>,
    predicate: Option<PredicateFn<V, Q>>,
    on_filtered: Option<FilterCallback<V, Q>>,
    last_query: Option<Q>,
    signals: ListSignals<V, Q>,
}

impl<V, Q> Default for FilterableList<V, Q>
where
    V: PartialEq + Clone + 'static,
    Q: Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, Q> FilterableList<V, Q>
where
    V: PartialEq + Clone + 'static,
    Q: Clone + 'static,
{
    /// Creates an empty list without a predicate.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Creates a list showing all of `items`.
    pub fn with_items(items: Vec<V>) -> Self {
        Self {
            displayed: items.clone(),
            original: items,
            predicate: None,
            on_filtered: None,
            last_query: None,
            signals: ListSignals::new(),
        }
    }

    /// Creates a list with a predicate. All items are shown until
    /// [`filter`](Self::filter) is called.
    pub fn with_predicate<F>(items: Vec<V>, predicate: F) -> Self
    where
        F: Fn(&V, &Q) -> bool + Send + Sync + 'static,
    {
        let mut list = Self::with_items(items);
        list.predicate = Some(Arc::new(predicate));
        list
    }

    /// Returns a builder for configuring a list.
    pub fn builder() -> FilterableListBuilder<V, Q> {
        FilterableListBuilder::new()
    }

    pub(crate) fn from_parts(
        items: Vec<V>,
        predicate: Option<PredicateFn<V, Q>>,
        on_filtered: Option<FilterCallback<V, Q>>,
    ) -> Self {
        let mut list = Self::with_items(items);
        list.predicate = predicate;
        list.on_filtered = on_filtered;
        list
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Replaces all items.
    ///
    /// The displayed rows become a full copy of `items` (emitting a reset).
    /// If a query has been applied, it is applied again right away.
    pub fn set_data(&mut self, items: Vec<V>) {
        tracing::debug!(target: targets::MODEL, count = items.len(), "replacing items");
        self.displayed = items.clone();
        self.original = items;
        self.signals.emit_change(ListChange::Reset);

        if self.last_query.is_some() {
            let query = self.last_query.clone();
            self.filter(query);
        }
    }

    /// Replaces the predicate and forgets the last query.
    ///
    /// The displayed rows are left as they are until the next
    /// [`filter`](Self::filter) call.
    pub fn set_predicate<F>(&mut self, predicate: F)
    where
        F: Fn(&V, &Q) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
        self.last_query = None;
    }

    /// Drops the predicate and the last query, animating the displayed rows
    /// back to a full copy of the original items.
    pub fn clear_predicate(&mut self) -> ReconcileSummary {
        self.predicate = None;
        self.last_query = None;
        let target = self.original.clone();
        self.reconcile_displayed(&target)
    }

    /// Sets the callback invoked after every completed filter pass.
    pub fn set_filter_callback<F>(&mut self, callback: F)
    where
        F: Fn(&[V], Option<&Q>) + Send + Sync + 'static,
    {
        self.on_filtered = Some(Arc::new(callback));
    }

    /// Removes the filter completion callback.
    pub fn clear_filter_callback(&mut self) {
        self.on_filtered = None;
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Returns the displayed item at `position`.
    pub fn item_at(&self, position: usize) -> Result<&V> {
        self.displayed
            .get(position)
            .ok_or_else(|| FilterError::index_out_of_range(position, self.displayed.len()))
    }

    /// Returns the number of displayed rows.
    pub fn displayed_count(&self) -> usize {
        self.displayed.len()
    }

    /// Returns the number of items, shown or not.
    pub fn original_count(&self) -> usize {
        self.original.len()
    }

    /// Returns the number of rows a view should show.
    pub fn row_count(&self) -> usize {
        self.displayed_count()
    }

    /// Returns `true` if no rows are displayed.
    pub fn is_empty(&self) -> bool {
        self.displayed.is_empty()
    }

    /// The displayed rows.
    pub fn displayed(&self) -> &[V] {
        &self.displayed
    }

    /// All items, in insertion order.
    pub fn original(&self) -> &[V] {
        &self.original
    }

    /// An owned copy of the displayed rows.
    pub fn displayed_snapshot(&self) -> Vec<V> {
        self.displayed.clone()
    }

    /// Iterates over the displayed rows.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.displayed.iter()
    }

    /// The query applied by the last [`filter`](Self::filter) call, if any.
    pub fn last_query(&self) -> Option<&Q> {
        self.last_query.as_ref()
    }

    /// Returns `true` if a predicate is set.
    pub fn has_predicate(&self) -> bool {
        self.predicate.is_some()
    }

    /// Returns the signals for this model.
    pub fn signals(&self) -> &ListSignals<V, Q> {
        &self.signals
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Appends an item.
    ///
    /// The item is also appended to the displayed rows unless a query is
    /// applied and the item fails the predicate for it.
    pub fn add_item(&mut self, item: V) {
        if self.admits(&item) {
            self.original.push(item.clone());
            let row = self.displayed.len();
            self.insert_displayed(row, item);
        } else {
            self.original.push(item);
        }
    }

    /// Inserts an item at `position` of the original items.
    ///
    /// Positions at or past the end behave like [`add_item`](Self::add_item).
    /// The displayed row is placed right after the shown items that precede
    /// `position` in the original items, so the displayed rows keep original
    /// order even when items repeat. Without an applied query that is
    /// `position` itself.
    pub fn add_item_at(&mut self, position: usize, item: V) {
        if position >= self.original.len() {
            self.add_item(item);
            return;
        }

        if !self.admits(&item) {
            self.original.insert(position, item);
            return;
        }

        let row = self.displayed_row_for(position);
        self.original.insert(position, item.clone());
        self.insert_displayed(row, item);
    }

    /// Removes and returns the displayed item at `position`.
    ///
    /// The matching copy is removed from the original items as well: the
    /// `n`-th equal item when the row is the `n`-th equal displayed row,
    /// otherwise the first equal item.
    /// Returns `None` without changing anything if `position` is out of
    /// range; removals routinely race with the list shrinking under a view.
    pub fn remove_at(&mut self, position: usize) -> Option<V> {
        if position >= self.displayed.len() {
            tracing::trace!(
                target: targets::MODEL,
                position,
                len = self.displayed.len(),
                "ignoring removal past the end"
            );
            return None;
        }

        let item = self.displayed.remove(position);
        let occurrence = self.displayed[..position]
            .iter()
            .filter(|row| **row == item)
            .count();
        let copies: Vec<usize> = self
            .original
            .iter()
            .enumerate()
            .filter(|(_, candidate)| **candidate == item)
            .map(|(index, _)| index)
            .collect();
        if let Some(&index) = copies.get(occurrence).or(copies.first()) {
            self.original.remove(index);
        }

        self.signals.emit_change(ListChange::Removed(position));
        self.signals
            .emit_suffix_changed(position, self.displayed.len());
        Some(item)
    }

    /// Applies `query` and animates the displayed rows to the result.
    ///
    /// Without a predicate this only records the query. Otherwise the
    /// displayed rows become the items matching `query`, in original order,
    /// or all items when `query` is `None`. The filter callback and the
    /// `filtered` signal fire once the rows are in place.
    #[tracing::instrument(
        skip_all,
        target = "lattice_filter::model",
        level = "trace",
        fields(has_query = query.is_some())
    )]
    pub fn filter(&mut self, query: Option<Q>) -> ReconcileSummary {
        let Some(predicate) = self.predicate.clone() else {
            tracing::trace!(target: targets::MODEL, "no predicate set, nothing to filter");
            self.last_query = query;
            return ReconcileSummary::default();
        };

        // The predicate runs to completion before any state is touched.
        let target: Vec<V> = match &query {
            Some(query) => self
                .original
                .iter()
                .filter(|item| predicate(*item, query))
                .cloned()
                .collect(),
            None => self.original.clone(),
        };
        self.last_query = query.clone();

        let summary = self.reconcile_displayed(&target);

        if let Some(callback) = &self.on_filtered {
            callback(self.displayed.as_slice(), query.as_ref());
        }
        if self.signals.filtered.connection_count() > 0 {
            self.signals
                .filtered
                .emit((self.displayed.clone(), query));
        }
        summary
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Whether a new item belongs in the displayed rows.
    fn admits(&self, item: &V) -> bool {
        match (&self.predicate, &self.last_query) {
            (Some(predicate), Some(query)) => predicate(item, query),
            _ => true,
        }
    }

    /// Displayed row for an item about to be inserted at `position` of the
    /// original items.
    fn displayed_row_for(&self, position: usize) -> usize {
        self.original[..position]
            .iter()
            .filter(|item| self.admits(item))
            .count()
            .min(self.displayed.len())
    }

    fn insert_displayed(&mut self, row: usize, item: V) {
        self.displayed.insert(row, item);
        self.signals.emit_change(ListChange::Inserted(row));
        self.signals.emit_suffix_changed(row, self.displayed.len());
    }

    fn reconcile_displayed(&mut self, target: &[V]) -> ReconcileSummary {
        let signals = &self.signals;
        reconcile(&mut self.displayed, target, |change, _| {
            signals.emit_change(change)
        })
    }
}

impl<'a, V, Q> IntoIterator for &'a FilterableList<V, Q> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.displayed.iter()
    }
}

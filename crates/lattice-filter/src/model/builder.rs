//! Builder for filterable list models.

use std::sync::Arc;

use super::filterable::{FilterCallback, FilterableList, PredicateFn};

/// Builder pattern for creating filterable lists.
///
/// # Example
///
/// ```
/// use lattice_filter::model::FilterableListBuilder;
///
/// let list = FilterableListBuilder::new()
///     .items(vec![1, 2, 3, 4, 5, 6])
///     .predicate(|n: &i32, divisor: &i32| n % divisor == 0)
///     .query(3)
///     .build();
///
/// assert_eq!(list.displayed(), &[3, 6]);
/// ```
pub struct FilterableListBuilder<V, Q> {
    items: Vec<V>,
    predicate: Option<PredicateFn<V, Q>>,
    on_filtered: Option<FilterCallback<V, Q>>,
    query: Option<Q>,
}

impl<V, Q> Default for FilterableListBuilder<V, Q>
where
    V: PartialEq + Clone + 'static,
    Q: Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, Q> FilterableListBuilder<V, Q>
where
    V: PartialEq + Clone + 'static,
    Q: Clone + 'static,
{
    /// Creates a builder with no items and no predicate.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            predicate: None,
            on_filtered: None,
            query: None,
        }
    }

    /// Sets the initial items.
    pub fn items(mut self, items: Vec<V>) -> Self {
        self.items = items;
        self
    }

    /// Sets the filter predicate.
    pub fn predicate<F>(mut self, f: F) -> Self
    where
        F: Fn(&V, &Q) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(f));
        self
    }

    /// Sets the callback invoked after every completed filter pass.
    pub fn on_filtered<F>(mut self, f: F) -> Self
    where
        F: Fn(&[V], Option<&Q>) + Send + Sync + 'static,
    {
        self.on_filtered = Some(Arc::new(f));
        self
    }

    /// Sets a query to apply when the list is built.
    pub fn query(mut self, query: Q) -> Self {
        self.query = Some(query);
        self
    }

    /// Builds the list, applying the initial query if one was given.
    pub fn build(self) -> FilterableList<V, Q> {
        let mut list = FilterableList::from_parts(self.items, self.predicate, self.on_filtered);
        if self.query.is_some() {
            list.filter(self.query);
        }
        list
    }
}

//! Row binding for views.
//!
//! A view never reads the model's lists directly. It supplies a [`RowBinder`]
//! that turns a displayed item into whatever the view draws, and asks the
//! model to bind rows by position.

use lattice_filter_core::Result;

use super::filterable::FilterableList;

/// Turns a displayed item into a view-specific row payload.
///
/// Implemented for closures taking `(&item, position)`.
///
/// # Example
///
/// ```
/// use lattice_filter::model::{FilterableList, RowBinder};
///
/// struct Label;
///
/// impl RowBinder<String> for Label {
///     type Row = String;
///
///     fn bind_row(&self, item: &String, position: usize) -> String {
///         format!("{}. {}", position + 1, item)
///     }
/// }
///
/// let list = FilterableList::<String, ()>::with_items(vec!["Apple".into()]);
/// assert_eq!(list.bind_row(&Label, 0).unwrap(), "1. Apple");
/// ```
pub trait RowBinder<V> {
    /// The payload produced for one row.
    type Row;

    /// Binds `item`, shown at `position`, into a row payload.
    fn bind_row(&self, item: &V, position: usize) -> Self::Row;
}

impl<V, R, F> RowBinder<V> for F
where
    F: Fn(&V, usize) -> R,
{
    type Row = R;

    fn bind_row(&self, item: &V, position: usize) -> R {
        self(item, position)
    }
}

impl<V, Q> FilterableList<V, Q>
where
    V: PartialEq + Clone + 'static,
    Q: Clone + 'static,
{
    /// Binds the displayed row at `position`.
    pub fn bind_row<B>(&self, binder: &B, position: usize) -> Result<B::Row>
    where
        B: RowBinder<V> + ?Sized,
    {
        let item = self.item_at(position)?;
        Ok(binder.bind_row(item, position))
    }

    /// Binds every displayed row, in order.
    pub fn bind_rows<B>(&self, binder: &B) -> Vec<B::Row>
    where
        B: RowBinder<V> + ?Sized,
    {
        self.iter()
            .enumerate()
            .map(|(position, item)| binder.bind_row(item, position))
            .collect()
    }
}

//! Lattice Filter - filterable, animatable list models.
//!
//! This is the main crate that re-exports the core APIs alongside the model
//! layer.
//!
//! # Example
//!
//! ```
//! use lattice_filter::prelude::*;
//!
//! let mut list = FilterableList::with_predicate(
//!     vec!["Apple".to_string(), "Avocado".to_string(), "Banana".to_string()],
//!     |item: &String, query: &String| item.starts_with(query.as_str()),
//! );
//!
//! list.filter(Some("A".to_string()));
//! assert_eq!(list.displayed_count(), 2);
//! assert!(list.item_at(2).is_err());
//! ```

pub use lattice_filter_core::*;

pub mod model;
pub mod prelude;

//! Model layer for Lattice Filter.
//!
//! This module provides a list model that shows the subset of its items
//! matching a query, and animates the shown rows whenever the query or the
//! items change. This enables:
//!
//! - Search-as-you-type lists that animate instead of redrawing
//! - Views that mirror the rows incrementally from change notifications
//! - Rendering through a caller-supplied row binder
//!
//! # Core Types
//!
//! - `FilterableList`: Owns the items and the displayed rows
//! - `ListChange`: One positional edit to the displayed rows
//! - `ListSignals`: Signals for change notifications
//! - `RowBinder`: Turns a displayed item into a view row
//! - `reconcile`: The three-phase edit algorithm behind every filter pass
//!
//! # Example
//!
//! ```
//! use lattice_filter::model::{FilterableList, ListChange};
//! use std::sync::{Arc, Mutex};
//!
//! let mut list = FilterableList::with_predicate(
//!     vec!["Apple", "Banana", "Cherry"],
//!     |item: &&str, query: &&str| item.contains(*query),
//! );
//!
//! let changes = Arc::new(Mutex::new(Vec::new()));
//! let recv = changes.clone();
//! list.signals().changed.connect(move |change| {
//!     recv.lock().unwrap().push(*change);
//! });
//!
//! list.filter(Some("an"));
//! assert_eq!(list.displayed(), &["Banana"]);
//! assert_eq!(
//!     *changes.lock().unwrap(),
//!     vec![ListChange::Removed(2), ListChange::Removed(0)]
//! );
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌────────────────┐  filter(q)  ┌─────────────┐  ListChange  ┌──────────┐
//! │ FilterableList │────────────>│  reconcile  │─────────────>│ Signals  │──> View
//! │ original/shown │<────────────│ 3 phases    │              └──────────┘
//! └────────────────┘   edits     └─────────────┘
//!         │                                                     ┌──────────┐
//!         └──────────────── bind_row(position) ────────────────>│RowBinder │
//!                                                               └──────────┘
//! ```

mod binder;
mod builder;
mod change;
mod filterable;
mod reconcile;
mod signals;

pub use binder::RowBinder;
pub use builder::FilterableListBuilder;
pub use change::ListChange;
pub use filterable::{FilterCallback, FilterableList, PredicateFn};
pub use reconcile::{reconcile, ReconcileSummary};
pub use signals::ListSignals;

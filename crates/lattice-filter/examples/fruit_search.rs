//! Lattice Filter Fruit Search Example
//!
//! Types a query one keystroke at a time into a filterable list and prints the
//! row edits a list view would animate while keeping its own row count.
//!
//! Run with: cargo run -p lattice-filter --example fruit_search
//! Add `RUST_LOG=lattice_filter=trace` to see the model's own tracing.

use std::sync::Arc;

use lattice_filter::prelude::*;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let fruits = ["Apple", "Apricot", "Avocado", "Banana", "Blackberry", "Cherry", "Grape"];
    let mut list = FilterableList::builder()
        .items(fruits.iter().map(|s| s.to_string()).collect())
        .predicate(|item: &String, query: &String| {
            item.to_lowercase().contains(&query.to_lowercase())
        })
        .on_filtered(|rows: &[String], query: Option<&String>| {
            println!("  -> {} rows for {:?}", rows.len(), query);
        })
        .build();

    let changes = Arc::new(Mutex::new(Vec::new()));
    let recv = changes.clone();
    list.signals().changed.connect(move |change| {
        recv.lock().push(*change);
    });

    let mut shown = list.row_count();
    let label = |item: &String, position: usize| format!("{position:>2} {item}");

    for query in ["a", "ap", "apr", "ap", "", "berry"] {
        let query = (!query.is_empty()).then(|| query.to_string());
        println!("query {:?}", query);

        let summary = list.filter(query);
        for change in changes.lock().drain(..) {
            println!("  {:?}", change);
            match change {
                ListChange::Inserted(_) => shown += 1,
                ListChange::Removed(_) => shown -= 1,
                _ => {}
            }
        }
        println!(
            "  {} removed, {} inserted, {} moved",
            summary.removed, summary.inserted, summary.moved
        );

        for row in list.bind_rows(&label) {
            println!("    {row}");
        }
        assert_eq!(shown, list.row_count());
    }
}

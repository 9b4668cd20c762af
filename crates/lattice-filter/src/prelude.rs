//! Prelude module for Lattice Filter.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use lattice_filter::prelude::*;
//! ```

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use crate::signal::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Errors
// ============================================================================

pub use crate::FilterError;

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{
    FilterableList, FilterableListBuilder, ListChange, ListSignals, ReconcileSummary, RowBinder,
};

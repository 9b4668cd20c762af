//! Core systems for Lattice Filter.
//!
//! This crate provides the foundational pieces shared by the list models:
//!
//! - **Signal/Slot System**: Type-safe change notification ([`Signal`])
//! - **Errors**: The [`FilterError`] taxonomy and [`Result`] alias
//! - **Logging**: `tracing` target and span names ([`logging`])
//!
//! # Signal/Slot Example
//!
//! ```
//! use lattice_filter_core::Signal;
//!
//! let item_moved = Signal::<(usize, usize)>::new();
//!
//! let conn_id = item_moved.connect(|(from, to)| {
//!     println!("Row moved from {} to {}", from, to);
//! });
//!
//! item_moved.emit((2, 0));
//! item_moved.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{FilterError, Result};
pub use signal::{ConnectionGuard, ConnectionId, Signal};

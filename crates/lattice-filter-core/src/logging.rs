//! Logging facilities for Lattice Filter.
//!
//! Lattice Filter uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("lattice_filter=trace")
//!         .init();
//! }
//! ```
//!
//! Operations never log their own failures; errors are returned to the caller.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lattice_filter_core::signal";
    /// List model target.
    pub const MODEL: &str = "lattice_filter::model";
    /// Reconciler target.
    pub const RECONCILE: &str = "lattice_filter::reconcile";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_nest_under_crate_names() {
        let core = module_path!().split("::").next().unwrap();
        assert_eq!(core, "lattice_filter_core");
        assert!(targets::SIGNAL.starts_with(core));
        assert!(targets::MODEL.starts_with("lattice_filter::"));
        assert!(targets::RECONCILE.starts_with("lattice_filter::"));
    }
}

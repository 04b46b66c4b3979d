//! Dashboard query handlers.

mod compute_snapshot;

pub use compute_snapshot::{ComputeDashboardSnapshotHandler, ComputeDashboardSnapshotQuery};

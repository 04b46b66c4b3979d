//! Dashboard module - the snapshot handed to the rendering layer.

mod snapshot;

pub use snapshot::DashboardSnapshot;

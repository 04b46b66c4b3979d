//! Settings module - the singleton business-targets record.
//!
//! Holds the targets every RAG status is measured against and the partial
//! update type used to change them.

mod aggregate;
mod patch;

pub use aggregate::Settings;
pub use patch::SettingsPatch;

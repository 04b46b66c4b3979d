//! RAG Module - Red/Amber/Green classification of KPIs.
//!
//! One tagged [`ThresholdPolicy`] type covers every KPI shape: banded
//! (contribution, per-box contribution, rework) and pass/fail (install,
//! extras, cost compliance, right first time). Direction is carried by
//! [`Polarity`] rather than special-cased per KPI.

mod classifier;
mod policy;

pub use classifier::{RagClassifier, RagPolicy, RagStatus, RagStatuses};
pub use policy::{Polarity, RagBands, ThresholdPolicy};

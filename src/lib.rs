//! KPI Dashboard - weekly sales and production ledger for a small manufacturer
//!
//! Records a week's sales and production figures, rolls them up into
//! month-to-date totals, rolling four-week ratios and a forward look, and
//! classifies each KPI Red/Amber/Green against configurable targets.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

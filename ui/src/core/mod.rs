//! Core data-shaping logic: attribute extraction, symbol scaling,
//! aggregation, and the current-attribute sequence state machine.

pub mod attributes;
pub mod dataset;
pub mod error;
pub mod format;
pub mod scaling;
pub mod sequence;
pub mod stats;

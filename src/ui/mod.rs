//! Rendering. The filter panel is the only part that edits state (the
//! selection); everything else draws from already-computed inputs.

pub mod charts;
pub mod metrics;
pub mod panels;
pub mod table;

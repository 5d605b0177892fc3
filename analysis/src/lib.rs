//! Tactical analysis of recorded round telemetry.
//!
//! Rows flow one way: [`event::Event`]s are annotated against a [`geometry::Zone`]
//! and a set of weapon classes, and the annotated rows are then grouped by the
//! [`aggregate`] functions into per player/round summaries.

pub mod aggregate;
pub mod annotate;
pub mod clock;
pub mod error;
pub mod event;
pub mod geometry;
pub mod heatmap;
pub mod inventory;

//! Grid Model - Boxes, content payloads, and the canonical box collection
//!
//! This crate provides the data model for the bento grid composer: a column
//! count plus an ordered collection of boxes, each with a stable id, a
//! position and size in grid units, and an optional typed content payload.

mod box_id;
mod error;
mod geometry;
mod content;
mod grid_box;
mod grid;
mod presets;
mod seed;

pub use box_id::*;
pub use error::*;
pub use geometry::*;
pub use content::*;
pub use grid_box::*;
pub use grid::*;
pub use presets::*;
pub use seed::*;

//! Grid Engine - Centering, reconciliation, and the grid controller
//!
//! This crate owns the logic of the bento grid composer: the pure centering
//! and layout reconciliation passes, and the controller that applies user
//! and layout-surface events to the canonical grid model.

mod error;
mod centering;
mod reconcile;
mod render;
mod event;
mod controller;
mod settings;

pub use error::*;
pub use centering::*;
pub use reconcile::*;
pub use render::*;
pub use event::*;
pub use controller::*;
pub use settings::*;

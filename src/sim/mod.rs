//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (one `Pcg32` per run)
//! - Stable iteration order (insertion order, compacted in place)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::circles_overlap;
pub use state::{Bubble, Projectile, Rgb, SimState};
pub use tick::{TickReport, fire, tick};

//! Procedural point pattern generation

/// Fixed style recipes and seeded style selection
pub mod presets;
/// Canonical shape generators (grids, circles, petals, spirals, stars, mandalas)
pub mod shapes;

pub use presets::{GeneratedPattern, Style};

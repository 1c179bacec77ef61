// Domain layer - sparse Game of Life core
pub mod domain;

// Infrastructure layer - text rendering
pub mod rendering;

// Re-exports for convenience
pub use domain::{
    Bounds, Cell, Pattern, State, UnknownPattern, iterate, next_generation, presets,
    will_be_alive,
};
pub use rendering::render;

mod bounds;
mod cell;
mod engine;
mod patterns;
mod state;

pub use bounds::Bounds;
pub use cell::Cell;
pub use engine::{iterate, next_generation, will_be_alive};
pub use patterns::{Pattern, UnknownPattern, presets};
pub use state::State;

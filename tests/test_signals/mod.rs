pub mod generate;

pub use generate::{generate_sine, steady_state_gain};

pub mod band_pass;
pub mod coefficients;
pub mod filter;
pub mod iir;
pub mod math;
pub mod notch;

pub use band_pass::band_pass_coefficients;
pub use coefficients::Coefficients;
pub use filter::Filter;
pub use iir::IirFilter;
pub use math::{amplitude_to_db, peak, rms};
pub use notch::notch_coefficients;

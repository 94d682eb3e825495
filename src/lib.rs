pub mod config;
pub mod constants;
pub mod error;
pub mod signal_processing;
pub mod wav;

pub use config::{FilterConfig, FilterKind, Frequency};
pub use error::{FilterError, Result};
pub use signal_processing::{Coefficients, Filter, IirFilter};
pub use wav::{filter_interleaved, read_wav, write_wav};

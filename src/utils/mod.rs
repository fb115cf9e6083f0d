pub mod constants;
pub mod errors;

pub use constants::ClockMode;
pub use errors::SchedulingError;

pub mod error;
pub mod report;
pub mod types;

pub use error::RatioError;
pub use types::*;

/// Standard result type for ratio computations
pub type RatioResult<T> = Result<T, RatioError>;

//! Calendar arithmetic shared by the generators and the summary formatter.

pub mod boundaries;
pub mod nth_weekday;
pub mod ordinal;
pub mod shift;

// Re-export commonly used functions
pub use boundaries::*;
pub use nth_weekday::nth_weekday_of_month;
pub use ordinal::ordinal_suffix;
pub use shift::*;

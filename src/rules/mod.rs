//! Per-frequency generators.
//!
//! Each generator walks a cursor through the window one interval at a time
//! and emits raw candidates, stopping once the cursor passes the window end or
//! [`MAX_OCCURRENCES`](crate::MAX_OCCURRENCES) dates have been emitted.

pub mod daily;
pub mod helpers;
pub mod monthly;
pub mod weekly;
pub mod yearly;

#[cfg(test)]
mod tests;

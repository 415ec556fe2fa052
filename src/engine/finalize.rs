//! Sequence finalization.
//!
//! Generators bound their own emission at [`MAX_OCCURRENCES`], but the weekly
//! generator emits per week and can overshoot inside the last week, and its
//! first partial week can interleave weekdays. Finalizing sorts, removes
//! same-day duplicates and truncates again so every caller sees the same
//! shape regardless of the generator.

use chrono::NaiveDate;

use crate::MAX_OCCURRENCES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Finalized {
    pub(crate) dates: Vec<NaiveDate>,
    pub(crate) duplicates_removed: usize,
    pub(crate) truncated: usize,
}

pub(crate) fn finalize(mut candidates: Vec<NaiveDate>) -> Finalized {
    let before = candidates.len();
    candidates.sort_unstable();
    candidates.dedup();
    let duplicates_removed = before - candidates.len();

    let truncated = candidates.len().saturating_sub(MAX_OCCURRENCES);
    candidates.truncate(MAX_OCCURRENCES);

    Finalized { dates: candidates, duplicates_removed, truncated }
}

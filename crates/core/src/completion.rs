//! Completion ratios over collections of lessons and resources.

use serde::Serialize;

use crate::learning::{LearningItem, MicroLesson};
use crate::types::Percent;

/// Anything with a completion flag.
pub trait Completable {
    fn is_completed(&self) -> bool;
}

impl Completable for LearningItem {
    fn is_completed(&self) -> bool {
        self.completed
    }
}

impl Completable for MicroLesson {
    fn is_completed(&self) -> bool {
        self.completed
    }
}

impl Completable for bool {
    fn is_completed(&self) -> bool {
        *self
    }
}

impl<T: Completable + ?Sized> Completable for &T {
    fn is_completed(&self) -> bool {
        (**self).is_completed()
    }
}

/// Completed and total counts with the derived percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CompletionStats {
    pub completed: usize,
    pub total: usize,
    pub percentage: Percent,
}

/// `round(completed / total * 100)`, or 0 when `total` is 0.
pub fn ratio_percentage(completed: usize, total: usize) -> Percent {
    if total == 0 {
        return 0;
    }
    let pct = (completed as f64 / total as f64 * 100.0).round() as Percent;
    pct.min(100)
}

/// Share of `items` that are completed, as a whole percentage.
pub fn completion_percentage<T: Completable>(items: &[T]) -> Percent {
    completion_stats(items).percentage
}

pub fn completion_stats<T: Completable>(items: &[T]) -> CompletionStats {
    let completed = items.iter().filter(|i| i.is_completed()).count();
    CompletionStats {
        completed,
        total: items.len(),
        percentage: ratio_percentage(completed, items.len()),
    }
}

//! Greedy single-pass bin-packing of subtasks into day/session buckets.

use crate::models::{Schedule, Subtask, TimeMode};

/// Distributes `subtasks` over buckets of at most `budget_minutes` each.
///
/// Subtasks are taken in the given order. A subtask joins the current bucket
/// while the running total stays within budget; otherwise the next bucket is
/// opened for it. A subtask longer than the whole budget still gets a bucket
/// of its own, so nothing is dropped or split, and no bucket is ever empty.
pub fn pack(subtasks: &[Subtask], time_mode: TimeMode, budget_minutes: u32) -> Schedule {
    let mut schedule = Schedule::new();
    let mut bucket = 1;
    let mut current = Vec::new();
    let mut used = 0u32;

    for subtask in subtasks {
        let minutes = subtask.duration.as_minutes();
        if !current.is_empty() && used.saturating_add(minutes) > budget_minutes {
            schedule.push(time_mode.bucket_key(bucket), std::mem::take(&mut current));
            bucket += 1;
            used = 0;
        }
        current.push(subtask.id.clone());
        used = used.saturating_add(minutes);
    }

    if !current.is_empty() {
        schedule.push(time_mode.bucket_key(bucket), current);
    }

    schedule
}

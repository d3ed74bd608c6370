//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::TaskSummary;

/// Newtype wrapper for displaying a list of task summaries.
///
/// # Examples
///
/// ```rust
/// use taskbreaker_core::display::TaskSummaries;
///
/// let empty = TaskSummaries(vec![]);
/// assert_eq!(empty.to_string(), "No tasks found.\n");
/// ```
pub struct TaskSummaries(pub Vec<TaskSummary>);

impl TaskSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&TaskSummary> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskSummary> {
        self.0.iter()
    }
}

impl Index<usize> for TaskSummaries {
    type Output = TaskSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for TaskSummaries {
    type Item = TaskSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaskSummaries {
    type Item = &'a TaskSummary;
    type IntoIter = std::slice::Iter<'a, TaskSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TaskSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{TimeMode, TotalTime};

    fn summary(id: u64, task_name: &str) -> TaskSummary {
        TaskSummary {
            id,
            task_name: task_name.to_string(),
            time_mode: TimeMode::Hours,
            amount: 6,
            total_estimated_time: TotalTime(5),
            total_subtasks: 4,
            completed_subtasks: 1,
            created_at: Timestamp::from_second(1_640_995_200).unwrap(),
            updated_at: Timestamp::from_second(1_640_995_200).unwrap(),
        }
    }

    #[test]
    fn test_task_summaries_display() {
        let summaries = TaskSummaries(vec![summary(2, "Second"), summary(1, "First")]);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, 2);

        let output = summaries.to_string();
        assert!(output.contains("## Second (ID: 2) (1/4)"));
        assert!(output.contains("## First (ID: 1) (1/4)"));
        assert!(output.find("Second").unwrap() < output.find("First").unwrap());
        assert!(!output.starts_with("# "));
    }

    #[test]
    fn test_task_summaries_empty() {
        let summaries = TaskSummaries(Vec::new());
        assert!(summaries.is_empty());
        assert_eq!(summaries.to_string(), "No tasks found.\n");
    }
}

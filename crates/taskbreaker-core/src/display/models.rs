//! Display implementations for domain models.
//!
//! Output is Markdown: headers for plans, task lists with `[x]` markers for
//! subtasks and one bullet per schedule bucket.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Preferences, Priority, Schedule, Subtask, TaskPlan, TaskSummary, TimeMode};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Subtask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- [{}] {}. {} ({}, {})",
            if self.done { "x" } else { " " },
            self.id,
            self.name,
            self.duration,
            self.priority
        )
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bucket in self.buckets() {
            writeln!(f, "- **{}**: {}", bucket.key, bucket.subtask_ids.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for TaskPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.task_name)?;
        writeln!(f)?;

        writeln!(f, "- Budget: {} {}", self.amount, self.time_mode)?;
        writeln!(f, "- Estimated: {}", self.plan.total_estimated_time)?;
        writeln!(
            f,
            "- Progress: {}/{}",
            self.plan.completed_count(),
            self.plan.subtasks.len()
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.plan.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.plan.notes)?;
        }

        writeln!(f, "\n## Subtasks")?;
        writeln!(f)?;
        for subtask in &self.plan.subtasks {
            write!(f, "{subtask}")?;
        }

        if !self.plan.schedule.is_empty() {
            writeln!(f, "\n## Schedule")?;
            writeln!(f)?;
            write!(f, "{}", self.plan.schedule)?;
        }

        Ok(())
    }
}

impl fmt::Display for TaskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({}/{})",
            self.task_name, self.id, self.completed_subtasks, self.total_subtasks
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Budget**: {} {}, estimated {}",
            self.amount, self.time_mode, self.total_estimated_time
        )?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **Max hours per day**: {}", self.max_hours_per_day)?;
        let days: Vec<_> = self.work_days.iter().map(|d| d.as_str()).collect();
        writeln!(f, "- **Work days**: {}", days.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::{
        generator::fallback_plan,
        models::{Duration, Weekday},
    };

    fn task_plan() -> TaskPlan {
        let mut plan = fallback_plan("Build site", TimeMode::Days, &Preferences::default());
        plan.subtasks[0].done = true;
        TaskPlan {
            id: 4,
            user_id: "local".to_string(),
            task_name: "Build site".to_string(),
            time_mode: TimeMode::Days,
            amount: 2,
            plan,
            created_at: Timestamp::from_second(1_640_995_200).unwrap(),
            updated_at: Timestamp::from_second(1_640_995_200).unwrap(),
        }
    }

    #[test]
    fn test_subtask_display() {
        let mut subtask = Subtask::new(2, "Outline", Duration::Minutes(45), Priority::Low);
        assert_eq!(subtask.to_string(), "- [ ] 2. Outline (45m, Low)\n");
        subtask.done = true;
        assert!(subtask.to_string().starts_with("- [x]"));
    }

    #[test]
    fn test_task_plan_display() {
        let output = task_plan().to_string();
        assert!(output.starts_with("# 4. Build site\n"));
        assert!(output.contains("- Budget: 2 days"));
        assert!(output.contains("- Estimated: 9h"));
        assert!(output.contains("- Progress: 1/5"));
        assert!(output.contains("## Subtasks"));
        assert!(output.contains("- [x] 1. Research and planning for Build site (2h, High)"));
        assert!(output.contains("- **day1**: 1, 2, 3, 4"));
        assert!(output.contains("- **day2**: 5"));
    }

    #[test]
    fn test_summary_display() {
        let summary = TaskSummary::from(&task_plan());
        let output = summary.to_string();
        assert!(output.starts_with("## Build site (ID: 4) (1/5)"));
        assert!(output.contains("estimated 9h"));
    }

    #[test]
    fn test_preferences_display() {
        let prefs = Preferences {
            max_hours_per_day: 5,
            work_days: vec![Weekday::Monday, Weekday::Friday],
        };
        let output = prefs.to_string();
        assert!(output.contains("Max hours per day**: 5"));
        assert!(output.contains("Work days**: Monday, Friday"));
    }
}

//! Task progress and timeline views.

use crate::models::Task;

/// How many tasks are done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskProgress {
    /// Completed tasks
    pub completed: usize,
    /// All tasks
    pub total: usize,
}

impl TaskProgress {
    /// Counts completed tasks.
    #[must_use]
    pub fn new(tasks: &[Task]) -> Self {
        Self {
            completed: tasks.iter().filter(|t| t.completed).count(),
            total: tasks.len(),
        }
    }

    /// Tasks still open.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.total - self.completed
    }

    /// Completion percentage rounded to a whole number; 0 when there are no tasks.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        // Cast safety: completed <= total, so the ratio is in [0, 100].
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let percent = (self.completed as f64 / self.total as f64 * 100.0).round() as u32;
        percent
    }
}

/// Open tasks in list order.
#[must_use]
pub fn incomplete(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|t| !t.completed).collect()
}

/// Finished tasks in list order.
#[must_use]
pub fn completed(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|t| t.completed).collect()
}

/// The first `limit` open tasks, as shown on the dashboard.
#[must_use]
pub fn upcoming(tasks: &[Task], limit: usize) -> Vec<&Task> {
    tasks.iter().filter(|t| !t.completed).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::seed::SeedConfig;

    #[test]
    fn test_progress_rounds() {
        let mut tasks = SeedConfig::default().task_records();
        tasks.truncate(3);
        tasks[0].completed = true;

        let progress = TaskProgress::new(&tasks);

        assert_eq!(progress.completed, 1);
        assert_eq!(progress.remaining(), 2);
        assert_eq!(progress.percent(), 33);
    }

    #[test]
    fn test_progress_empty() {
        assert_eq!(TaskProgress::new(&[]).percent(), 0);
    }

    #[test]
    fn test_partitions_and_upcoming() {
        let mut tasks = SeedConfig::default().task_records();
        tasks[0].completed = true;
        tasks[2].completed = true;

        assert_eq!(completed(&tasks).len(), 2);
        assert_eq!(incomplete(&tasks).len(), 8);

        let next = upcoming(&tasks, 3);
        let ids: Vec<&str> = next.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4", "5"]);
    }
}

//! Dashboard summary - everything the home screen shows, computed in one pass.

use super::{
    budget::BudgetSummary,
    countdown::{Countdown, countdown_until},
    gifts::GiftSummary,
    guests::RsvpCounts,
    tasks::{TaskProgress, upcoming},
};
use crate::models::{BudgetCategory, Gift, Guest, Task, WeddingSettings};
use chrono::{DateTime, Utc};

/// Number of open tasks listed on the dashboard.
pub const UPCOMING_TASK_LIMIT: usize = 3;

/// Snapshot of derived values for the home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// Both partner names are set
    pub is_setup: bool,
    /// Time left until the wedding, if a future date is set
    pub countdown: Option<Countdown>,
    /// Budget totals
    pub budget: BudgetSummary,
    /// Guests by RSVP status
    pub rsvp: RsvpCounts,
    /// Task completion
    pub tasks: TaskProgress,
    /// Thank-you progress
    pub gifts: GiftSummary,
    /// Ids of the next open tasks
    pub upcoming_task_ids: Vec<String>,
}

/// Borrowed view of the collections a dashboard needs.
#[derive(Debug, Clone, Copy)]
pub struct DashboardInput<'a> {
    /// Settings singleton
    pub settings: &'a WeddingSettings,
    /// Budget categories
    pub budget_categories: &'a [BudgetCategory],
    /// Guests
    pub guests: &'a [Guest],
    /// Tasks
    pub tasks: &'a [Task],
    /// Gifts
    pub gifts: &'a [Gift],
}

impl DashboardSummary {
    /// Computes the summary at instant `now`.
    #[must_use]
    pub fn compute(input: DashboardInput<'_>, now: DateTime<Utc>) -> Self {
        Self {
            is_setup: input.settings.is_setup(),
            countdown: countdown_until(&input.settings.wedding_date, now),
            budget: BudgetSummary::new(input.settings, input.budget_categories),
            rsvp: RsvpCounts::tally(input.guests),
            tasks: TaskProgress::new(input.tasks),
            gifts: GiftSummary::new(input.gifts),
            upcoming_task_ids: upcoming(input.tasks, UPCOMING_TASK_LIMIT)
                .into_iter()
                .map(|t| t.id.clone())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::config::seed::SeedConfig;
    use crate::models::RsvpStatus;
    use crate::test_utils::{guest_with_status, sample_gift};

    #[test]
    fn test_compute() {
        let seed = SeedConfig::default();
        let settings = WeddingSettings {
            partner1_name: "Alex".to_string(),
            partner2_name: "Sam".to_string(),
            wedding_date: "2027-06-12".to_string(),
            total_budget: 10_000.0,
            venue_name: String::new(),
        };
        let mut budget = seed.budget_records();
        budget[0].spent = 2_500.0;
        let mut tasks = seed.task_records();
        tasks[0].completed = true;
        let guests = vec![
            guest_with_status("g1", "Jo", RsvpStatus::Confirmed),
            guest_with_status("g2", "Bea", RsvpStatus::Pending),
        ];
        let gifts = vec![sample_gift("x1", "Vase")];
        let now = DateTime::parse_from_rfc3339("2027-06-10T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let summary = DashboardSummary::compute(
            DashboardInput {
                settings: &settings,
                budget_categories: &budget,
                guests: &guests,
                tasks: &tasks,
                gifts: &gifts,
            },
            now,
        );

        assert!(summary.is_setup);
        assert_eq!(summary.countdown.unwrap().days, 2);
        assert_eq!(summary.budget.spent_percent(), Some(25.0));
        assert_eq!(summary.rsvp.confirmed, 1);
        assert_eq!(summary.rsvp.pending, 1);
        assert_eq!(summary.tasks.completed, 1);
        assert_eq!(summary.tasks.percent(), 10);
        assert_eq!(summary.gifts.pending_thank_yous(), 1);
        assert_eq!(summary.upcoming_task_ids, vec!["2", "3", "4"]);
    }
}

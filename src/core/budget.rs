//! Budget calculations.
//!
//! Totals, remaining and unallocated amounts, and per-category progress. Overspending
//! is never rejected anywhere in the store; these functions only report it.

use crate::models::{BudgetCategory, WeddingSettings};

/// Budget totals for the whole wedding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    /// Overall budget from settings
    pub total_budget: f64,
    /// Sum of category allocations
    pub total_allocated: f64,
    /// Sum of category spending
    pub total_spent: f64,
}

impl BudgetSummary {
    /// Computes totals from the settings and the category list.
    #[must_use]
    pub fn new(settings: &WeddingSettings, categories: &[BudgetCategory]) -> Self {
        Self {
            total_budget: settings.total_budget,
            total_allocated: total_allocated(categories),
            total_spent: total_spent(categories),
        }
    }

    /// Budget left after spending. Negative when overspent.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.total_budget - self.total_spent
    }

    /// Budget not yet assigned to any category. Negative when over-allocated.
    #[must_use]
    pub fn unallocated(&self) -> f64 {
        self.total_budget - self.total_allocated
    }

    /// Spending as a percentage of the total budget, `None` while no budget is set.
    #[must_use]
    pub fn spent_percent(&self) -> Option<f64> {
        (self.total_budget > 0.0).then(|| self.total_spent / self.total_budget * 100.0)
    }

    /// Spending percentage rounded to a whole number, 0 while no budget is set.
    #[must_use]
    pub fn rounded_spent_percent(&self) -> u32 {
        // Cast safety: clamped to be non-negative before rounding.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = self.spent_percent().map_or(0, |p| p.max(0.0).round() as u32);
        percent
    }

    /// Fill level for a progress bar, 0-100.
    #[must_use]
    pub fn progress_fill(&self) -> f64 {
        self.spent_percent().map_or(0.0, |p| p.min(100.0))
    }
}

/// Sum of allocations across categories.
#[must_use]
pub fn total_allocated(categories: &[BudgetCategory]) -> f64 {
    categories.iter().map(|c| c.allocated).sum()
}

/// Sum of spending across categories.
#[must_use]
pub fn total_spent(categories: &[BudgetCategory]) -> f64 {
    categories.iter().map(|c| c.spent).sum()
}

/// Spending as a percentage of the category's allocation; 0 when nothing is allocated.
#[must_use]
pub fn category_spent_percent(category: &BudgetCategory) -> f64 {
    if category.allocated > 0.0 {
        category.spent / category.allocated * 100.0
    } else {
        0.0
    }
}

/// A category is over budget when it has an allocation and spending exceeds it.
#[must_use]
pub fn is_over_budget(category: &BudgetCategory) -> bool {
    category.allocated > 0.0 && category.spent > category.allocated
}

/// Categories currently over budget, in list order.
#[must_use]
pub fn over_budget_categories(categories: &[BudgetCategory]) -> Vec<&BudgetCategory> {
    categories.iter().filter(|c| is_over_budget(c)).collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::models::CategoryIcon;

    fn category(id: &str, allocated: f64, spent: f64) -> BudgetCategory {
        BudgetCategory {
            id: id.to_string(),
            name: format!("Category {id}"),
            allocated,
            spent,
            icon: CategoryIcon::Default,
        }
    }

    #[test]
    fn test_totals_and_over_budget_flags() {
        let categories = vec![category("1", 1000.0, 1200.0), category("2", 500.0, 500.0)];

        assert_eq!(total_spent(&categories), 1700.0);
        assert_eq!(total_allocated(&categories), 1500.0);
        assert!(is_over_budget(&categories[0]));
        assert!(!is_over_budget(&categories[1]));
        assert_eq!(over_budget_categories(&categories).len(), 1);
    }

    #[test]
    fn test_unallocated_category_is_never_over_budget() {
        let c = category("1", 0.0, 250.0);
        assert!(!is_over_budget(&c));
        assert_eq!(category_spent_percent(&c), 0.0);
    }

    #[test]
    fn test_summary_remaining_and_unallocated() {
        let settings = WeddingSettings {
            total_budget: 2000.0,
            ..WeddingSettings::default()
        };
        let categories = vec![category("1", 1000.0, 1200.0), category("2", 500.0, 500.0)];

        let summary = BudgetSummary::new(&settings, &categories);

        assert_eq!(summary.remaining(), 300.0);
        assert_eq!(summary.unallocated(), 500.0);
        assert_eq!(summary.spent_percent(), Some(85.0));
        assert_eq!(summary.progress_fill(), 85.0);
    }

    #[test]
    fn test_summary_without_budget() {
        let summary = BudgetSummary::new(&WeddingSettings::default(), &[category("1", 0.0, 50.0)]);

        assert_eq!(summary.spent_percent(), None);
        assert_eq!(summary.progress_fill(), 0.0);
        assert_eq!(summary.remaining(), -50.0);
    }

    #[test]
    fn test_progress_fill_is_capped() {
        let settings = WeddingSettings {
            total_budget: 1000.0,
            ..WeddingSettings::default()
        };
        let summary = BudgetSummary::new(&settings, &[category("1", 1000.0, 1500.0)]);

        assert_eq!(summary.spent_percent(), Some(150.0));
        assert_eq!(summary.rounded_spent_percent(), 150);
        assert_eq!(summary.progress_fill(), 100.0);
    }
}

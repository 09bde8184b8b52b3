//! Form input normalization.
//!
//! Screens collect raw strings. These helpers turn them into drafts and patches:
//! text is trimmed, amounts are coerced to a non-negative number, and forms missing
//! their one required field produce nothing instead of an error.
//!
//! Editing through a form only overwrites the fields the form shows. Flags the form
//! doesn't expose (a task's `completed`, a gift's `thank_you_sent` and date) are left
//! alone, and so is a budget category's icon.

use crate::models::{
    BudgetCategoryPatch, CategoryIcon, GiftPatch, GuestPatch, NewBudgetCategory, NewGift,
    NewGuest, NewTask, Priority, RsvpStatus, SettingsPatch, Side, TaskPatch,
};
use chrono::NaiveDate;

/// Name given to a budget category saved with a blank name.
pub const UNTITLED_CATEGORY: &str = "Untitled";

/// Coerces user input to an amount.
///
/// Reads the leading decimal number the way a lenient float parser does ("12.5k" is
/// 12.5). Empty, non-numeric, negative and non-finite input all become 0.
#[must_use]
pub fn parse_amount(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let digits_in = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_in(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_in(end + 1);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_in(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(0.0)
}

/// Initial setup: both partner names, optional date and budget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupForm {
    /// First partner's name
    pub partner1_name: String,
    /// Second partner's name
    pub partner2_name: String,
    /// Wedding date text
    pub wedding_date: String,
    /// Total budget text
    pub total_budget: String,
}

impl SetupForm {
    /// Settings patch, or `None` unless both names are filled in.
    #[must_use]
    pub fn to_patch(&self) -> Option<SettingsPatch> {
        let partner1 = self.partner1_name.trim();
        let partner2 = self.partner2_name.trim();
        if partner1.is_empty() || partner2.is_empty() {
            return None;
        }
        Some(SettingsPatch {
            partner1_name: Some(partner1.to_string()),
            partner2_name: Some(partner2.to_string()),
            wedding_date: Some(self.wedding_date.trim().to_string()),
            total_budget: Some(parse_amount(&self.total_budget)),
            venue_name: None,
        })
    }
}

/// Patch that sets only the total budget.
#[must_use]
pub fn total_budget_patch(input: &str) -> SettingsPatch {
    SettingsPatch {
        total_budget: Some(parse_amount(input)),
        ..SettingsPatch::default()
    }
}

/// Budget category editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    /// Category name
    pub name: String,
    /// Allocated amount text
    pub allocated: String,
    /// Spent amount text
    pub spent: String,
}

impl CategoryForm {
    fn name(&self) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            UNTITLED_CATEGORY.to_string()
        } else {
            name.to_string()
        }
    }

    /// New category with the `default` icon. Never rejected.
    #[must_use]
    pub fn to_draft(&self) -> NewBudgetCategory {
        NewBudgetCategory {
            name: self.name(),
            allocated: parse_amount(&self.allocated),
            spent: parse_amount(&self.spent),
            icon: CategoryIcon::Default,
        }
    }

    /// Patch for an existing category; keeps its icon.
    #[must_use]
    pub fn to_patch(&self) -> BudgetCategoryPatch {
        BudgetCategoryPatch {
            name: Some(self.name()),
            allocated: Some(parse_amount(&self.allocated)),
            spent: Some(parse_amount(&self.spent)),
            icon: None,
        }
    }
}

/// Guest editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestForm {
    /// Full name (required)
    pub name: String,
    /// Email
    pub email: String,
    /// Phone
    pub phone: String,
    /// RSVP answer
    pub rsvp_status: RsvpStatus,
    /// Inviting side
    pub side: Side,
    /// Plus-one flag
    pub plus_one: bool,
    /// Table assignment
    pub table_number: String,
    /// Dietary notes
    pub dietary_notes: String,
}

impl GuestForm {
    /// New guest, or `None` when the name is blank.
    #[must_use]
    pub fn to_draft(&self) -> Option<NewGuest> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(NewGuest {
            name: name.to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            rsvp_status: self.rsvp_status,
            side: self.side,
            plus_one: self.plus_one,
            table_number: self.table_number.trim().to_string(),
            dietary_notes: self.dietary_notes.trim().to_string(),
        })
    }

    /// Patch for an existing guest, or `None` when the name is blank.
    #[must_use]
    pub fn to_patch(&self) -> Option<GuestPatch> {
        self.to_draft().map(|g| GuestPatch {
            name: Some(g.name),
            email: Some(g.email),
            phone: Some(g.phone),
            rsvp_status: Some(g.rsvp_status),
            side: Some(g.side),
            plus_one: Some(g.plus_one),
            table_number: Some(g.table_number),
            dietary_notes: Some(g.dietary_notes),
        })
    }
}

/// Task editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    /// Title (required)
    pub title: String,
    /// Category, usually one of the suggested categories
    pub category: String,
    /// Urgency
    pub priority: Priority,
}

impl TaskForm {
    /// New open task without a due date, or `None` when the title is blank.
    #[must_use]
    pub fn to_draft(&self) -> Option<NewTask> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        Some(NewTask {
            title: title.to_string(),
            category: self.category.clone(),
            completed: false,
            due_date: String::new(),
            priority: self.priority,
        })
    }

    /// Patch for an existing task, or `None` when the title is blank.
    #[must_use]
    pub fn to_patch(&self) -> Option<TaskPatch> {
        self.to_draft().map(|t| TaskPatch {
            title: Some(t.title),
            category: Some(t.category),
            priority: Some(t.priority),
            ..TaskPatch::default()
        })
    }
}

/// Gift editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GiftForm {
    /// Who gave it
    pub guest_name: String,
    /// What it is (required)
    pub description: String,
    /// Estimated value text
    pub estimated_value: String,
}

impl GiftForm {
    /// New gift received `today`, or `None` when the description is blank.
    #[must_use]
    pub fn to_draft(&self, today: NaiveDate) -> Option<NewGift> {
        let description = self.description.trim();
        if description.is_empty() {
            return None;
        }
        Some(NewGift {
            guest_name: self.guest_name.trim().to_string(),
            description: description.to_string(),
            estimated_value: self.estimated_value.trim().to_string(),
            thank_you_sent: false,
            date_received: today.format("%Y-%m-%d").to_string(),
        })
    }

    /// Patch for an existing gift, or `None` when the description is blank.
    #[must_use]
    pub fn to_patch(&self) -> Option<GiftPatch> {
        let description = self.description.trim();
        if description.is_empty() {
            return None;
        }
        Some(GiftPatch {
            guest_name: Some(self.guest_name.trim().to_string()),
            description: Some(description.to_string()),
            estimated_value: Some(self.estimated_value.trim().to_string()),
            ..GiftPatch::default()
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1500"), 1500.0);
        assert_eq!(parse_amount("  12.5k"), 12.5);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("3."), 3.0);
        assert_eq!(parse_amount("2e3"), 2000.0);
        assert_eq!(parse_amount("2e"), 2.0);
        assert_eq!(parse_amount("+7"), 7.0);
    }

    #[test]
    fn test_parse_amount_coerces_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("-40"), 0.0);
        assert_eq!(parse_amount("1e999"), 0.0);
        assert_eq!(parse_amount("$100"), 0.0);
    }

    #[test]
    fn test_setup_requires_both_names() {
        let mut form = SetupForm {
            partner1_name: " Alex ".to_string(),
            partner2_name: "  ".to_string(),
            wedding_date: "2027-05-01".to_string(),
            total_budget: "20000".to_string(),
        };
        assert!(form.to_patch().is_none());

        form.partner2_name = "Sam".to_string();
        let patch = form.to_patch().unwrap();
        assert_eq!(patch.partner1_name.as_deref(), Some("Alex"));
        assert_eq!(patch.total_budget, Some(20_000.0));
        assert_eq!(patch.venue_name, None);
    }

    #[test]
    fn test_category_form_defaults() {
        let form = CategoryForm {
            name: "   ".to_string(),
            allocated: "oops".to_string(),
            spent: "120".to_string(),
        };

        let draft = form.to_draft();
        assert_eq!(draft.name, UNTITLED_CATEGORY);
        assert_eq!(draft.allocated, 0.0);
        assert_eq!(draft.spent, 120.0);
        assert_eq!(draft.icon, CategoryIcon::Default);
        assert_eq!(form.to_patch().icon, None);
    }

    #[test]
    fn test_guest_form_trims_and_requires_name() {
        let form = GuestForm {
            name: "  Jo  ".to_string(),
            email: " jo@example.com ".to_string(),
            ..GuestForm::default()
        };
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.name, "Jo");
        assert_eq!(draft.email, "jo@example.com");
        assert_eq!(draft.rsvp_status, RsvpStatus::Pending);
        assert_eq!(draft.side, Side::Mutual);

        assert!(GuestForm::default().to_draft().is_none());
        assert!(GuestForm::default().to_patch().is_none());
    }

    #[test]
    fn test_task_patch_leaves_completion_alone() {
        let form = TaskForm {
            title: "Book band".to_string(),
            category: "Vendors".to_string(),
            priority: Priority::High,
        };

        let patch = form.to_patch().unwrap();
        assert_eq!(patch.completed, None);
        assert_eq!(patch.due_date, None);
        assert_eq!(patch.priority, Some(Priority::High));

        let draft = form.to_draft().unwrap();
        assert!(!draft.completed);
        assert!(draft.due_date.is_empty());
    }

    #[test]
    fn test_gift_form_stamps_date() {
        let form = GiftForm {
            guest_name: " Aunt May ".to_string(),
            description: "Vase".to_string(),
            estimated_value: " 80 ".to_string(),
        };
        let today = NaiveDate::from_ymd_opt(2027, 5, 2).unwrap();

        let draft = form.to_draft(today).unwrap();
        assert_eq!(draft.date_received, "2027-05-02");
        assert_eq!(draft.guest_name, "Aunt May");
        assert_eq!(draft.estimated_value, "80");
        assert!(!draft.thank_you_sent);

        let patch = form.to_patch().unwrap();
        assert_eq!(patch.thank_you_sent, None);
        assert_eq!(patch.date_received, None);

        let blank = GiftForm::default();
        assert!(blank.to_draft(today).is_none());
    }
}

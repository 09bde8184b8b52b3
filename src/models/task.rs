//! Planning tasks on the wedding timeline.

use super::collection::Record;
use serde::{Deserialize, Serialize};

/// Categories the task form offers. Task categories are free text; these are suggestions.
pub const SUGGESTED_TASK_CATEGORIES: [&str; 9] = [
    "Planning",
    "Venue",
    "Vendors",
    "Guests",
    "Food",
    "Attire",
    "Decoration",
    "Travel",
    "Other",
];

/// Task urgency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Do first
    High,
    /// Normal
    #[default]
    Medium,
    /// Can wait
    Low,
}

/// A to-do item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// What needs doing
    pub title: String,
    /// Free-text category
    pub category: String,
    /// Done flag
    pub completed: bool,
    /// Due date as an ISO string, empty when unset
    pub due_date: String,
    /// Urgency
    pub priority: Priority,
}

/// Fields for a new task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTask {
    /// What needs doing
    pub title: String,
    /// Free-text category
    pub category: String,
    /// Done flag
    pub completed: bool,
    /// Due date
    pub due_date: String,
    /// Urgency
    pub priority: Priority,
}

/// Partial update for a task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    /// New title
    pub title: Option<String>,
    /// New category
    pub category: Option<String>,
    /// New done flag
    pub completed: Option<bool>,
    /// New due date
    pub due_date: Option<String>,
    /// New urgency
    pub priority: Option<Priority>,
}

impl Record for Task {
    type Draft = NewTask;
    type Patch = TaskPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewTask) -> Self {
        Self {
            id,
            title: draft.title,
            category: draft.category,
            completed: draft.completed,
            due_date: draft.due_date,
            priority: draft.priority,
        }
    }

    fn apply(&mut self, patch: TaskPatch) {
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.completed {
            self.completed = v;
        }
        if let Some(v) = patch.due_date {
            self.due_date = v;
        }
        if let Some(v) = patch.priority {
            self.priority = v;
        }
    }
}

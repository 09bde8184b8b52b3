//! Record types held by the store and their persisted JSON shapes.
//!
//! Field names serialize in camelCase and every struct decodes with defaults for
//! missing fields, so values written by older builds keep loading.

pub mod budget;
pub mod collection;
pub mod gift;
pub mod guest;
pub mod settings;
pub mod task;

pub use budget::{BudgetCategory, BudgetCategoryPatch, CategoryIcon, NewBudgetCategory};
pub use collection::{Collection, Record};
pub use gift::{Gift, GiftPatch, NewGift};
pub use guest::{Guest, GuestPatch, NewGuest, RsvpStatus, Side};
pub use settings::{SettingsPatch, WeddingSettings};
pub use task::{NewTask, Priority, SUGGESTED_TASK_CATEGORIES, Task, TaskPatch};

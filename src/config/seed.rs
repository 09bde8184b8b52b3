//! Seed data for first run.
//!
//! A fresh install starts with a standard set of budget categories and planning tasks.
//! They can be overridden from `everafter.toml`; when the file is absent (or omits a
//! table) the built-in lists are used.

use crate::errors::{Error, Result};
use crate::models::{BudgetCategory, CategoryIcon, Priority, Task};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default location of the seed configuration
pub const DEFAULT_CONFIG_PATH: &str = "everafter.toml";

/// Structure of `everafter.toml`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedConfig {
    /// Budget categories created on first run
    #[serde(default = "default_budget_categories")]
    pub budget_categories: Vec<SeedCategory>,
    /// Tasks created on first run
    #[serde(default = "default_tasks")]
    pub tasks: Vec<SeedTask>,
}

/// A budget category to seed
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedCategory {
    /// Category name
    pub name: String,
    /// Icon tag (e.g., `"camera"`)
    #[serde(default)]
    pub icon: CategoryIcon,
    /// Initial allocation
    #[serde(default)]
    pub allocated: f64,
}

/// A planning task to seed
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedTask {
    /// Task title
    pub title: String,
    /// Free-text category
    pub category: String,
    /// Urgency, `medium` when omitted
    #[serde(default)]
    pub priority: Priority,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            budget_categories: default_budget_categories(),
            tasks: default_tasks(),
        }
    }
}

impl SeedConfig {
    /// Budget records with ids `"1"`, `"2"`, ... in list order.
    #[must_use]
    pub fn budget_records(&self) -> Vec<BudgetCategory> {
        self.budget_categories
            .iter()
            .enumerate()
            .map(|(i, c)| BudgetCategory {
                id: (i + 1).to_string(),
                name: c.name.clone(),
                allocated: c.allocated,
                spent: 0.0,
                icon: c.icon,
            })
            .collect()
    }

    /// Task records with ids `"1"`, `"2"`, ... in list order.
    #[must_use]
    pub fn task_records(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, t)| Task {
                id: (i + 1).to_string(),
                title: t.title.clone(),
                category: t.category.clone(),
                completed: false,
                due_date: String::new(),
                priority: t.priority,
            })
            .collect()
    }
}

fn category(name: &str, icon: CategoryIcon) -> SeedCategory {
    SeedCategory {
        name: name.to_string(),
        icon,
        allocated: 0.0,
    }
}

fn task(title: &str, category: &str, priority: Priority) -> SeedTask {
    SeedTask {
        title: title.to_string(),
        category: category.to_string(),
        priority,
    }
}

fn default_budget_categories() -> Vec<SeedCategory> {
    vec![
        category("Venue", CategoryIcon::Home),
        category("Catering", CategoryIcon::Restaurant),
        category("Photography", CategoryIcon::Camera),
        category("Decoration", CategoryIcon::Flower),
        category("Attire", CategoryIcon::Shirt),
        category("Music & Entertainment", CategoryIcon::MusicalNotes),
        category("Invitations", CategoryIcon::Mail),
        category("Transportation", CategoryIcon::Car),
    ]
}

fn default_tasks() -> Vec<SeedTask> {
    vec![
        task("Set wedding date", "Planning", Priority::High),
        task("Create guest list", "Guests", Priority::High),
        task("Book venue", "Venue", Priority::High),
        task("Hire photographer", "Vendors", Priority::Medium),
        task("Choose wedding dress/suit", "Attire", Priority::Medium),
        task("Book catering", "Food", Priority::Medium),
        task("Send invitations", "Guests", Priority::Medium),
        task("Plan honeymoon", "Travel", Priority::Low),
        task("Order wedding cake", "Food", Priority::Low),
        task("Arrange flowers", "Decoration", Priority::Low),
    ]
}

/// Loads seed configuration from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - An entry is missing a required field
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load seed configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {path_ref:?}: {e}"),
    })
}

/// Loads seed configuration from `./everafter.toml`, falling back to the built-in
/// defaults when the file does not exist.
pub fn load_default_config() -> Result<SeedConfig> {
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        load_config(DEFAULT_CONFIG_PATH)
    } else {
        info!(
            "No {} found, using built-in seed data",
            DEFAULT_CONFIG_PATH
        );
        Ok(SeedConfig::default())
    }
}

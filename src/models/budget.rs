//! Budget categories - where the couple plans and tracks spending.
//!
//! Each category has an allocation and an amount spent. Nothing stops `spent` from
//! exceeding `allocated`; that case is reported as over budget by the derived views.

use super::collection::Record;
use serde::{Deserialize, Serialize};

/// Icon tag shown next to a budget category.
///
/// Stored as a lowercase tag. Tags this build does not know decode as
/// [`CategoryIcon::Default`] rather than failing the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryIcon {
    /// `home`
    Home,
    /// `restaurant`
    Restaurant,
    /// `camera`
    Camera,
    /// `flower`
    Flower,
    /// `shirt`
    Shirt,
    /// `musical-notes`
    MusicalNotes,
    /// `mail`
    Mail,
    /// `car`
    Car,
    /// `default`
    #[default]
    Default,
}

impl CategoryIcon {
    /// Storage tag for this icon.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Restaurant => "restaurant",
            Self::Camera => "camera",
            Self::Flower => "flower",
            Self::Shirt => "shirt",
            Self::MusicalNotes => "musical-notes",
            Self::Mail => "mail",
            Self::Car => "car",
            Self::Default => "default",
        }
    }

    /// Parses a storage tag, falling back to `Default` for unknown tags.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "home" => Self::Home,
            "restaurant" => Self::Restaurant,
            "camera" => Self::Camera,
            "flower" => Self::Flower,
            "shirt" => Self::Shirt,
            "musical-notes" => Self::MusicalNotes,
            "mail" => Self::Mail,
            "car" => Self::Car,
            _ => Self::Default,
        }
    }
}

impl From<String> for CategoryIcon {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<CategoryIcon> for String {
    fn from(icon: CategoryIcon) -> Self {
        icon.as_str().to_string()
    }
}

/// A single line of the wedding budget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BudgetCategory {
    /// Unique identifier
    pub id: String,
    /// Display name (e.g., "Catering")
    pub name: String,
    /// Amount planned for this category
    pub allocated: f64,
    /// Amount spent so far
    pub spent: f64,
    /// Icon tag
    pub icon: CategoryIcon,
}

/// Fields for a new budget category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBudgetCategory {
    /// Display name
    pub name: String,
    /// Planned amount
    pub allocated: f64,
    /// Spent amount
    pub spent: f64,
    /// Icon tag
    pub icon: CategoryIcon,
}

/// Partial update for a budget category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetCategoryPatch {
    /// New name
    pub name: Option<String>,
    /// New planned amount
    pub allocated: Option<f64>,
    /// New spent amount
    pub spent: Option<f64>,
    /// New icon
    pub icon: Option<CategoryIcon>,
}

impl Record for BudgetCategory {
    type Draft = NewBudgetCategory;
    type Patch = BudgetCategoryPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewBudgetCategory) -> Self {
        Self {
            id,
            name: draft.name,
            allocated: draft.allocated,
            spent: draft.spent,
            icon: draft.icon,
        }
    }

    fn apply(&mut self, patch: BudgetCategoryPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.allocated {
            self.allocated = v;
        }
        if let Some(v) = patch.spent {
            self.spent = v;
        }
        if let Some(v) = patch.icon {
            self.icon = v;
        }
    }
}

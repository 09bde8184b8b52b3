//! Wedding settings - the singleton holding the couple's names, date and budget.

use serde::{Deserialize, Serialize};

/// Couple-wide settings. Not identified by an id; one instance per session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeddingSettings {
    /// First partner's display name
    pub partner1_name: String,
    /// Second partner's display name
    pub partner2_name: String,
    /// Wedding date as an ISO string, empty when not chosen yet
    pub wedding_date: String,
    /// Overall budget, never negative
    pub total_budget: f64,
    /// Venue name, free text
    pub venue_name: String,
}

impl WeddingSettings {
    /// Setup is complete once both partner names are filled in.
    #[must_use]
    pub fn is_setup(&self) -> bool {
        !self.partner1_name.is_empty() && !self.partner2_name.is_empty()
    }

    /// Shallow-merges a patch onto the settings.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(v) = patch.partner1_name {
            self.partner1_name = v;
        }
        if let Some(v) = patch.partner2_name {
            self.partner2_name = v;
        }
        if let Some(v) = patch.wedding_date {
            self.wedding_date = v;
        }
        if let Some(v) = patch.total_budget {
            self.total_budget = v;
        }
        if let Some(v) = patch.venue_name {
            self.venue_name = v;
        }
    }
}

/// Partial settings update; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    /// New first partner name
    pub partner1_name: Option<String>,
    /// New second partner name
    pub partner2_name: Option<String>,
    /// New wedding date
    pub wedding_date: Option<String>,
    /// New total budget
    pub total_budget: Option<f64>,
    /// New venue name
    pub venue_name: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_is_setup_requires_both_names() {
        let mut settings = WeddingSettings::default();
        assert!(!settings.is_setup());

        settings.partner1_name = "Alex".to_string();
        assert!(!settings.is_setup());

        settings.partner2_name = "Sam".to_string();
        assert!(settings.is_setup());

        settings.apply(SettingsPatch {
            partner2_name: Some(String::new()),
            ..SettingsPatch::default()
        });
        assert!(!settings.is_setup());
    }

    #[test]
    fn test_apply_only_touches_given_fields() {
        let mut settings = WeddingSettings {
            partner1_name: "Alex".to_string(),
            venue_name: "Old Mill".to_string(),
            ..WeddingSettings::default()
        };

        settings.apply(SettingsPatch {
            total_budget: Some(25_000.0),
            ..SettingsPatch::default()
        });

        assert_eq!(settings.total_budget, 25_000.0);
        assert_eq!(settings.partner1_name, "Alex");
        assert_eq!(settings.venue_name, "Old Mill");
    }

    #[test]
    fn test_decodes_stored_shape_with_missing_fields() {
        let json = r#"{"partner1Name":"Alex","partner2Name":"Sam","totalBudget":12000}"#;
        let settings: WeddingSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.partner1_name, "Alex");
        assert_eq!(settings.total_budget, 12_000.0);
        assert_eq!(settings.venue_name, "");
        assert_eq!(settings.wedding_date, "");
    }
}

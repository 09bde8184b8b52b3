//! Gifts received and thank-you tracking.

use super::collection::Record;
use serde::{Deserialize, Serialize};

/// A received gift. `guest_name` is free text, not a link to a guest record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Gift {
    /// Unique identifier
    pub id: String,
    /// Who gave it
    pub guest_name: String,
    /// What it is
    pub description: String,
    /// Estimated value as entered (free-text number)
    pub estimated_value: String,
    /// Whether a thank-you note went out
    pub thank_you_sent: bool,
    /// ISO date the gift was recorded
    pub date_received: String,
}

/// Fields for a new gift.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewGift {
    /// Who gave it
    pub guest_name: String,
    /// What it is
    pub description: String,
    /// Estimated value
    pub estimated_value: String,
    /// Thank-you flag
    pub thank_you_sent: bool,
    /// ISO date received
    pub date_received: String,
}

/// Partial update for a gift.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GiftPatch {
    /// New giver
    pub guest_name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New estimated value
    pub estimated_value: Option<String>,
    /// New thank-you flag
    pub thank_you_sent: Option<bool>,
    /// New date received
    pub date_received: Option<String>,
}

impl Record for Gift {
    type Draft = NewGift;
    type Patch = GiftPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewGift) -> Self {
        Self {
            id,
            guest_name: draft.guest_name,
            description: draft.description,
            estimated_value: draft.estimated_value,
            thank_you_sent: draft.thank_you_sent,
            date_received: draft.date_received,
        }
    }

    fn apply(&mut self, patch: GiftPatch) {
        if let Some(v) = patch.guest_name {
            self.guest_name = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.estimated_value {
            self.estimated_value = v;
        }
        if let Some(v) = patch.thank_you_sent {
            self.thank_you_sent = v;
        }
        if let Some(v) = patch.date_received {
            self.date_received = v;
        }
    }
}

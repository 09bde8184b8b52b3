//! Guests and their RSVP state.

use super::collection::Record;
use serde::{Deserialize, Serialize};

/// RSVP answer for a guest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    /// No answer yet
    #[default]
    Pending,
    /// Attending
    Confirmed,
    /// Not attending
    Declined,
}

impl RsvpStatus {
    /// All statuses, in the order forms list them.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Confirmed, Self::Declined];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Declined => "Declined",
        }
    }
}

/// Which side of the couple invited the guest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// First partner's side
    Partner1,
    /// Second partner's side
    Partner2,
    /// Shared guest
    #[default]
    Mutual,
}

/// A wedding guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Guest {
    /// Unique identifier
    pub id: String,
    /// Full name
    pub name: String,
    /// Email address, free text
    pub email: String,
    /// Phone number, free text
    pub phone: String,
    /// RSVP answer
    pub rsvp_status: RsvpStatus,
    /// Inviting side
    pub side: Side,
    /// Whether the guest brings a plus-one
    pub plus_one: bool,
    /// Table assignment, free text
    pub table_number: String,
    /// Dietary requirements
    pub dietary_notes: String,
}

/// Fields for a new guest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewGuest {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// RSVP answer
    pub rsvp_status: RsvpStatus,
    /// Inviting side
    pub side: Side,
    /// Plus-one flag
    pub plus_one: bool,
    /// Table assignment
    pub table_number: String,
    /// Dietary requirements
    pub dietary_notes: String,
}

/// Partial update for a guest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestPatch {
    /// New name
    pub name: Option<String>,
    /// New email
    pub email: Option<String>,
    /// New phone
    pub phone: Option<String>,
    /// New RSVP answer
    pub rsvp_status: Option<RsvpStatus>,
    /// New side
    pub side: Option<Side>,
    /// New plus-one flag
    pub plus_one: Option<bool>,
    /// New table assignment
    pub table_number: Option<String>,
    /// New dietary notes
    pub dietary_notes: Option<String>,
}

impl Record for Guest {
    type Draft = NewGuest;
    type Patch = GuestPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewGuest) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            rsvp_status: draft.rsvp_status,
            side: draft.side,
            plus_one: draft.plus_one,
            table_number: draft.table_number,
            dietary_notes: draft.dietary_notes,
        }
    }

    fn apply(&mut self, patch: GuestPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.rsvp_status {
            self.rsvp_status = v;
        }
        if let Some(v) = patch.side {
            self.side = v;
        }
        if let Some(v) = patch.plus_one {
            self.plus_one = v;
        }
        if let Some(v) = patch.table_number {
            self.table_number = v;
        }
        if let Some(v) = patch.dietary_notes {
            self.dietary_notes = v;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_wire_shape() {
        let guest = Guest::from_draft(
            "g1".to_string(),
            NewGuest {
                name: "Jo".to_string(),
                side: Side::Partner2,
                rsvp_status: RsvpStatus::Confirmed,
                plus_one: true,
                ..NewGuest::default()
            },
        );

        let json = serde_json::to_value(&guest).unwrap();
        assert_eq!(json["rsvpStatus"], "confirmed");
        assert_eq!(json["side"], "partner2");
        assert_eq!(json["plusOne"], true);
        assert_eq!(json["tableNumber"], "");
    }

    #[test]
    fn test_unknown_rsvp_status_is_rejected() {
        let json = r#"{"id":"g1","name":"Jo","rsvpStatus":"maybe"}"#;
        assert!(serde_json::from_str::<Guest>(json).is_err());
    }
}

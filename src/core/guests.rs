//! Guest list views: RSVP counts, side breakdown, search and initials.

use crate::models::{Guest, RsvpStatus, Side};

/// Guest counts partitioned by RSVP status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RsvpCounts {
    /// Guests without an answer
    pub pending: usize,
    /// Guests attending
    pub confirmed: usize,
    /// Guests not attending
    pub declined: usize,
}

impl RsvpCounts {
    /// Counts every guest once under its current status.
    #[must_use]
    pub fn tally(guests: &[Guest]) -> Self {
        guests.iter().fold(Self::default(), |mut counts, guest| {
            match guest.rsvp_status {
                RsvpStatus::Pending => counts.pending += 1,
                RsvpStatus::Confirmed => counts.confirmed += 1,
                RsvpStatus::Declined => counts.declined += 1,
            }
            counts
        })
    }

    /// Count for one status.
    #[must_use]
    pub const fn get(&self, status: RsvpStatus) -> usize {
        match status {
            RsvpStatus::Pending => self.pending,
            RsvpStatus::Confirmed => self.confirmed,
            RsvpStatus::Declined => self.declined,
        }
    }

    /// Total number of guests.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.pending + self.confirmed + self.declined
    }
}

/// Guests per side of the family, plus the number bringing a plus-one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideCounts {
    /// First partner's side
    pub partner1: usize,
    /// Second partner's side
    pub partner2: usize,
    /// Shared friends and family
    pub mutual: usize,
    /// Guests with a plus-one
    pub plus_ones: usize,
}

impl SideCounts {
    /// Counts `guests` by side.
    #[must_use]
    pub fn tally(guests: &[Guest]) -> Self {
        guests.iter().fold(Self::default(), |mut counts, guest| {
            match guest.side {
                Side::Partner1 => counts.partner1 += 1,
                Side::Partner2 => counts.partner2 += 1,
                Side::Mutual => counts.mutual += 1,
            }
            if guest.plus_one {
                counts.plus_ones += 1;
            }
            counts
        })
    }

    /// Expected headcount: every guest plus their plus-ones.
    #[must_use]
    pub const fn headcount(&self) -> usize {
        self.partner1 + self.partner2 + self.mutual + self.plus_ones
    }
}

/// RSVP filter used by the guest list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuestFilter {
    /// Every guest
    #[default]
    All,
    /// Only guests with this status
    Status(RsvpStatus),
}

impl GuestFilter {
    fn matches(self, guest: &Guest) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => guest.rsvp_status == status,
        }
    }
}

/// Guests whose name contains `query` (case-insensitive) and who pass `filter`.
#[must_use]
pub fn filter_guests<'a>(guests: &'a [Guest], query: &str, filter: GuestFilter) -> Vec<&'a Guest> {
    let needle = query.to_lowercase();
    guests
        .iter()
        .filter(|g| g.name.to_lowercase().contains(&needle) && filter.matches(g))
        .collect()
}

/// Up to two uppercase initials from a guest's name ("Jo Ann Smith" -> "JA").
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

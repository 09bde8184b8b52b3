//! Gift and thank-you tracking.

use crate::models::Gift;

/// Thank-you progress across all gifts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GiftSummary {
    /// Gifts recorded
    pub total: usize,
    /// Gifts whose thank-you note went out
    pub thank_yous_sent: usize,
}

impl GiftSummary {
    /// Counts gifts and sent thank-yous.
    #[must_use]
    pub fn new(gifts: &[Gift]) -> Self {
        Self {
            total: gifts.len(),
            thank_yous_sent: gifts.iter().filter(|g| g.thank_you_sent).count(),
        }
    }

    /// Thank-you notes still owed.
    #[must_use]
    pub const fn pending_thank_yous(&self) -> usize {
        self.total - self.thank_yous_sent
    }
}

/// Gifts still waiting for a thank-you note, in list order.
#[must_use]
pub fn awaiting_thank_you(gifts: &[Gift]) -> Vec<&Gift> {
    gifts.iter().filter(|g| !g.thank_you_sent).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_gift;

    #[test]
    fn test_summary() {
        let mut gifts = vec![
            sample_gift("1", "Vase"),
            sample_gift("2", "Toaster"),
            sample_gift("3", "Blender"),
        ];
        gifts[1].thank_you_sent = true;

        let summary = GiftSummary::new(&gifts);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.thank_yous_sent, 1);
        assert_eq!(summary.pending_thank_yous(), 2);

        let owed: Vec<&str> = awaiting_thank_you(&gifts)
            .iter()
            .map(|g| g.id.as_str())
            .collect();
        assert_eq!(owed, vec!["1", "3"]);
    }
}

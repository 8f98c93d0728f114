use crate::entities::{ObligationStatus, PaymentStatus};

/// Buckets one obligation. Total over every (reconciliation, offset) pair;
/// the manual reconciliation decision always wins over date math. The
/// offset thresholds follow the badge rules of the period view (7-day and
/// 15-day cuts).
pub(crate) fn classify(
    reconciliation: Option<PaymentStatus>,
    days_until_due: i64,
) -> ObligationStatus {
    match reconciliation {
        Some(PaymentStatus::Paid) => ObligationStatus::Paid,
        Some(PaymentStatus::Disregarded) => ObligationStatus::Disregarded,
        None => match days_until_due {
            d if d < 0 => ObligationStatus::Overdue,
            0 => ObligationStatus::DueToday,
            1..=7 => ObligationStatus::DueThisWeek,
            8..=15 => ObligationStatus::DueSoon,
            _ => ObligationStatus::Comfortable,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_buckets() {
        assert_eq!(classify(None, -30), ObligationStatus::Overdue);
        assert_eq!(classify(None, -1), ObligationStatus::Overdue);
        assert_eq!(classify(None, 0), ObligationStatus::DueToday);
        assert_eq!(classify(None, 1), ObligationStatus::DueThisWeek);
        assert_eq!(classify(None, 7), ObligationStatus::DueThisWeek);
        assert_eq!(classify(None, 8), ObligationStatus::DueSoon);
        assert_eq!(classify(None, 15), ObligationStatus::DueSoon);
        assert_eq!(classify(None, 16), ObligationStatus::Comfortable);
        assert_eq!(classify(None, 365), ObligationStatus::Comfortable);
    }

    #[test]
    fn reconciliation_wins_over_any_offset() {
        for offset in [-100, -1, 0, 3, 10, 100] {
            assert_eq!(
                classify(Some(PaymentStatus::Paid), offset),
                ObligationStatus::Paid
            );
            assert_eq!(
                classify(Some(PaymentStatus::Disregarded), offset),
                ObligationStatus::Disregarded
            );
        }
    }
}

use chrono::NaiveDate;

use super::{collaborator::Collaborator, period::Period};

/// Discrete urgency bucket for one computed obligation. The two
/// reconciliation outcomes always win over the date-derived buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObligationStatus {
    Paid,
    Disregarded,
    Overdue,
    DueToday,
    DueThisWeek,
    DueSoon,
    Comfortable,
}

/// One row of a period report.
#[derive(Debug, Clone)]
pub struct ObligationRow {
    pub collaborator: Collaborator,
    pub due_date: NaiveDate,
    /// Signed whole days from today to the due date (negative = overdue).
    pub days_until_due: i64,
    pub status: ObligationStatus,
    pub paid_amount: Option<f64>,
}

/// Result of a period query. Rows are sorted ascending by due date, ties
/// broken by collaborator name. The skip counters make data-quality
/// tolerance observable to the caller.
#[derive(Debug, Clone)]
pub struct PeriodObligations {
    pub period: Period,
    pub rows: Vec<ObligationRow>,
    pub skipped_missing_hire_date: usize,
    pub skipped_malformed_hire_date: usize,
    pub skipped_unknown_ledger_status: usize,
}

impl PeriodObligations {
    /// Rows needing attention within a week (overdue, today, or 1-7 days
    /// out), the "urgente" counter of the period view.
    pub fn urgent_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| {
                matches!(
                    r.status,
                    ObligationStatus::Overdue
                        | ObligationStatus::DueToday
                        | ObligationStatus::DueThisWeek
                )
            })
            .count()
    }

    /// Rows due in 8-15 days, the "próximo" counter of the period view.
    pub fn upcoming_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.status == ObligationStatus::DueSoon)
            .count()
    }
}

use chrono::{DateTime, Utc};

use super::{collaborator::CollaboratorId, period::Period};

/// Payment status stored in the ledger. Absence of a row means the period
/// is still pending, so there is no `Pending` variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Disregarded,
}

/// A human decision for one (collaborator, period). An amount only exists
/// for `Paid`; a disregarded period never stores one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaymentDecision {
    Paid { amount: f64 },
    Disregarded,
}

/// One reconciled ledger row. At most one exists per
/// (collaborator, reference month, reference year), enforced by the store's
/// conflict clause on the composite key.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub collaborator_id: CollaboratorId,
    pub period: Period,
    pub status: PaymentStatus,
    pub amount: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

use std::collections::HashMap;

use async_trait::async_trait;

use crate::{
    entities::{Collaborator, CollaboratorId, LedgerEntry, PaymentDecision, Period},
    errors::SchedulerError,
};

/// Everything one period query needs, fetched in a fixed number of batch
/// reads and joined in memory (never per-row queries).
#[derive(Debug)]
pub struct PeriodSnapshot {
    pub collaborators: Vec<Collaborator>,
    /// Period ledger keyed by collaborator; at most one entry per key.
    pub ledger: HashMap<CollaboratorId, LedgerEntry>,
    /// Ledger rows dropped because their status text was unrecognized.
    pub unknown_ledger_rows: usize,
}

#[async_trait]
pub trait ObligationsRepository: Send + Sync {
    async fn period_snapshot(&self, period: Period) -> Result<PeriodSnapshot, SchedulerError>;

    /// Records one payment decision through the ledger's single-row upsert.
    async fn record_decision(
        &self,
        collaborator_id: &CollaboratorId,
        period: Period,
        decision: PaymentDecision,
    ) -> Result<(), SchedulerError>;
}

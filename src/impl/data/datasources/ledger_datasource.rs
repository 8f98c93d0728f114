use async_trait::async_trait;

use crate::{data::models::ledger_row_model::LedgerRowModel, entities::Period, errors::StoreError};

/// Read/write surface over the annuity payment ledger.
#[async_trait]
pub trait LedgerDatasource: Send + Sync {
    /// All ledger rows for one reference period, in a single batch select.
    async fn fetch_for_period(&self, period: Period) -> Result<Vec<LedgerRowModel>, StoreError>;

    /// Writes the single row for the composite key
    /// (collaborator_id, reference_month, reference_year). Implementations
    /// must route this through the store's conflict clause on that key
    /// (`ON CONFLICT ... DO UPDATE`): one row per key, last write wins,
    /// never a separate existence check.
    async fn upsert(&self, row: LedgerRowModel) -> Result<(), StoreError>;
}

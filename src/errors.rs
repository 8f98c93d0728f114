use thiserror::Error;

/// Opaque failure produced by the hosted-store client behind a datasource
/// (connectivity, constraint violation, malformed response, ...).
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum SchedulerError {
    /// A batch read failed. The whole period query is aborted rather than
    /// returning a partial result set.
    #[error("failed reading {operation} from the store")]
    StoreRead {
        operation: &'static str,
        #[source]
        source: StoreError,
    },

    /// The single-row ledger upsert failed. The decision was not recorded,
    /// and no other state was touched.
    #[error("failed recording ledger decision for collaborator {collaborator_id}")]
    StoreWrite {
        collaborator_id: String,
        #[source]
        source: StoreError,
    },

    #[error("invalid reference month: {month} (expected 1-12)")]
    InvalidMonth { month: u32 },
}

use async_trait::async_trait;

use crate::{
    data::models::collaborator_model::{CollaboratorRowModel, OptionRowModel},
    errors::StoreError,
};

/// Read surface over the hosted store's collaborator tables. Implementations
/// wrap whatever client the host application uses; each method maps to one
/// unfiltered batch select (all filtering happens in memory).
#[async_trait]
pub trait CollaboratorsDatasource: Send + Sync {
    async fn fetch_collaborators(&self) -> Result<Vec<CollaboratorRowModel>, StoreError>;

    /// Option tables mapping ids to display names. Stores that already
    /// denormalize the names may return empty lists.
    async fn fetch_roles(&self) -> Result<Vec<OptionRowModel>, StoreError>;

    async fn fetch_teams(&self) -> Result<Vec<OptionRowModel>, StoreError>;
}

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    data::{
        datasources::{
            collaborators_datasource::CollaboratorsDatasource,
            ledger_datasource::LedgerDatasource,
        },
        models::ledger_row_model::LedgerRowModel,
    },
    domain::repositories::obligations_repository::{ObligationsRepository, PeriodSnapshot},
    entities::{CollaboratorId, PaymentDecision, Period},
    errors::SchedulerError,
};

pub struct ObligationsRepositoryImpl<C, L>
where
    C: CollaboratorsDatasource,
    L: LedgerDatasource,
{
    collaborators_datasource: C,
    ledger_datasource: L,
}

impl<C, L> ObligationsRepositoryImpl<C, L>
where
    C: CollaboratorsDatasource,
    L: LedgerDatasource,
{
    pub fn new(collaborators_datasource: C, ledger_datasource: L) -> Self {
        Self {
            collaborators_datasource,
            ledger_datasource,
        }
    }
}

#[async_trait]
impl<C, L> ObligationsRepository for ObligationsRepositoryImpl<C, L>
where
    C: CollaboratorsDatasource,
    L: LedgerDatasource,
{
    async fn period_snapshot(&self, period: Period) -> Result<PeriodSnapshot, SchedulerError> {
        let (collaborator_rows, role_rows, team_rows, ledger_rows) = futures::try_join!(
            async {
                self.collaborators_datasource
                    .fetch_collaborators()
                    .await
                    .map_err(|source| SchedulerError::StoreRead {
                        operation: "collaborators",
                        source,
                    })
            },
            async {
                self.collaborators_datasource
                    .fetch_roles()
                    .await
                    .map_err(|source| SchedulerError::StoreRead {
                        operation: "roles",
                        source,
                    })
            },
            async {
                self.collaborators_datasource
                    .fetch_teams()
                    .await
                    .map_err(|source| SchedulerError::StoreRead {
                        operation: "teams",
                        source,
                    })
            },
            async {
                self.ledger_datasource
                    .fetch_for_period(period)
                    .await
                    .map_err(|source| SchedulerError::StoreRead {
                        operation: "ledger",
                        source,
                    })
            },
        )?;

        // Option-table lookup maps, built once per request.
        let roles: HashMap<String, String> =
            role_rows.into_iter().map(|r| (r.id, r.name)).collect();
        let teams: HashMap<String, String> =
            team_rows.into_iter().map(|t| (t.id, t.name)).collect();

        let collaborators = collaborator_rows
            .into_iter()
            .map(|row| row.into_collaborator(&roles, &teams))
            .collect();

        let mut ledger = HashMap::new();
        let mut unknown_ledger_rows = 0;
        for row in ledger_rows {
            match row.to_entry() {
                Some(entry) => {
                    ledger.insert(entry.collaborator_id.clone(), entry);
                }
                None => {
                    tracing::warn!(
                        collaborator_id = %row.collaborator_id,
                        status = %row.status,
                        %period,
                        "dropping ledger row with unrecognized status",
                    );
                    unknown_ledger_rows += 1;
                }
            }
        }

        Ok(PeriodSnapshot {
            collaborators,
            ledger,
            unknown_ledger_rows,
        })
    }

    async fn record_decision(
        &self,
        collaborator_id: &CollaboratorId,
        period: Period,
        decision: PaymentDecision,
    ) -> Result<(), SchedulerError> {
        let row = LedgerRowModel::from_decision(collaborator_id, period, decision, Utc::now());
        self.ledger_datasource
            .upsert(row)
            .await
            .map_err(|source| SchedulerError::StoreWrite {
                collaborator_id: collaborator_id.to_string(),
                source,
            })
    }
}

use crate::{
    data::{
        datasources::{
            collaborators_datasource::CollaboratorsDatasource,
            ledger_datasource::LedgerDatasource,
        },
        repositories::obligations_repository_impl::ObligationsRepositoryImpl,
    },
    domain::usecases::schedule_usecase::{ScheduleUsecase as _, ScheduleUsecaseImpl},
    entities::{CollaboratorId, PaymentDecision, Period, PeriodObligations},
    errors::SchedulerError,
};

/// Entry point for host applications: wire in datasources backed by the
/// hosted store, then query obligations per period and record payment
/// decisions.
pub struct OabSchedulerUtil<C, L>
where
    C: CollaboratorsDatasource,
    L: LedgerDatasource,
{
    schedule_usecase: ScheduleUsecaseImpl<ObligationsRepositoryImpl<C, L>>,
}

impl<C, L> OabSchedulerUtil<C, L>
where
    C: CollaboratorsDatasource,
    L: LedgerDatasource,
{
    pub fn new(collaborators_datasource: C, ledger_datasource: L) -> Self {
        Self {
            schedule_usecase: ScheduleUsecaseImpl::new(ObligationsRepositoryImpl::new(
                collaborators_datasource,
                ledger_datasource,
            )),
        }
    }

    /// All computed obligations falling due in (month, year), joined with
    /// the payment ledger and classified against today's local date.
    pub async fn obligations_for_period(
        &self,
        month: u32,
        year: i32,
    ) -> Result<PeriodObligations, SchedulerError> {
        let period = Period::new(month, year)?;
        self.schedule_usecase.obligations_for_period(period).await
    }

    /// Records a payment decision for one (collaborator, month, year) row.
    /// On failure the decision is simply not recorded; nothing else changes.
    pub async fn decide(
        &self,
        collaborator_id: &CollaboratorId,
        month: u32,
        year: i32,
        decision: PaymentDecision,
    ) -> Result<(), SchedulerError> {
        let period = Period::new(month, year)?;
        self.schedule_usecase
            .decide(collaborator_id, period, decision)
            .await
    }
}

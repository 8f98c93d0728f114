use async_trait::async_trait;
use chrono::{Local, NaiveDate};

use crate::{
    data::models::hire_date_model::HireDateModel,
    domain::{
        logic::{due_date, eligibility, urgency},
        repositories::obligations_repository::ObligationsRepository,
    },
    entities::{
        CollaboratorId, ObligationRow, PaymentDecision, Period, PeriodObligations,
    },
    errors::SchedulerError,
};

#[async_trait]
pub trait ScheduleUsecase: Send + Sync {
    /// All computed obligations falling due in the given period, joined
    /// with the payment ledger and classified against today's date.
    async fn obligations_for_period(
        &self,
        period: Period,
    ) -> Result<PeriodObligations, SchedulerError>;

    /// Records one payment decision for a (collaborator, period) row.
    async fn decide(
        &self,
        collaborator_id: &CollaboratorId,
        period: Period,
        decision: PaymentDecision,
    ) -> Result<(), SchedulerError>;
}

pub struct ScheduleUsecaseImpl<R: ObligationsRepository> {
    repository: R,
}

impl<R: ObligationsRepository> ScheduleUsecaseImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Same as [`ScheduleUsecase::obligations_for_period`], with "today"
    /// pinned by the caller. Classification depends on the wall clock, so
    /// deterministic callers (and tests) go through this.
    pub async fn obligations_for_period_at(
        &self,
        period: Period,
        today: NaiveDate,
    ) -> Result<PeriodObligations, SchedulerError> {
        let snapshot = self.repository.period_snapshot(period).await?;

        let mut report = PeriodObligations {
            period,
            rows: Vec::new(),
            skipped_missing_hire_date: 0,
            skipped_malformed_hire_date: 0,
            skipped_unknown_ledger_status: snapshot.unknown_ledger_rows,
        };

        for collaborator in snapshot.collaborators {
            let raw_hire_date = match collaborator.hire_date.as_deref().map(str::trim) {
                Some(raw) if !raw.is_empty() => raw,
                _ => {
                    report.skipped_missing_hire_date += 1;
                    continue;
                }
            };
            let hire_date = match HireDateModel::parse(raw_hire_date) {
                HireDateModel::Parsed(date) => date,
                HireDateModel::Unparseable => {
                    tracing::warn!(
                        collaborator_id = %collaborator.id,
                        raw = raw_hire_date,
                        "skipping collaborator with unparseable hire date",
                    );
                    report.skipped_malformed_hire_date += 1;
                    continue;
                }
            };
            if !eligibility::is_eligible(
                &collaborator.status,
                &collaborator.role,
                &collaborator.team,
            ) {
                continue;
            }
            let Some(due) = due_date::due_date(hire_date) else {
                tracing::warn!(
                    collaborator_id = %collaborator.id,
                    %hire_date,
                    "skipping collaborator whose due date overflows the calendar",
                );
                report.skipped_malformed_hire_date += 1;
                continue;
            };
            // Only obligations whose computed due date lands in the
            // requested period are reported.
            if !period.contains(due) {
                continue;
            }

            let reconciliation = snapshot.ledger.get(&collaborator.id);
            let days_until_due = due_date::days_until(due, today);
            let status = urgency::classify(reconciliation.map(|e| e.status), days_until_due);
            let paid_amount = reconciliation.and_then(|e| e.amount);

            report.rows.push(ObligationRow {
                collaborator,
                due_date: due,
                days_until_due,
                status,
                paid_amount,
            });
        }

        report.rows.sort_by(|a, b| {
            a.due_date
                .cmp(&b.due_date)
                .then_with(|| a.collaborator.name.cmp(&b.collaborator.name))
        });

        tracing::debug!(
            %period,
            rows = report.rows.len(),
            skipped_missing = report.skipped_missing_hire_date,
            skipped_malformed = report.skipped_malformed_hire_date,
            "period obligations computed",
        );
        Ok(report)
    }
}

#[async_trait]
impl<R: ObligationsRepository> ScheduleUsecase for ScheduleUsecaseImpl<R> {
    async fn obligations_for_period(
        &self,
        period: Period,
    ) -> Result<PeriodObligations, SchedulerError> {
        self.obligations_for_period_at(period, Local::now().date_naive())
            .await
    }

    async fn decide(
        &self,
        collaborator_id: &CollaboratorId,
        period: Period,
        decision: PaymentDecision,
    ) -> Result<(), SchedulerError> {
        self.repository
            .record_decision(collaborator_id, period, decision)
            .await
    }
}

use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

use crate::entities::{CollaboratorId, LedgerEntry, PaymentDecision, PaymentStatus, Period};

/// Canonical status strings written to the ledger table.
const STATUS_PAID: &str = "paid";
const STATUS_DISREGARDED: &str = "disregarded";

/// Raw ledger row as stored. `status` is free text at the store boundary;
/// only rows whose status maps to a known decision become domain entries.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LedgerRowModel {
    pub collaborator_id: String,
    pub reference_month: u32,
    pub reference_year: i32,
    pub status: String,
    #[serde(default)]
    pub amount: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

impl LedgerRowModel {
    /// Builds the row for a decision upsert. A disregarded period stores no
    /// amount, whatever the caller supplied upstream.
    pub(crate) fn from_decision(
        collaborator_id: &CollaboratorId,
        period: Period,
        decision: PaymentDecision,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let (status, amount) = match decision {
            PaymentDecision::Paid { amount } => (STATUS_PAID, Some(amount)),
            PaymentDecision::Disregarded => (STATUS_DISREGARDED, None),
        };
        Self {
            collaborator_id: collaborator_id.0.clone(),
            reference_month: period.month(),
            reference_year: period.year(),
            status: status.to_string(),
            amount,
            updated_at,
        }
    }

    /// Converts to a domain entry. `None` when the status text or period is
    /// not recognized; callers count and log such rows instead of failing
    /// the batch. Legacy pt-BR status values are accepted on read.
    pub(crate) fn to_entry(&self) -> Option<LedgerEntry> {
        let status = match self.status.trim().to_lowercase().as_str() {
            STATUS_PAID | "pago" => PaymentStatus::Paid,
            STATUS_DISREGARDED | "desconsiderado" => PaymentStatus::Disregarded,
            _ => return None,
        };
        let period = Period::new(self.reference_month, self.reference_year).ok()?;
        Some(LedgerEntry {
            collaborator_id: CollaboratorId(self.collaborator_id.clone()),
            period,
            status,
            amount: match status {
                PaymentStatus::Paid => self.amount,
                PaymentStatus::Disregarded => None,
            },
            updated_at: self.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period() -> Period {
        Period::new(7, 2024).unwrap()
    }

    #[test]
    fn paid_decision_keeps_the_amount() {
        let row = LedgerRowModel::from_decision(
            &CollaboratorId("42".into()),
            period(),
            PaymentDecision::Paid { amount: 500.0 },
            Utc::now(),
        );
        assert_eq!(row.status, "paid");
        assert_eq!(row.amount, Some(500.0));
        assert_eq!(row.reference_month, 7);
        assert_eq!(row.reference_year, 2024);
    }

    #[test]
    fn disregarded_decision_never_stores_an_amount() {
        let row = LedgerRowModel::from_decision(
            &CollaboratorId("42".into()),
            period(),
            PaymentDecision::Disregarded,
            Utc::now(),
        );
        assert_eq!(row.status, "disregarded");
        assert_eq!(row.amount, None);
    }

    #[test]
    fn recognizes_canonical_and_legacy_status_text() {
        let mut row = LedgerRowModel {
            collaborator_id: "42".into(),
            reference_month: 7,
            reference_year: 2024,
            status: "PAID ".into(),
            amount: Some(500.0),
            updated_at: Utc::now(),
        };
        assert_eq!(row.to_entry().unwrap().status, PaymentStatus::Paid);

        row.status = "Pago".into();
        assert_eq!(row.to_entry().unwrap().status, PaymentStatus::Paid);

        row.status = "desconsiderado".into();
        let entry = row.to_entry().unwrap();
        assert_eq!(entry.status, PaymentStatus::Disregarded);
        // A stray amount on a disregarded row is dropped.
        assert_eq!(entry.amount, None);

        row.status = "maybe".into();
        assert!(row.to_entry().is_none());
    }
}

use chrono::NaiveDate;

use crate::entities::{ObligationRow, ObligationStatus};

/// `DD/MM/YYYY`, the format the surrounding screens display dates in.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Short badge label for a report row, matching the period view's legend:
/// explicit words for terminal states, day counts for upcoming ones.
pub fn badge_label(row: &ObligationRow) -> String {
    match row.status {
        ObligationStatus::Paid => "PAGO".to_string(),
        ObligationStatus::Disregarded => "DESCONSIDERADO".to_string(),
        ObligationStatus::Overdue => "VENCIDO".to_string(),
        ObligationStatus::DueToday => "HOJE".to_string(),
        ObligationStatus::DueThisWeek
        | ObligationStatus::DueSoon
        | ObligationStatus::Comfortable => format!("{}d", row.days_until_due),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Collaborator, CollaboratorId};

    fn row(status: ObligationStatus, days_until_due: i64) -> ObligationRow {
        ObligationRow {
            collaborator: Collaborator {
                id: CollaboratorId("1".into()),
                name: "Ana Silva".into(),
                role: "Advogada".into(),
                team: String::new(),
                status: "Ativo".into(),
                hire_date: Some("10/01/2024".into()),
                oab_number: None,
                oab_uf: None,
            },
            due_date: NaiveDate::from_ymd_opt(2024, 7, 9).unwrap(),
            days_until_due,
            status,
            paid_amount: None,
        }
    }

    #[test]
    fn dates_render_in_pt_br_order() {
        assert_eq!(
            display_date(NaiveDate::from_ymd_opt(2024, 7, 9).unwrap()),
            "09/07/2024"
        );
    }

    #[test]
    fn badge_labels_follow_the_legend() {
        assert_eq!(badge_label(&row(ObligationStatus::Overdue, -3)), "VENCIDO");
        assert_eq!(badge_label(&row(ObligationStatus::DueToday, 0)), "HOJE");
        assert_eq!(badge_label(&row(ObligationStatus::DueThisWeek, 3)), "3d");
        assert_eq!(badge_label(&row(ObligationStatus::Comfortable, 40)), "40d");
        assert_eq!(badge_label(&row(ObligationStatus::Paid, -3)), "PAGO");
    }
}

use std::collections::HashMap;

use serde_derive::{Deserialize, Serialize};

use crate::entities::{Collaborator, CollaboratorId};

/// Raw collaborator row as returned by the hosted store. `role` and `team`
/// may hold either an option-table id or an already-resolved display name;
/// the distinction is settled by the lookup maps at conversion time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollaboratorRowModel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub hire_date: Option<String>,
    #[serde(default)]
    pub oab_number: Option<String>,
    #[serde(default)]
    pub oab_uf: Option<String>,
}

/// Row of an option table (`roles`, `teams`): id to display name.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OptionRowModel {
    pub id: String,
    pub name: String,
}

impl CollaboratorRowModel {
    /// Resolves role/team through the option-table maps. A no-op when the
    /// field already carries a display name (or the maps are empty).
    pub(crate) fn into_collaborator(
        self,
        roles: &HashMap<String, String>,
        teams: &HashMap<String, String>,
    ) -> Collaborator {
        Collaborator {
            id: CollaboratorId(self.id),
            name: self.name,
            role: resolve(self.role, roles),
            team: resolve(self.team, teams),
            status: self.status.unwrap_or_default(),
            hire_date: self.hire_date,
            oab_number: self.oab_number,
            oab_uf: self.oab_uf,
        }
    }
}

fn resolve(value: Option<String>, map: &HashMap<String, String>) -> String {
    match value {
        Some(v) => map.get(&v).cloned().unwrap_or(v),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_store_row_with_missing_optionals() {
        let row: CollaboratorRowModel = serde_json::from_str(
            r#"{"id": "42", "name": "Ana Silva", "role": "3", "hire_date": "10/01/2024"}"#,
        )
        .unwrap();
        assert_eq!(row.id, "42");
        assert_eq!(row.role.as_deref(), Some("3"));
        assert_eq!(row.team, None);
        assert_eq!(row.status, None);
    }

    #[test]
    fn resolves_ids_through_option_maps() {
        let roles = HashMap::from([("3".to_string(), "Advogada Pleno".to_string())]);
        let teams = HashMap::new();
        let row = CollaboratorRowModel {
            id: "42".into(),
            name: "Ana Silva".into(),
            role: Some("3".into()),
            team: Some("Jurídico".into()),
            status: Some("Ativo".into()),
            hire_date: Some("10/01/2024".into()),
            oab_number: None,
            oab_uf: None,
        };
        let collaborator = row.into_collaborator(&roles, &teams);
        assert_eq!(collaborator.role, "Advogada Pleno");
        // Unmapped values pass through as display text.
        assert_eq!(collaborator.team, "Jurídico");
        assert_eq!(collaborator.status, "Ativo");
    }
}

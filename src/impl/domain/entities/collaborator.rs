/// Opaque collaborator key, as issued by the hosted store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollaboratorId(pub String);

/// A collaborator row after option-table resolution. Role, team and status
/// are free text upstream; the scheduler normalizes them only at the
/// eligibility check, never at rest.
#[derive(Debug, Clone)]
pub struct Collaborator {
    pub id: CollaboratorId,
    pub name: String,
    pub role: String,
    pub team: String,
    pub status: String,
    /// Raw hire-date text, still in one of the two accepted entry formats.
    /// `None` (or blank) keeps the collaborator out of every period report.
    pub hire_date: Option<String>,
    /// Bar-registration fields, passed through for display only.
    pub oab_number: Option<String>,
    pub oab_uf: Option<String>,
}

impl std::fmt::Display for CollaboratorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

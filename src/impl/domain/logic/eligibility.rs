/// Role/team vocabulary marking a licensed-attorney function. Tokens are
/// diacritic-free stems, matched by substring against folded input so that
/// free-text values like "Advogado Pleno" or "Sócia Fundadora" qualify
/// without an enumerated role type at the data-entry boundary.
const LEGAL_FUNCTION_TOKENS: [&str; 7] = [
    "advogad",
    "socio",
    "socia",
    "estagiario",
    "estagiaria",
    "juridico",
    "legal",
];

/// Prefix covering "ativo", "ativa" and "ativo(a)" style status values.
/// A prefix (not substring) match keeps "inativo" out of scope.
const ACTIVE_STATUS_TOKEN: &str = "ativ";

/// Trim + lowercase + pt-BR diacritic fold ("Sócio" -> "socio"). The fold
/// table covers the accented code points that occur in the upstream role,
/// team and status fields.
pub(crate) fn normalize(value: &str) -> String {
    value.trim().to_lowercase().chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        _ => c,
    }
}

/// Pure eligibility predicate: active employment status, and role OR team
/// naming a legal function. Hire-date presence is enforced by the
/// orchestrator, not here.
pub(crate) fn is_eligible(status: &str, role: &str, team: &str) -> bool {
    if !normalize(status).starts_with(ACTIVE_STATUS_TOKEN) {
        return false;
    }
    let role = normalize(role);
    let team = normalize(team);
    LEGAL_FUNCTION_TOKENS
        .iter()
        .any(|token| role.contains(token) || team.contains(token))
}

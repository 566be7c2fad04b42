//! RDQ (meeting) model and the read projections returned by the API.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an RDQ.
///
/// TERMINE, ANNULE and CLOS are terminal: they are hidden by default from
/// search results unless the caller asks for history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RdqStatut {
    Planifie,
    EnCours,
    Termine,
    Annule,
    Clos,
}

impl RdqStatut {
    /// Statuses excluded from search results when history is not requested.
    pub const TERMINAL: [RdqStatut; 3] = [RdqStatut::Termine, RdqStatut::Annule, RdqStatut::Clos];

    pub fn as_str(&self) -> &'static str {
        match self {
            RdqStatut::Planifie => "PLANIFIE",
            RdqStatut::EnCours => "EN_COURS",
            RdqStatut::Termine => "TERMINE",
            RdqStatut::Annule => "ANNULE",
            RdqStatut::Clos => "CLOS",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PLANIFIE" => Some(RdqStatut::Planifie),
            "EN_COURS" => Some(RdqStatut::EnCours),
            "TERMINE" => Some(RdqStatut::Termine),
            "ANNULE" => Some(RdqStatut::Annule),
            "CLOS" => Some(RdqStatut::Clos),
            _ => None,
        }
    }
}

/// How the meeting takes place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RdqMode {
    Presentiel,
    Distanciel,
    Hybride,
}

impl RdqMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RdqMode::Presentiel => "PRESENTIEL",
            RdqMode::Distanciel => "DISTANCIEL",
            RdqMode::Hybride => "HYBRIDE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PRESENTIEL" => Some(RdqMode::Presentiel),
            "DISTANCIEL" => Some(RdqMode::Distanciel),
            "HYBRIDE" => Some(RdqMode::Hybride),
            _ => None,
        }
    }
}

/// A scheduled client meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rdq {
    pub id: String,
    pub titre: String,
    /// RFC 3339 timestamp.
    pub date_heure: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
    pub mode: RdqMode,
    pub statut: RdqStatut,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indications: Option<String>,
    pub manager_id: String,
    pub projet_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating a new RDQ.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRdqRequest {
    pub titre: String,
    pub date_heure: String,
    #[serde(default)]
    pub adresse: Option<String>,
    pub mode: RdqMode,
    #[serde(default)]
    pub statut: Option<RdqStatut>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub indications: Option<String>,
    pub manager_id: String,
    pub projet_id: String,
    pub collaborateur_ids: Vec<String>,
}

/// Request body for partially updating an RDQ.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRdqRequest {
    #[serde(default)]
    pub titre: Option<String>,
    #[serde(default)]
    pub date_heure: Option<String>,
    #[serde(default)]
    pub adresse: Option<String>,
    #[serde(default)]
    pub mode: Option<RdqMode>,
    #[serde(default)]
    pub statut: Option<RdqStatut>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub indications: Option<String>,
    #[serde(default)]
    pub collaborateur_ids: Option<Vec<String>>,
}

/// Read projection of an RDQ with its related summaries, as returned by
/// search results and single-RDQ lookups.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RdqSummary {
    pub id: String,
    pub titre: String,
    pub date_heure: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
    pub mode: RdqMode,
    pub statut: RdqStatut,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub manager: ManagerSummary,
    pub projet: ProjetSummary,
    pub collaborateurs: Vec<CollaborateurSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<DocumentSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bilans: Option<Vec<BilanSummary>>,
}

/// Manager read projection embedded in RDQ summaries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerSummary {
    pub id: String,
    pub nom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Projet read projection with the owning client's name denormalized in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjetSummary {
    pub id: String,
    pub nom: String,
    pub nom_client: String,
}

/// Collaborateur read projection embedded in RDQ summaries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborateurSummary {
    pub id: String,
    pub nom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Document read projection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: String,
    pub nom: String,
}

/// Bilan read projection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BilanSummary {
    pub id: String,
    pub note: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentaire: Option<String>,
    pub auteur: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statut_round_trips_through_wire_tokens() {
        for statut in [
            RdqStatut::Planifie,
            RdqStatut::EnCours,
            RdqStatut::Termine,
            RdqStatut::Annule,
            RdqStatut::Clos,
        ] {
            assert_eq!(RdqStatut::from_str(statut.as_str()), Some(statut));
        }
        assert_eq!(RdqStatut::from_str("TERMINATED"), None);
    }

    #[test]
    fn mode_rejects_unknown_tokens() {
        assert_eq!(RdqMode::from_str("PRESENTIEL"), Some(RdqMode::Presentiel));
        assert_eq!(RdqMode::from_str("presentiel"), None);
        assert_eq!(RdqMode::from_str("BOGUS"), None);
    }

    #[test]
    fn terminal_set_excludes_active_statuses() {
        assert!(!RdqStatut::TERMINAL.contains(&RdqStatut::Planifie));
        assert!(!RdqStatut::TERMINAL.contains(&RdqStatut::EnCours));
        assert!(RdqStatut::TERMINAL.contains(&RdqStatut::Clos));
    }
}

//! Database repository for CRUD operations and search query execution.
//!
//! Uses prepared statements and transactions for data integrity. Search
//! predicates arrive as pre-built condition lists and are rendered into
//! parameterized SQL; no filtering happens in application memory.

use chrono::Utc;
use sqlx::{QueryBuilder, Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Bilan, BilanSummary, Client, Collaborateur, CollaborateurSummary, CreateBilanRequest,
    CreateClientRequest, CreateCollaborateurRequest, CreateDocumentRequest, CreateManagerRequest,
    CreateProjetRequest, CreateRdqRequest, Document, DocumentSummary, Manager, ManagerSummary,
    Projet, ProjetSummary, Rdq, RdqMode, RdqStatut, RdqSummary, UpdateRdqRequest,
};
use crate::search::{
    push_where, Condition, RdqSearchStats, SortDirection, SortField, SEARCH_FROM,
};

/// One row of the search content query: an RDQ with its manager and
/// projet/client projections already joined in.
#[derive(Debug, Clone)]
pub struct RdqHit {
    pub id: String,
    pub titre: String,
    pub date_heure: String,
    pub adresse: Option<String>,
    pub mode: RdqMode,
    pub statut: RdqStatut,
    pub description: Option<String>,
    pub manager: ManagerSummary,
    pub projet: ProjetSummary,
}

impl RdqHit {
    /// Complete the read projection with the per-RDQ collections.
    pub fn into_summary(
        self,
        collaborateurs: Vec<CollaborateurSummary>,
        documents: Option<Vec<DocumentSummary>>,
        bilans: Option<Vec<BilanSummary>>,
    ) -> RdqSummary {
        RdqSummary {
            id: self.id,
            titre: self.titre,
            date_heure: self.date_heure,
            adresse: self.adresse,
            mode: self.mode,
            statut: self.statut,
            description: self.description,
            manager: self.manager,
            projet: self.projet,
            collaborateurs,
            documents,
            bilans,
        }
    }
}

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== CLIENT OPERATIONS ====================

    /// Create a new client.
    pub async fn create_client(&self, request: &CreateClientRequest) -> Result<Client, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query("INSERT INTO clients (id, nom, created_at) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(&request.nom)
            .bind(&now)
            .execute(&self.pool)
            .await?;

        Ok(Client {
            id,
            nom: request.nom.clone(),
            created_at: now,
        })
    }

    /// Get a client by ID.
    pub async fn get_client(&self, id: &str) -> Result<Option<Client>, AppError> {
        let row = sqlx::query("SELECT id, nom, created_at FROM clients WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Client {
            id: row.get("id"),
            nom: row.get("nom"),
            created_at: row.get("created_at"),
        }))
    }

    /// List all clients.
    pub async fn list_clients(&self) -> Result<Vec<Client>, AppError> {
        let rows = sqlx::query("SELECT id, nom, created_at FROM clients ORDER BY nom")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Client {
                id: row.get("id"),
                nom: row.get("nom"),
                created_at: row.get("created_at"),
            })
            .collect())
    }

    // ==================== MANAGER OPERATIONS ====================

    /// Create a new manager.
    pub async fn create_manager(
        &self,
        request: &CreateManagerRequest,
    ) -> Result<Manager, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query("INSERT INTO managers (id, nom, email, created_at) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&request.nom)
            .bind(&request.email)
            .bind(&now)
            .execute(&self.pool)
            .await?;

        Ok(Manager {
            id,
            nom: request.nom.clone(),
            email: request.email.clone(),
            created_at: now,
        })
    }

    /// Get a manager by ID.
    pub async fn get_manager(&self, id: &str) -> Result<Option<Manager>, AppError> {
        let row = sqlx::query("SELECT id, nom, email, created_at FROM managers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| manager_from_row(&row)))
    }

    /// List all managers.
    pub async fn list_managers(&self) -> Result<Vec<Manager>, AppError> {
        let rows = sqlx::query("SELECT id, nom, email, created_at FROM managers ORDER BY nom")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(manager_from_row).collect())
    }

    // ==================== COLLABORATEUR OPERATIONS ====================

    /// Create a new collaborateur.
    pub async fn create_collaborateur(
        &self,
        request: &CreateCollaborateurRequest,
    ) -> Result<Collaborateur, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query("INSERT INTO collaborateurs (id, nom, email, created_at) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&request.nom)
            .bind(&request.email)
            .bind(&now)
            .execute(&self.pool)
            .await?;

        Ok(Collaborateur {
            id,
            nom: request.nom.clone(),
            email: request.email.clone(),
            created_at: now,
        })
    }

    /// Get a collaborateur by ID.
    pub async fn get_collaborateur(&self, id: &str) -> Result<Option<Collaborateur>, AppError> {
        let row = sqlx::query("SELECT id, nom, email, created_at FROM collaborateurs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| collaborateur_from_row(&row)))
    }

    /// List all collaborateurs.
    pub async fn list_collaborateurs(&self) -> Result<Vec<Collaborateur>, AppError> {
        let rows =
            sqlx::query("SELECT id, nom, email, created_at FROM collaborateurs ORDER BY nom")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.iter().map(collaborateur_from_row).collect())
    }

    // ==================== PROJET OPERATIONS ====================

    /// Create a new projet.
    pub async fn create_projet(&self, request: &CreateProjetRequest) -> Result<Projet, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query("INSERT INTO projets (id, nom, client_id, created_at) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&request.nom)
            .bind(&request.client_id)
            .bind(&now)
            .execute(&self.pool)
            .await?;

        Ok(Projet {
            id,
            nom: request.nom.clone(),
            client_id: request.client_id.clone(),
            created_at: now,
        })
    }

    /// Get a projet by ID.
    pub async fn get_projet(&self, id: &str) -> Result<Option<Projet>, AppError> {
        let row = sqlx::query("SELECT id, nom, client_id, created_at FROM projets WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Projet {
            id: row.get("id"),
            nom: row.get("nom"),
            client_id: row.get("client_id"),
            created_at: row.get("created_at"),
        }))
    }

    /// List all projets.
    pub async fn list_projets(&self) -> Result<Vec<Projet>, AppError> {
        let rows = sqlx::query("SELECT id, nom, client_id, created_at FROM projets ORDER BY nom")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Projet {
                id: row.get("id"),
                nom: row.get("nom"),
                client_id: row.get("client_id"),
                created_at: row.get("created_at"),
            })
            .collect())
    }

    // ==================== RDQ OPERATIONS ====================

    /// Create a new RDQ with its collaborateur assignments.
    ///
    /// Reference validation (manager, projet, collaborateurs exist) happens
    /// in the handler; this method persists atomically.
    pub async fn create_rdq(&self, request: &CreateRdqRequest) -> Result<Rdq, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let statut = request.statut.unwrap_or(RdqStatut::Planifie);

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"INSERT INTO rdqs (
                id, titre, date_heure, adresse, mode, statut,
                description, indications, manager_id, projet_id,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&id)
        .bind(&request.titre)
        .bind(&request.date_heure)
        .bind(&request.adresse)
        .bind(request.mode.as_str())
        .bind(statut.as_str())
        .bind(&request.description)
        .bind(&request.indications)
        .bind(&request.manager_id)
        .bind(&request.projet_id)
        .bind(&now)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        for collaborateur_id in &request.collaborateur_ids {
            sqlx::query(
                "INSERT INTO rdq_collaborateurs (rdq_id, collaborateur_id) VALUES (?, ?)",
            )
            .bind(&id)
            .bind(collaborateur_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(Rdq {
            id,
            titre: request.titre.clone(),
            date_heure: request.date_heure.clone(),
            adresse: request.adresse.clone(),
            mode: request.mode,
            statut,
            description: request.description.clone(),
            indications: request.indications.clone(),
            manager_id: request.manager_id.clone(),
            projet_id: request.projet_id.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Get an RDQ by ID.
    pub async fn get_rdq(&self, id: &str) -> Result<Option<Rdq>, AppError> {
        let row = sqlx::query(
            r#"SELECT id, titre, date_heure, adresse, mode, statut,
                      description, indications, manager_id, projet_id,
                      created_at, updated_at
               FROM rdqs WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(rdq_from_row).transpose()
    }

    /// Get the read projection of a single RDQ, with documents and bilans
    /// always included.
    pub async fn get_rdq_detail(&self, id: &str) -> Result<Option<RdqSummary>, AppError> {
        let conditions = [Condition::IdEquals {
            column: "r.id",
            id: id.to_string(),
        }];
        let hits = self
            .search_rdqs(&conditions, SortField::DateHeure, SortDirection::Desc, 1, 0)
            .await?;

        let Some(hit) = hits.into_iter().next() else {
            return Ok(None);
        };

        let collaborateurs = self.collaborateurs_for_rdq(id).await?;
        let documents = self.documents_for_rdq(id).await?;
        let bilans = self.bilans_for_rdq(id).await?;

        Ok(Some(hit.into_summary(
            collaborateurs,
            Some(documents),
            Some(bilans),
        )))
    }

    /// Partially update an RDQ; absent fields keep their current value.
    pub async fn update_rdq(&self, id: &str, request: &UpdateRdqRequest) -> Result<Rdq, AppError> {
        let existing = self
            .get_rdq(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("RDQ {} not found", id)))?;

        let now = Utc::now().to_rfc3339();

        let titre = request.titre.as_ref().unwrap_or(&existing.titre);
        let date_heure = request.date_heure.as_ref().unwrap_or(&existing.date_heure);
        let adresse = request.adresse.clone().or(existing.adresse.clone());
        let mode = request.mode.unwrap_or(existing.mode);
        let statut = request.statut.unwrap_or(existing.statut);
        let description = request.description.clone().or(existing.description.clone());
        let indications = request.indications.clone().or(existing.indications.clone());

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"UPDATE rdqs SET
                titre = ?, date_heure = ?, adresse = ?, mode = ?, statut = ?,
                description = ?, indications = ?, updated_at = ?
            WHERE id = ?"#,
        )
        .bind(titre)
        .bind(date_heure)
        .bind(&adresse)
        .bind(mode.as_str())
        .bind(statut.as_str())
        .bind(&description)
        .bind(&indications)
        .bind(&now)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if let Some(collaborateur_ids) = &request.collaborateur_ids {
            sqlx::query("DELETE FROM rdq_collaborateurs WHERE rdq_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            for collaborateur_id in collaborateur_ids {
                sqlx::query(
                    "INSERT INTO rdq_collaborateurs (rdq_id, collaborateur_id) VALUES (?, ?)",
                )
                .bind(id)
                .bind(collaborateur_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        Ok(Rdq {
            id: id.to_string(),
            titre: titre.clone(),
            date_heure: date_heure.clone(),
            adresse,
            mode,
            statut,
            description,
            indications,
            manager_id: existing.manager_id,
            projet_id: existing.projet_id,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete an RDQ. Assignments, documents and bilans cascade.
    pub async fn delete_rdq(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM rdqs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("RDQ {} not found", id)));
        }

        Ok(())
    }

    /// Collaborateurs assigned to an RDQ.
    pub async fn collaborateurs_for_rdq(
        &self,
        rdq_id: &str,
    ) -> Result<Vec<CollaborateurSummary>, AppError> {
        let rows = sqlx::query(
            r#"SELECT co.id, co.nom, co.email
               FROM rdq_collaborateurs rc
               JOIN collaborateurs co ON co.id = rc.collaborateur_id
               WHERE rc.rdq_id = ?
               ORDER BY co.nom"#,
        )
        .bind(rdq_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| CollaborateurSummary {
                id: row.get("id"),
                nom: row.get("nom"),
                email: row.get("email"),
            })
            .collect())
    }

    // ==================== DOCUMENT OPERATIONS ====================

    /// Attach a document to an RDQ.
    pub async fn add_document(
        &self,
        rdq_id: &str,
        request: &CreateDocumentRequest,
    ) -> Result<Document, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query("INSERT INTO documents (id, rdq_id, nom, created_at) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(rdq_id)
            .bind(&request.nom)
            .bind(&now)
            .execute(&self.pool)
            .await?;

        Ok(Document {
            id,
            rdq_id: rdq_id.to_string(),
            nom: request.nom.clone(),
            created_at: now,
        })
    }

    /// Documents attached to an RDQ.
    pub async fn documents_for_rdq(&self, rdq_id: &str) -> Result<Vec<DocumentSummary>, AppError> {
        let rows =
            sqlx::query("SELECT id, nom FROM documents WHERE rdq_id = ? ORDER BY created_at")
                .bind(rdq_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|row| DocumentSummary {
                id: row.get("id"),
                nom: row.get("nom"),
            })
            .collect())
    }

    // ==================== BILAN OPERATIONS ====================

    /// Attach a bilan to an RDQ.
    pub async fn add_bilan(
        &self,
        rdq_id: &str,
        request: &CreateBilanRequest,
    ) -> Result<Bilan, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO bilans (id, rdq_id, note, commentaire, auteur, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(rdq_id)
        .bind(request.note)
        .bind(&request.commentaire)
        .bind(&request.auteur)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Bilan {
            id,
            rdq_id: rdq_id.to_string(),
            note: request.note,
            commentaire: request.commentaire.clone(),
            auteur: request.auteur.clone(),
            created_at: now,
        })
    }

    /// Bilans attached to an RDQ.
    pub async fn bilans_for_rdq(&self, rdq_id: &str) -> Result<Vec<BilanSummary>, AppError> {
        let rows = sqlx::query(
            "SELECT id, note, commentaire, auteur FROM bilans WHERE rdq_id = ? ORDER BY created_at",
        )
        .bind(rdq_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| BilanSummary {
                id: row.get("id"),
                note: row.get("note"),
                commentaire: row.get("commentaire"),
                auteur: row.get("auteur"),
            })
            .collect())
    }

    // ==================== SEARCH OPERATIONS ====================

    /// Count of distinct RDQs matching the predicate.
    pub async fn count_rdqs(&self, conditions: &[Condition]) -> Result<i64, AppError> {
        let mut qb = QueryBuilder::new(format!(
            "SELECT COUNT(DISTINCT r.id) AS total {}",
            SEARCH_FROM
        ));
        push_where(&mut qb, conditions);

        let row = qb.build().fetch_one(&self.pool).await?;
        Ok(row.get("total"))
    }

    /// One page of distinct RDQs matching the predicate, sorted and joined
    /// with their manager and projet/client projections.
    pub async fn search_rdqs(
        &self,
        conditions: &[Condition],
        sort_by: SortField,
        sort_direction: SortDirection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RdqHit>, AppError> {
        let mut qb = QueryBuilder::new(format!(
            r#"SELECT DISTINCT r.id, r.titre, r.date_heure, r.adresse, r.mode, r.statut,
                      r.description,
                      m.id AS manager_id, m.nom AS manager_nom, m.email AS manager_email,
                      p.id AS projet_id, p.nom AS projet_nom, cl.nom AS client_nom
               {}"#,
            SEARCH_FROM
        ));
        push_where(&mut qb, conditions);

        qb.push(" ORDER BY ");
        qb.push(sort_by.column());
        qb.push(" ");
        qb.push(sort_direction.sql());
        // stable tiebreak so pages do not overlap
        qb.push(", r.id ASC");
        qb.push(" LIMIT ");
        qb.push_bind(limit);
        qb.push(" OFFSET ");
        qb.push_bind(offset);

        let rows = qb.build().fetch_all(&self.pool).await?;
        rows.iter().map(rdq_hit_from_row).collect()
    }

    /// Aggregate statistics over the full filtered set (no pagination).
    pub async fn search_stats(&self, conditions: &[Condition]) -> Result<RdqSearchStats, AppError> {
        // Status/mode counts over the distinct filtered rows.
        let mut qb = QueryBuilder::new(format!(
            r#"SELECT
                SUM(CASE WHEN f.statut = 'PLANIFIE' THEN 1 ELSE 0 END) AS planifies,
                SUM(CASE WHEN f.statut = 'EN_COURS' THEN 1 ELSE 0 END) AS en_cours,
                SUM(CASE WHEN f.statut = 'TERMINE' THEN 1 ELSE 0 END) AS termines,
                SUM(CASE WHEN f.statut = 'ANNULE' THEN 1 ELSE 0 END) AS annules,
                SUM(CASE WHEN f.statut = 'CLOS' THEN 1 ELSE 0 END) AS clos,
                SUM(CASE WHEN f.mode = 'PRESENTIEL' THEN 1 ELSE 0 END) AS presentiel,
                SUM(CASE WHEN f.mode = 'DISTANCIEL' THEN 1 ELSE 0 END) AS distanciel,
                SUM(CASE WHEN f.mode = 'HYBRIDE' THEN 1 ELSE 0 END) AS hybride
               FROM (SELECT DISTINCT r.id AS id, r.statut AS statut, r.mode AS mode {}"#,
            SEARCH_FROM
        ));
        push_where(&mut qb, conditions);
        qb.push(") f");

        let row = qb.build().fetch_one(&self.pool).await?;

        // Bilan aggregates over the same filtered set.
        let mut bilan_qb = QueryBuilder::new(format!(
            r#"SELECT AVG(b.note) AS avg_note, COUNT(DISTINCT b.rdq_id) AS avec_bilans
               FROM bilans b
               WHERE b.rdq_id IN (SELECT DISTINCT r.id {}"#,
            SEARCH_FROM
        ));
        push_where(&mut bilan_qb, conditions);
        bilan_qb.push(")");

        let bilan_row = bilan_qb.build().fetch_one(&self.pool).await?;

        // SUM over an empty set yields NULL
        Ok(RdqSearchStats {
            rdqs_planifies: row.get::<Option<i64>, _>("planifies").unwrap_or(0),
            rdqs_en_cours: row.get::<Option<i64>, _>("en_cours").unwrap_or(0),
            rdqs_termines: row.get::<Option<i64>, _>("termines").unwrap_or(0),
            rdqs_annules: row.get::<Option<i64>, _>("annules").unwrap_or(0),
            rdqs_clos: row.get::<Option<i64>, _>("clos").unwrap_or(0),
            total_presentiel: row.get::<Option<i64>, _>("presentiel").unwrap_or(0),
            total_distanciel: row.get::<Option<i64>, _>("distanciel").unwrap_or(0),
            total_hybride: row.get::<Option<i64>, _>("hybride").unwrap_or(0),
            average_note_bilan: bilan_row.get("avg_note"),
            total_avec_bilans: bilan_row.get("avec_bilans"),
        })
    }
}

// Helper functions for row conversion

fn manager_from_row(row: &sqlx::sqlite::SqliteRow) -> Manager {
    Manager {
        id: row.get("id"),
        nom: row.get("nom"),
        email: row.get("email"),
        created_at: row.get("created_at"),
    }
}

fn collaborateur_from_row(row: &sqlx::sqlite::SqliteRow) -> Collaborateur {
    Collaborateur {
        id: row.get("id"),
        nom: row.get("nom"),
        email: row.get("email"),
        created_at: row.get("created_at"),
    }
}

fn rdq_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Rdq, AppError> {
    let mode_str: String = row.get("mode");
    let statut_str: String = row.get("statut");

    Ok(Rdq {
        id: row.get("id"),
        titre: row.get("titre"),
        date_heure: row.get("date_heure"),
        adresse: row.get("adresse"),
        mode: parse_mode(&mode_str)?,
        statut: parse_statut(&statut_str)?,
        description: row.get("description"),
        indications: row.get("indications"),
        manager_id: row.get("manager_id"),
        projet_id: row.get("projet_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

fn rdq_hit_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<RdqHit, AppError> {
    let mode_str: String = row.get("mode");
    let statut_str: String = row.get("statut");
    let manager_id: Option<String> = row.get("manager_id");
    let projet_id: Option<String> = row.get("projet_id");
    let rdq_id: String = row.get("id");

    let manager_id = manager_id.ok_or_else(|| {
        AppError::Database(format!("RDQ {} references a missing manager", rdq_id))
    })?;
    let projet_id = projet_id
        .ok_or_else(|| AppError::Database(format!("RDQ {} references a missing projet", rdq_id)))?;

    Ok(RdqHit {
        id: rdq_id,
        titre: row.get("titre"),
        date_heure: row.get("date_heure"),
        adresse: row.get("adresse"),
        mode: parse_mode(&mode_str)?,
        statut: parse_statut(&statut_str)?,
        description: row.get("description"),
        manager: ManagerSummary {
            id: manager_id,
            nom: row.get("manager_nom"),
            email: row.get("manager_email"),
        },
        projet: ProjetSummary {
            id: projet_id,
            nom: row.get("projet_nom"),
            nom_client: row.get::<Option<String>, _>("client_nom").unwrap_or_default(),
        },
    })
}

fn parse_mode(s: &str) -> Result<RdqMode, AppError> {
    RdqMode::from_str(s)
        .ok_or_else(|| AppError::Database(format!("Unknown mode '{}' stored in database", s)))
}

fn parse_statut(s: &str) -> Result<RdqStatut, AppError> {
    RdqStatut::from_str(s)
        .ok_or_else(|| AppError::Database(format!("Unknown statut '{}' stored in database", s)))
}

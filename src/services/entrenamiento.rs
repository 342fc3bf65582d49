//! Trainer endpoints for trainings, time slots and enrollments.

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{
    Entrenamiento, EntrenamientoInput, Horario, HorarioInput, Inscripcion, InscripcionInput,
    Listing,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct HorarioQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    entrenamiento_id: Option<i64>,
}

#[derive(Clone)]
pub struct EntrenamientoService {
    http: HttpClient,
}

impl EntrenamientoService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    // ─── Entrenamientos ──────────────────────────────────────────────────────

    pub async fn list_entrenamientos(&self) -> Result<Vec<Entrenamiento>> {
        let listing: Listing<Entrenamiento> = self.http.get("/entrenador/entrenamientos").await?;
        Ok(listing.into_items())
    }

    pub async fn get_entrenamiento(&self, id: i64) -> Result<Entrenamiento> {
        self.http
            .get(&format!("/entrenador/entrenamientos/{}", id))
            .await
    }

    pub async fn create_entrenamiento(&self, input: &EntrenamientoInput) -> Result<Entrenamiento> {
        self.http.post("/entrenador/entrenamientos", input).await
    }

    pub async fn update_entrenamiento(
        &self,
        id: i64,
        input: &EntrenamientoInput,
    ) -> Result<Entrenamiento> {
        self.http
            .put(&format!("/entrenador/entrenamientos/{}", id), input)
            .await
    }

    pub async fn delete_entrenamiento(&self, id: i64) -> Result<()> {
        let _: Value = self
            .http
            .delete(&format!("/entrenador/entrenamientos/{}", id))
            .await?;
        Ok(())
    }

    // ─── Horarios ────────────────────────────────────────────────────────────

    /// Time slots, optionally restricted to one training.
    pub async fn list_horarios(&self, entrenamiento_id: Option<i64>) -> Result<Vec<Horario>> {
        let listing: Listing<Horario> = self
            .http
            .get_query("/entrenador/horarios", &HorarioQuery { entrenamiento_id })
            .await?;
        Ok(listing.into_items())
    }

    pub async fn create_horario(&self, input: &HorarioInput) -> Result<Horario> {
        self.http.post("/entrenador/horarios", input).await
    }

    pub async fn update_horario(&self, id: i64, input: &HorarioInput) -> Result<Horario> {
        self.http
            .put(&format!("/entrenador/horarios/{}", id), input)
            .await
    }

    pub async fn delete_horario(&self, id: i64) -> Result<()> {
        let _: Value = self
            .http
            .delete(&format!("/entrenador/horarios/{}", id))
            .await?;
        Ok(())
    }

    // ─── Inscripciones ───────────────────────────────────────────────────────

    pub async fn list_inscripciones(&self) -> Result<Vec<Inscripcion>> {
        let listing: Listing<Inscripcion> = self.http.get("/entrenador/inscripciones").await?;
        Ok(listing.into_items())
    }

    pub async fn inscribir_atleta(&self, input: &InscripcionInput) -> Result<Inscripcion> {
        self.http.post("/entrenador/inscripciones", input).await
    }

    pub async fn eliminar_inscripcion(&self, id: i64) -> Result<()> {
        let _: Value = self
            .http
            .delete(&format!("/entrenador/inscripciones/{}", id))
            .await?;
        Ok(())
    }
}

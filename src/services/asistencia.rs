//! Attendance endpoints (`/entrenador/asistencias/*`).

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Asistencia, AsistenciaFilter, AsistenciaInput, Listing};

#[derive(Clone)]
pub struct AsistenciaService {
    http: HttpClient,
}

impl AsistenciaService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list_asistencias(&self, filter: &AsistenciaFilter) -> Result<Vec<Asistencia>> {
        let listing: Listing<Asistencia> = self
            .http
            .get_query("/entrenador/asistencias", filter)
            .await?;
        Ok(listing.into_items())
    }

    pub async fn registrar_asistencia(&self, input: &AsistenciaInput) -> Result<Asistencia> {
        self.http.post("/entrenador/asistencias", input).await
    }

    /// Trainer marks the athlete as present.
    pub async fn marcar_presente(&self, id: i64) -> Result<Asistencia> {
        self.http
            .put(
                &format!("/entrenador/asistencias/{}/presente", id),
                &serde_json::json!({}),
            )
            .await
    }

    pub async fn marcar_ausente(&self, id: i64) -> Result<Asistencia> {
        self.http
            .put(
                &format!("/entrenador/asistencias/{}/ausente", id),
                &serde_json::json!({}),
            )
            .await
    }

    /// Athlete confirms they will attend.
    pub async fn confirmar_asistencia(&self, id: i64) -> Result<Asistencia> {
        self.http
            .post_empty(&format!("/entrenador/asistencias/{}/confirmar", id))
            .await
    }

    pub async fn get_asistencias_atleta(&self, atleta_id: i64) -> Result<Vec<Asistencia>> {
        let listing: Listing<Asistencia> = self
            .http
            .get(&format!("/entrenador/asistencias/atleta/{}", atleta_id))
            .await?;
        Ok(listing.into_items())
    }
}

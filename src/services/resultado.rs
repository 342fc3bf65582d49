//! Training result endpoints (`/entrenador/resultados-entrenamiento`).

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Listing, ResultadoEntrenamiento, ResultadoEntrenamientoInput};

#[derive(Clone)]
pub struct ResultadoEntrenamientoService {
    http: HttpClient,
}

impl ResultadoEntrenamientoService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list_resultados(&self) -> Result<Vec<ResultadoEntrenamiento>> {
        let listing: Listing<ResultadoEntrenamiento> = self
            .http
            .get("/entrenador/resultados-entrenamiento")
            .await?;
        Ok(listing.into_items())
    }

    pub async fn create_resultado(
        &self,
        input: &ResultadoEntrenamientoInput,
    ) -> Result<ResultadoEntrenamiento> {
        self.http
            .post("/entrenador/resultados-entrenamiento", input)
            .await
    }

    pub async fn update_resultado(
        &self,
        id: i64,
        input: &ResultadoEntrenamientoInput,
    ) -> Result<ResultadoEntrenamiento> {
        self.http
            .put(&format!("/entrenador/resultados-entrenamiento/{}", id), input)
            .await
    }
}

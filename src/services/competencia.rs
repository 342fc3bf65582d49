// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Competition endpoints (`/competencia/*`).

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{
    Competencia, CompetenciaInput, Listing, Prueba, PruebaInput, ResultadoCompetencia,
    ResultadoCompetenciaInput,
};
use serde_json::Value;

#[derive(Clone)]
pub struct CompetenciaService {
    http: HttpClient,
}

impl CompetenciaService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    // ─── Competencias ────────────────────────────────────────────────────────

    pub async fn list_competencias(&self) -> Result<Vec<Competencia>> {
        let listing: Listing<Competencia> = self.http.get("/competencia/competencias").await?;
        Ok(listing.into_items())
    }

    pub async fn get_competencia(&self, id: i64) -> Result<Competencia> {
        self.http
            .get(&format!("/competencia/competencias/{}", id))
            .await
    }

    pub async fn create_competencia(&self, input: &CompetenciaInput) -> Result<Competencia> {
        self.http.post("/competencia/competencias", input).await
    }

    pub async fn update_competencia(
        &self,
        id: i64,
        input: &CompetenciaInput,
    ) -> Result<Competencia> {
        self.http
            .put(&format!("/competencia/competencias/{}", id), input)
            .await
    }

    pub async fn delete_competencia(&self, id: i64) -> Result<()> {
        let _: Value = self
            .http
            .delete(&format!("/competencia/competencias/{}", id))
            .await?;
        Ok(())
    }

    // ─── Pruebas ─────────────────────────────────────────────────────────────

    pub async fn list_pruebas(&self) -> Result<Vec<Prueba>> {
        let listing: Listing<Prueba> = self.http.get("/competencia/pruebas").await?;
        Ok(listing.into_items())
    }

    pub async fn create_prueba(&self, input: &PruebaInput) -> Result<Prueba> {
        self.http.post("/competencia/pruebas", input).await
    }

    // ─── Resultados ──────────────────────────────────────────────────────────

    /// All competition results, whether the server pages them or not.
    pub async fn list_resultados(&self) -> Result<Vec<ResultadoCompetencia>> {
        let listing: Listing<ResultadoCompetencia> =
            self.http.get("/competencia/resultados").await?;
        Ok(listing.into_items())
    }

    pub async fn get_resultado(&self, id: i64) -> Result<ResultadoCompetencia> {
        self.http
            .get(&format!("/competencia/resultados/{}", id))
            .await
    }

    pub async fn create_resultado(
        &self,
        input: &ResultadoCompetenciaInput,
    ) -> Result<ResultadoCompetencia> {
        self.http.post("/competencia/resultados", input).await
    }

    pub async fn update_resultado(
        &self,
        id: i64,
        input: &ResultadoCompetenciaInput,
    ) -> Result<ResultadoCompetencia> {
        self.http
            .put(&format!("/competencia/resultados/{}", id), input)
            .await
    }

    pub async fn get_resultados_atleta(&self, atleta_id: i64) -> Result<Vec<ResultadoCompetencia>> {
        let listing: Listing<ResultadoCompetencia> = self
            .http
            .get(&format!("/competencia/resultados/atleta/{}", atleta_id))
            .await?;
        Ok(listing.into_items())
    }
}

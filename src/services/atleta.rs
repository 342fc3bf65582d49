// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Athlete endpoints (`/atleta/*`).

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{
    Asistencia, Atleta, AtletaInput, Entrenamiento, HistorialMedico, HistorialMedicoInput,
    Listing,
};

#[derive(Clone)]
pub struct AtletaService {
    http: HttpClient,
}

impl AtletaService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Medical history of the signed-in athlete.
    pub async fn get_historial(&self) -> Result<Vec<HistorialMedico>> {
        let listing: Listing<HistorialMedico> = self.http.get("/atleta/historial").await?;
        Ok(listing.into_items())
    }

    pub async fn get_perfil(&self) -> Result<Atleta> {
        self.http.get("/atleta/perfil").await
    }

    pub async fn update_perfil(&self, input: &AtletaInput) -> Result<Atleta> {
        self.http.put("/atleta/perfil", input).await
    }

    pub async fn list_atletas(&self) -> Result<Vec<Atleta>> {
        let listing: Listing<Atleta> = self.http.get("/atleta/atletas").await?;
        Ok(listing.into_items())
    }

    pub async fn get_atleta(&self, id: i64) -> Result<Atleta> {
        self.http.get(&format!("/atleta/atletas/{}", id)).await
    }

    pub async fn create_atleta(&self, input: &AtletaInput) -> Result<Atleta> {
        self.http.post("/atleta/atletas", input).await
    }

    pub async fn update_atleta(&self, id: i64, input: &AtletaInput) -> Result<Atleta> {
        self.http.put(&format!("/atleta/atletas/{}", id), input).await
    }

    /// Medical history of any athlete (trainer/admin view).
    pub async fn get_historial_medico(&self, atleta_id: i64) -> Result<Vec<HistorialMedico>> {
        let listing: Listing<HistorialMedico> = self
            .http
            .get(&format!("/atleta/{}/historial-medico", atleta_id))
            .await?;
        Ok(listing.into_items())
    }

    pub async fn create_historial_medico(
        &self,
        atleta_id: i64,
        input: &HistorialMedicoInput,
    ) -> Result<HistorialMedico> {
        self.http
            .post(&format!("/atleta/{}/historial-medico", atleta_id), input)
            .await
    }

    pub async fn update_historial_medico(
        &self,
        id: i64,
        input: &HistorialMedicoInput,
    ) -> Result<HistorialMedico> {
        self.http
            .put(&format!("/atleta/historial-medico/{}", id), input)
            .await
    }

    /// Trainings the signed-in athlete is enrolled in.
    pub async fn get_mis_entrenamientos(&self) -> Result<Vec<Entrenamiento>> {
        let listing: Listing<Entrenamiento> = self.http.get("/atleta/entrenamientos").await?;
        Ok(listing.into_items())
    }

    pub async fn get_mis_asistencias(&self) -> Result<Vec<Asistencia>> {
        let listing: Listing<Asistencia> = self.http.get("/atleta/asistencias").await?;
        Ok(listing.into_items())
    }
}

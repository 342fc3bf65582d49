//! Intern endpoints (`/entrenador/pasantes`).

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Listing, Pasante, PasanteInput};
use serde_json::Value;

#[derive(Clone)]
pub struct PasanteService {
    http: HttpClient,
}

impl PasanteService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list_pasantes(&self) -> Result<Vec<Pasante>> {
        let listing: Listing<Pasante> = self.http.get("/entrenador/pasantes").await?;
        Ok(listing.into_items())
    }

    pub async fn create_pasante(&self, input: &PasanteInput) -> Result<Pasante> {
        self.http.post("/entrenador/pasantes", input).await
    }

    pub async fn update_pasante(&self, id: i64, input: &PasanteInput) -> Result<Pasante> {
        self.http
            .put(&format!("/entrenador/pasantes/{}", id), input)
            .await
    }

    pub async fn delete_pasante(&self, id: i64) -> Result<()> {
        let _: Value = self
            .http
            .delete(&format!("/entrenador/pasantes/{}", id))
            .await?;
        Ok(())
    }
}

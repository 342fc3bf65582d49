//! Intern (pasante) model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Intern assisting trainers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pasante {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub nombre: String,
    pub apellido: String,
    #[serde(default)]
    pub universidad: Option<String>,
    #[serde(default)]
    pub fecha_inicio: Option<NaiveDate>,
    #[serde(default)]
    pub fecha_fin: Option<NaiveDate>,
    #[serde(default = "super::default_true")]
    pub activo: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PasanteInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universidad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

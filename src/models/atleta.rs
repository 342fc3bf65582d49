//! Athlete and medical history models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Athlete record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atleta {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub nombre: String,
    pub apellido: String,
    #[serde(default)]
    pub cedula: Option<String>,
    #[serde(default)]
    pub fecha_nacimiento: Option<NaiveDate>,
    #[serde(default)]
    pub disciplina: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default = "super::default_true")]
    pub activo: bool,
}

/// Create/update payload for an athlete. Updates send only the set fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AtletaInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cedula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disciplina: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

/// One entry in an athlete's medical history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorialMedico {
    pub id: i64,
    pub atleta_id: i64,
    pub fecha: NaiveDate,
    pub descripcion: String,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub tratamiento: Option<String>,
    #[serde(default)]
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HistorialMedicoInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tratamiento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

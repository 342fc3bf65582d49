//! Competitions, events and recorded results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competencia {
    pub id: i64,
    pub nombre: String,
    pub fecha: NaiveDate,
    #[serde(default)]
    pub lugar: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default = "super::default_true")]
    pub activa: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CompetenciaInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lugar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activa: Option<bool>,
}

/// A competition event (e.g. 100m, long jump).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prueba {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub unidad_medida: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PruebaInput {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidad_medida: Option<String>,
}

/// Performance of an athlete in one event of a competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultadoCompetencia {
    pub id: i64,
    pub competencia_id: i64,
    pub atleta_id: i64,
    pub prueba_id: i64,
    pub valor: f64,
    #[serde(default)]
    pub unidad: Option<String>,
    #[serde(default)]
    pub posicion: Option<u32>,
    #[serde(default)]
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultadoCompetenciaInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competencia_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atleta_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prueba_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posicion: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

/// Performance recorded during a training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultadoEntrenamiento {
    pub id: i64,
    pub entrenamiento_id: i64,
    pub atleta_id: i64,
    pub fecha: NaiveDate,
    pub valor: f64,
    #[serde(default)]
    pub unidad: Option<String>,
    #[serde(default)]
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultadoEntrenamientoInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrenamiento_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atleta_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

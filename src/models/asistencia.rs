//! Attendance records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoAsistencia {
    Pendiente,
    Confirmado,
    Presente,
    Ausente,
    Justificado,
}

/// Links an athlete to one occurrence of a time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asistencia {
    pub id: i64,
    pub atleta_id: i64,
    pub horario_id: i64,
    pub fecha: NaiveDate,
    pub estado: EstadoAsistencia,
    #[serde(default)]
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AsistenciaInput {
    pub atleta_id: i64,
    pub horario_id: i64,
    pub fecha: NaiveDate,
    pub estado: EstadoAsistencia,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

/// Query filter for attendance listings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AsistenciaFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horario_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atleta_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha: Option<NaiveDate>,
}

//! Training sessions, their time slots and enrollments.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A scheduled training program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entrenamiento {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub disciplina: Option<String>,
    #[serde(default)]
    pub entrenador_id: Option<i64>,
    #[serde(default)]
    pub fecha_inicio: Option<NaiveDate>,
    #[serde(default)]
    pub fecha_fin: Option<NaiveDate>,
    #[serde(default)]
    pub horarios: Vec<Horario>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EntrenamientoInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disciplina: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<NaiveDate>,
}

/// Weekly time slot of a training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Horario {
    pub id: i64,
    pub entrenamiento_id: i64,
    pub dia_semana: String,
    pub hora_inicio: NaiveTime,
    pub hora_fin: NaiveTime,
    #[serde(default)]
    pub lugar: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HorarioInput {
    pub entrenamiento_id: i64,
    pub dia_semana: String,
    pub hora_inicio: NaiveTime,
    pub hora_fin: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lugar: Option<String>,
}

/// Athlete enrollment in a time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inscripcion {
    pub id: i64,
    pub atleta_id: i64,
    pub horario_id: i64,
    #[serde(default)]
    pub fecha_inscripcion: Option<NaiveDate>,
    #[serde(default = "super::default_true")]
    pub activa: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct InscripcionInput {
    pub atleta_id: i64,
    pub horario_id: i64,
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Transient copies of backend entities and request payloads.

pub mod asistencia;
pub mod atleta;
pub mod competencia;
pub mod entrenamiento;
pub mod listing;
pub mod pasante;
pub mod user;

pub use asistencia::{Asistencia, AsistenciaFilter, AsistenciaInput, EstadoAsistencia};
pub use atleta::{Atleta, AtletaInput, HistorialMedico, HistorialMedicoInput};
pub use competencia::{
    Competencia, CompetenciaInput, Prueba, PruebaInput, ResultadoCompetencia,
    ResultadoCompetenciaInput, ResultadoEntrenamiento, ResultadoEntrenamientoInput,
};
pub use entrenamiento::{
    Entrenamiento, EntrenamientoInput, Horario, HorarioInput, Inscripcion, InscripcionInput,
};
pub use listing::Listing;
pub use pasante::{Pasante, PasanteInput};
pub use user::{MessageResponse, PasswordChange, RegisterRequest, Role, User, UserUpdate};

/// Serde default for flags the backend may omit.
fn default_true() -> bool {
    true
}

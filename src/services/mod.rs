// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - one stateless client per backend resource.

pub mod asistencia;
pub mod atleta;
pub mod competencia;
pub mod entrenamiento;
pub mod pasante;
pub mod resultado;
pub mod users;

pub use asistencia::AsistenciaService;
pub use atleta::AtletaService;
pub use competencia::CompetenciaService;
pub use entrenamiento::EntrenamientoService;
pub use pasante::PasanteService;
pub use resultado::ResultadoEntrenamientoService;
pub use users::UserService;

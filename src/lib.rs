// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Club Admin: client for the sports-club management backend
//!
//! This crate provides the session handling, HTTP plumbing and typed
//! resource services behind the club's administrative front end
//! (athletes, trainers, competitions, attendance, medical history).

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod services;

use app::{LoginController, Navigator, RouteGuard};
use auth::{AuthSession, TokenStore};
use config::Config;
use http::HttpClient;
use services::{
    AsistenciaService, AtletaService, CompetenciaService, EntrenamientoService, PasanteService,
    ResultadoEntrenamientoService, UserService,
};
use std::sync::Arc;

/// Everything the front end talks to, sharing one token store and navigator.
#[derive(Clone)]
pub struct AdminClient {
    pub config: Config,
    pub http: HttpClient,
    pub session: AuthSession,
    pub atletas: AtletaService,
    pub entrenamientos: EntrenamientoService,
    pub asistencias: AsistenciaService,
    pub competencias: CompetenciaService,
    pub resultados_entrenamiento: ResultadoEntrenamientoService,
    pub pasantes: PasanteService,
    pub users: UserService,
}

impl AdminClient {
    pub fn new(config: Config, tokens: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        let http = HttpClient::new(config.api_base_url.clone(), tokens, navigator);

        Self {
            session: AuthSession::new(http.clone()),
            atletas: AtletaService::new(http.clone()),
            entrenamientos: EntrenamientoService::new(http.clone()),
            asistencias: AsistenciaService::new(http.clone()),
            competencias: CompetenciaService::new(http.clone()),
            resultados_entrenamiento: ResultadoEntrenamientoService::new(http.clone()),
            pasantes: PasanteService::new(http.clone()),
            users: UserService::new(http.clone()),
            http,
            config,
        }
    }

    pub fn login_controller(&self) -> LoginController {
        LoginController::new(self.session.clone())
    }

    pub fn route_guard(&self) -> RouteGuard {
        RouteGuard::new(self.session.clone())
    }
}

//! Application routes and the navigation seam.

use crate::models::Role;
use std::sync::{Mutex, PoisonError};

/// Views of the admin front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    VerifyAccount,
    TwoFactor,
    Dashboard,
    Perfil,
    Atletas,
    HistorialMedico,
    Entrenamientos,
    Asistencias,
    Competencias,
    Resultados,
    Pasantes,
    Usuarios,
    Unauthorized,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::VerifyAccount => "/verify-account",
            Route::TwoFactor => "/login/2fa",
            Route::Dashboard => "/dashboard",
            Route::Perfil => "/perfil",
            Route::Atletas => "/atletas",
            Route::HistorialMedico => "/historial-medico",
            Route::Entrenamientos => "/entrenamientos",
            Route::Asistencias => "/asistencias",
            Route::Competencias => "/competencias",
            Route::Resultados => "/resultados",
            Route::Pasantes => "/pasantes",
            Route::Usuarios => "/usuarios",
            Route::Unauthorized => "/unauthorized",
        }
    }

    /// Look up a route by its path.
    pub fn from_path(path: &str) -> Option<Route> {
        ALL_ROUTES.iter().copied().find(|r| r.path() == path)
    }

    pub fn requires_auth(self) -> bool {
        !matches!(
            self,
            Route::Login
                | Route::Register
                | Route::VerifyAccount
                | Route::TwoFactor
                | Route::Unauthorized
        )
    }

    /// Roles allowed on this route. Empty means any authenticated user.
    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            Route::Usuarios => &[Role::Administrador],
            Route::Atletas | Route::HistorialMedico | Route::Asistencias | Route::Pasantes => {
                &[Role::Administrador, Role::Entrenador]
            }
            Route::Entrenamientos | Route::Competencias | Route::Resultados => &[
                Role::Administrador,
                Role::Entrenador,
                Role::Pasante,
                Role::Atleta,
            ],
            _ => &[],
        }
    }
}

const ALL_ROUTES: [Route; 15] = [
    Route::Login,
    Route::Register,
    Route::VerifyAccount,
    Route::TwoFactor,
    Route::Dashboard,
    Route::Perfil,
    Route::Atletas,
    Route::HistorialMedico,
    Route::Entrenamientos,
    Route::Asistencias,
    Route::Competencias,
    Route::Resultados,
    Route::Pasantes,
    Route::Usuarios,
    Route::Unauthorized,
];

/// Something that can switch the visible view.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that records every navigation, newest last.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<Route>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .copied()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(path = route.path(), "Navigating");
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}

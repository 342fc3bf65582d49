//! User and account models.

use serde::{Deserialize, Serialize};

/// Account role as issued by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrador,
    Entrenador,
    Atleta,
    Pasante,
    /// Any role this client does not know about
    #[serde(other)]
    Other,
}

/// User account as returned by `/auth/*` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub apellido: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    pub role: Role,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub two_factor_enabled: bool,
}

/// Registration form payload.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub nombre: String,
    pub apellido: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Partial update of a user or profile; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// Plain `{"message": "..."}` acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

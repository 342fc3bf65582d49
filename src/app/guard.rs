// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route guarding for protected views.

use crate::app::navigation::Route;
use crate::auth::AuthSession;

/// Decides which view to show for a requested route.
#[derive(Clone)]
pub struct RouteGuard {
    session: AuthSession,
}

impl RouteGuard {
    pub fn new(session: AuthSession) -> Self {
        Self { session }
    }

    /// Route to render for `requested`.
    ///
    /// Public routes pass through. Protected routes need a session (one
    /// silent refresh is attempted); without one the user is sent to the
    /// login view. A role outside the route's allowed set yields
    /// [`Route::Unauthorized`].
    pub async fn resolve(&self, requested: Route) -> Route {
        if !requested.requires_auth() {
            return requested;
        }

        if !self.session.check_auth().await {
            tracing::info!(path = requested.path(), "No session, redirecting to login");
            self.session.navigator().navigate(Route::Login);
            return Route::Login;
        }

        let allowed = requested.allowed_roles();
        if allowed.is_empty() {
            return requested;
        }

        let role = self.session.claims().and_then(|claims| claims.role);
        match role {
            Some(role) if allowed.contains(&role) => requested,
            _ => {
                tracing::info!(path = requested.path(), ?role, "Role not allowed on route");
                Route::Unauthorized
            }
        }
    }
}

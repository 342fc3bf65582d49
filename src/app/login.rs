// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login view controller.

use crate::app::navigation::Route;
use crate::app::notify::Notice;
use crate::auth::{AuthSession, LoginOutcome};
use crate::error::ApiError;

/// Server messages that mean the account exists but is not active yet.
const INACTIVE_USER_MARKERS: &[&str] = &[
    "inactiv",
    "no verificad",
    "no ha sido verificad",
    "not verified",
    "not active",
];

/// What the login view shows after a submit.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginView {
    /// Signed in; navigation to the dashboard already happened.
    Dashboard,
    /// Ask for the authenticator code.
    TwoFactor { temp_token: String },
    /// Open the account verification modal for this email.
    VerificationRequired { email: String },
    /// Stay on the form and show the notice.
    Failed(Notice),
}

/// True if the error says the user exists but is inactive or unverified.
pub fn is_inactive_user_error(err: &ApiError) -> bool {
    err.server_message().is_some_and(|msg| {
        let msg = msg.to_lowercase();
        INACTIVE_USER_MARKERS.iter().any(|marker| msg.contains(marker))
    })
}

#[derive(Clone)]
pub struct LoginController {
    session: AuthSession,
}

impl LoginController {
    pub fn new(session: AuthSession) -> Self {
        Self { session }
    }

    pub async fn submit(&self, email: &str, password: &str) -> LoginView {
        match self.session.login(email, password).await {
            Ok(LoginOutcome::Authenticated { .. }) => {
                self.session.navigator().navigate(Route::Dashboard);
                LoginView::Dashboard
            }
            Ok(LoginOutcome::TwoFactorRequired { temp_token }) => {
                self.session.navigator().navigate(Route::TwoFactor);
                LoginView::TwoFactor { temp_token }
            }
            Err(e) if is_inactive_user_error(&e) => {
                tracing::info!("Login blocked for inactive account, prompting verification");
                LoginView::VerificationRequired {
                    email: email.to_string(),
                }
            }
            Err(e) => LoginView::Failed(Notice::from_error(&e)),
        }
    }

    /// Finish a 2FA login started by [`submit`](Self::submit).
    pub async fn submit_two_factor(&self, temp_token: &str, code: &str) -> LoginView {
        match self.session.verify_two_factor(temp_token, code).await {
            Ok(_) => {
                self.session.navigator().navigate(Route::Dashboard);
                LoginView::Dashboard
            }
            Err(e) => LoginView::Failed(Notice::from_error(&e)),
        }
    }

    /// Resend the verification email from the verification modal.
    pub async fn resend_verification(&self, email: &str) -> Notice {
        match self.session.resend_verification(email).await {
            Ok(response) if !response.message.is_empty() => Notice::success(response.message),
            Ok(_) => Notice::success("Verification email sent"),
            Err(e) => Notice::from_error(&e),
        }
    }
}

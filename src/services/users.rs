// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account administration and profile endpoints (`/auth/users/*`, `/auth/profile`).

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Listing, MessageResponse, PasswordChange, User, UserUpdate};
use serde::Serialize;

#[derive(Serialize)]
struct StatusUpdate {
    is_active: bool,
}

#[derive(Clone)]
pub struct UserService {
    http: HttpClient,
}

impl UserService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        let listing: Listing<User> = self.http.get("/auth/users").await?;
        Ok(listing.into_items())
    }

    pub async fn get_user(&self, id: i64) -> Result<User> {
        self.http.get(&format!("/auth/users/{}", id)).await
    }

    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User> {
        self.http.put(&format!("/auth/users/{}", id), update).await
    }

    /// Activate or deactivate an account.
    pub async fn set_user_active(&self, id: i64, is_active: bool) -> Result<User> {
        self.http
            .put(
                &format!("/auth/users/{}/status", id),
                &StatusUpdate { is_active },
            )
            .await
    }

    pub async fn get_profile(&self) -> Result<User> {
        self.http.get("/auth/profile").await
    }

    pub async fn update_profile(&self, update: &UserUpdate) -> Result<User> {
        self.http.put("/auth/profile", update).await
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<MessageResponse> {
        self.http.put("/auth/profile/password", change).await
    }
}

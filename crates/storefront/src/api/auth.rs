//! Auth service client: login, registration, and user role management.

use rave_core::{UserId, UserRole};
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

/// An account as the auth service returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Login credentials.
#[derive(Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload.
#[derive(Debug, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A successful login or registration: the bearer token plus the account.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
struct RoleUpdate {
    user_id: UserId,
    role: UserRole,
}

/// Client for the auth service endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the credentials are
    /// rejected.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        self.api.post("auth/login", credentials).await
    }

    /// Create an account and log it in.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the account already
    /// exists.
    pub async fn register(&self, new_user: &NewUser) -> Result<AuthSession, ApiError> {
        self.api.post("auth/register", new_user).await
    }

    /// The account the current token belongs to.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the token is invalid.
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.api.get("auth/profile").await
    }

    /// List every account (admin).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.api.get("auth/users").await
    }

    /// Change an account's role (admin).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn update_role(&self, user_id: UserId, role: UserRole) -> Result<(), ApiError> {
        self.api
            .put_no_response("auth/update-role", &RoleUpdate { user_id, role })
            .await
    }

    /// Look up an account by phone number, used by the POS to attach a
    /// walk-in sale to a known customer. `None` when no account matches.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for failures other than a missing account.
    pub async fn by_phone(&self, phone: &str) -> Result<Option<User>, ApiError> {
        match self.api.get(&format!("auth/by-phone/{phone}")).await {
            Ok(user) => Ok(Some(user)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::models::User;

use super::read_json;

/// Client for the backend's authentication endpoints. The backend proxies
/// the identity provider; this side only ever sees an opaque token.
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct GoogleLoginRequest<'a> {
    #[serde(rename = "idToken")]
    id_token: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AuthSuccess {
    pub token: String,
    pub user: User,
}

impl AuthClient {
    pub fn new(base_url: String, http: reqwest::Client) -> Self {
        Self { http, base_url }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSuccess> {
        let response = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let success: AuthSuccess = read_json(response).await?;
        info!("logged in as {}", success.user.email);
        Ok(success)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthSuccess> {
        let response = self
            .http
            .post(format!("{}/auth/register", self.base_url))
            .json(&RegisterRequest {
                name,
                email,
                password,
            })
            .send()
            .await?;
        read_json(response).await
    }

    /// Exchange a Google sign-in id token for a backend session.
    pub async fn login_with_google(&self, id_token: &str) -> Result<AuthSuccess> {
        let response = self
            .http
            .post(format!("{}/auth/google", self.base_url))
            .json(&GoogleLoginRequest { id_token })
            .send()
            .await?;
        read_json(response).await
    }
}

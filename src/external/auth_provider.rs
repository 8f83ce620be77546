use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::models::User;

/// Client for the store's bundled identity provider. Only the password
/// grant and sign-out are used; session refresh and recovery flows are the
/// provider's own business.
#[derive(Clone)]
pub struct AuthProviderClient {
    http: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
pub struct ProviderSession {
    pub access_token: String,
    pub user: ProviderUser,
}

#[derive(Debug, Deserialize)]
pub struct ProviderUser {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    #[serde(alias = "error_description", alias = "msg")]
    message: Option<String>,
}

impl ProviderUser {
    /// Maps the provider payload onto the console's user shape. Role and
    /// display name ride in the provider's free-form user metadata.
    pub fn into_user(self) -> User {
        let email = self.email.unwrap_or_default();
        let name = self
            .user_metadata
            .get("name")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| email.split('@').next().unwrap_or("user").to_string());
        let role = self
            .user_metadata
            .get("role")
            .and_then(|v| v.as_str())
            .unwrap_or("staff")
            .to_string();

        User {
            id: self.id,
            email,
            name,
            role,
        }
    }
}

impl AuthProviderClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<ProviderSession> {
        let url = format!("{}/auth/v1/token", self.base_url);
        let response = self
            .http
            .post(&url)
            .query(&[("grant_type", "password")])
            .header("apikey", &self.api_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ProviderError>(&body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| "Invalid email or password".to_string());

        if status.as_u16() == 400 || status.as_u16() == 401 {
            Err(AppError::AuthError(message))
        } else {
            Err(AppError::StoreError(format!("auth provider: {status}: {message}")))
        }
    }

    /// Best-effort provider-side session revocation.
    pub async fn sign_out(&self, access_token: &str) -> AppResult<()> {
        let url = format!("{}/auth/v1/logout", self.base_url);
        self.http
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_user_maps_metadata() {
        let user = ProviderUser {
            id: "3e9f0a1c-0000-0000-0000-000000000001".to_string(),
            email: Some("pastor@church.com".to_string()),
            user_metadata: json!({ "name": "Rev. Daniel Kwarteng", "role": "pastor" }),
        }
        .into_user();

        assert_eq!(user.name, "Rev. Daniel Kwarteng");
        assert_eq!(user.role, "pastor");
        assert_eq!(user.email, "pastor@church.com");
    }

    #[test]
    fn test_provider_user_defaults() {
        let user = ProviderUser {
            id: "id".to_string(),
            email: Some("staff@church.com".to_string()),
            user_metadata: json!({}),
        }
        .into_user();

        assert_eq!(user.name, "staff");
        assert_eq!(user.role, "staff");
    }
}

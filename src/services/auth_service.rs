use std::sync::Arc;

use log::warn;

use super::require;
use crate::config::StoreConfig;
use crate::demo::{DemoUser, demo_users};
use crate::error::{AppError, AppResult};
use crate::external::AuthProviderClient;
use crate::models::*;
use crate::storage::{StateStorage, keys};
use crate::store;
use crate::utils::{JwtService, verify_password};

/// Sign-in resolves against the store's auth provider when one is configured,
/// otherwise against the fixed demo credential table. Either way the console
/// mints its own session token; there is no refresh flow.
#[derive(Clone)]
pub struct AuthService {
    provider: Option<AuthProviderClient>,
    demo_users: Arc<Vec<DemoUser>>,
    jwt: JwtService,
    storage: Arc<dyn StateStorage>,
}

impl AuthService {
    pub fn new(store: &StoreConfig, jwt: JwtService, storage: Arc<dyn StateStorage>) -> Self {
        let provider = if store::remote_available(store) {
            Some(AuthProviderClient::new(
                store.url.trim(),
                &store.service_key,
            ))
        } else {
            None
        };
        // the credential table is only hashed when it can actually be used
        let demo_users = if provider.is_none() {
            demo_users()
        } else {
            Vec::new()
        };

        Self {
            provider,
            demo_users: Arc::new(demo_users),
            jwt,
            storage,
        }
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        require(&request.email, "email")?;
        require(&request.password, "password")?;

        let user = match &self.provider {
            Some(provider) => {
                let session = provider
                    .sign_in_with_password(request.email.trim(), &request.password)
                    .await?;
                session.user.into_user()
            }
            None => self.demo_sign_in(request.email.trim(), &request.password)?,
        };

        let access_token = self.jwt.generate_token(&user)?;
        Ok(LoginResponse {
            user,
            access_token,
            expires_in: self.jwt.expires_in(),
        })
    }

    fn demo_sign_in(&self, email: &str, password: &str) -> AppResult<User> {
        let invalid = || AppError::AuthError("Invalid email or password".to_string());

        let demo = self
            .demo_users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .ok_or_else(invalid)?;
        if !verify_password(password, &demo.password_hash)? {
            return Err(invalid());
        }

        let user = User {
            id: format!("demo-{}", demo.role),
            email: demo.email.clone(),
            name: demo.name.clone(),
            role: demo.role.clone(),
        };
        self.storage
            .set(keys::DEMO_SESSION, &serde_json::to_string(&user)?)?;
        Ok(user)
    }

    /// Sign-out never fails the request; the console session ends regardless
    /// of whether the provider or the state file cooperated.
    pub async fn logout(&self, access_token: &str) -> AppResult<()> {
        match &self.provider {
            Some(provider) => {
                if let Err(e) = provider.sign_out(access_token).await {
                    warn!("Provider sign-out failed: {}", e);
                }
            }
            None => {
                if let Err(e) = self.storage.remove(keys::DEMO_SESSION) {
                    warn!("Demo session cleanup failed: {}", e);
                }
            }
        }
        Ok(())
    }

    pub fn current_user(&self, access_token: &str) -> AppResult<User> {
        Ok(self.jwt.verify_token(access_token)?.into_user())
    }
}

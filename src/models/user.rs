use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The signed-in console user. In demo mode this comes from the fixed
/// credential table; in remote mode it is mapped from the auth provider's
/// session payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl User {
    /// The console's single access rule: the exact role, or admin.
    /// This gates what is served, it is not a security boundary.
    pub fn role_allows(&self, required: &str) -> bool {
        self.role == required || self.role == "admin"
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "admin@church.com")]
    pub email: String,
    #[schema(example = "admin123")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub user: User,
    pub access_token: String,
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> User {
        User {
            id: "u-1".to_string(),
            email: "x@church.com".to_string(),
            name: "X".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_role_allows_exact_match() {
        assert!(user("pastor").role_allows("pastor"));
        assert!(!user("staff").role_allows("pastor"));
    }

    #[test]
    fn test_admin_passes_every_gate() {
        assert!(user("admin").role_allows("pastor"));
        assert!(user("admin").role_allows("staff"));
        assert!(user("admin").role_allows("admin"));
    }
}

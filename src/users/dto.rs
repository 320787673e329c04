use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::users::repo::User;

/// Request body for registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Partial profile update. A field that is absent or JSON null keeps its
/// stored value; a supplied password is re-hashed before it is written.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// User as exposed to clients: no password material, ever.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
        }
    }
}

/// Response returned after login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Envelope used by the mutating profile routes.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub message: &'static str,
    pub user: PublicUser,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn public_user_has_no_password_field() {
        let user = User {
            id: Uuid::new_v4(),
            username: "johndoe".into(),
            email: "j@example.com".into(),
            password_hash: "$argon2id$v=19$...".into(),
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&PublicUser::from(user)).expect("serialize");
        assert!(json.contains("johndoe"));
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
    }

    #[test]
    fn null_fields_deserialize_as_absent() {
        let req: UpdateProfileRequest =
            serde_json::from_str(r#"{"username": null, "email": "new@example.com"}"#)
                .expect("deserialize");
        assert!(req.username.is_none());
        assert_eq!(req.email.as_deref(), Some("new@example.com"));
        assert!(req.password.is_none());
    }
}

use serde::{Deserialize, Serialize};

/// Backend role strings, as stored by the auth service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[serde(rename = "ROLE_USER")]
    User,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

/// Response payload of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub role: Role,
    pub name: String,
}

/// The logged-in user as held by the app shell for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub name: String,
    pub role: Role,
}

impl From<LoginResponse> for SessionUser {
    fn from(response: LoginResponse) -> Self {
        Self {
            name: response.name,
            role: response.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_decodes_backend_roles() {
        let json = r#"{"message":"Login Successful","role":"ROLE_ADMIN","name":"Ada"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(response.role.is_admin());
        let user = SessionUser::from(response);
        assert_eq!(user.name, "Ada");
    }
}

//! Request payloads for the auth endpoints. Field names follow the backend's
//! camelCase contract.

use serde::Serialize;

use crate::model::user::Role;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_uses_backend_field_names() {
        let request = RegisterRequest {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            password: "S3cret!pw".into(),
            role: Role::User,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["fullName"], "Ada Lovelace");
        assert_eq!(json["role"], "ROLE_USER");
    }

    #[test]
    fn reset_request_renames_new_password() {
        let request = ResetPasswordRequest {
            token: "tok".into(),
            new_password: "N3w!secret".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["newPassword"], "N3w!secret");
    }
}

use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api_client::{ApiClient, ApiError};

/// Login with email and password.
///
/// A 2xx answer without a token is reported as a failed login.
pub async fn login(client: &ApiClient, email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        email: email.trim().to_string(),
        password,
    };
    let response: LoginResponse = client.post_json("/login", &request).await?;
    if response.token.as_deref().map_or(true, str::is_empty) {
        return Err(ApiError::Status {
            status: 200,
            message: response
                .message
                .unwrap_or_else(|| "Invalid email or password.".to_string()),
        });
    }
    Ok(response)
}

/// Message shown on the login form for a failed attempt.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => "Invalid email or password.".to_string(),
        other => other.user_message("Invalid email or password."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_message() {
        assert_eq!(login_error_message(&ApiError::Unauthorized), "Invalid email or password.");
        let err = ApiError::from_response(422, r#"{"message":"The email field must be a valid email address."}"#);
        assert_eq!(login_error_message(&err), "The email field must be a valid email address.");
        assert_eq!(
            login_error_message(&ApiError::Transport("offline".into())),
            "Invalid email or password."
        );
    }
}

//! Auth Error Types
//!
//! Closed set of outcomes the use cases can fail with. The handler layer
//! matches on these exhaustively to pick a status code and body; anything
//! that is not a recognised domain error is an opaque server failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use kernel::{Envelope, ErrorKind};
use platform::password::PasswordHashError;
use thiserror::Error;

use crate::presentation::dto::MessageResponse;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Body of every 500 response; the cause is only logged
pub const INTERNAL_ERROR_BODY: &str = "Oops! Something went wrong.";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login attempted with an empty email
    #[error("login email can not be empty")]
    EmptyEmail,

    /// Login attempted with an empty password
    #[error("login password can not be empty")]
    EmptyPassword,

    /// No user with the given email
    #[error("user with given email is not found")]
    UserNotFound,

    /// Password does not match the stored hash
    #[error("login password is not valid")]
    InvalidPassword,

    /// Access token could not be signed with the configured key
    #[error("login private key is not valid: {0}")]
    InvalidPrivateKey(#[source] jsonwebtoken::errors::Error),

    /// Email is already registered
    #[error("user already exists")]
    UserAlreadyExists,

    /// Password hashing failed; the hasher's error is kept as-is
    #[error(transparent)]
    PasswordHashing(#[from] PasswordHashError),

    /// Any store failure other than not-found / unique violation
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::EmptyEmail | AuthError::EmptyPassword => ErrorKind::BadRequest,
            AuthError::UserNotFound | AuthError::InvalidPassword => ErrorKind::Unauthorized,
            AuthError::UserAlreadyExists => ErrorKind::UnprocessableEntity,
            AuthError::InvalidPrivateKey(_)
            | AuthError::PasswordHashing(_)
            | AuthError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Message shown to the client, `None` for server errors
    ///
    /// Unknown user and wrong password share one message so responses do
    /// not reveal whether an account exists.
    pub fn public_message(&self) -> Option<&'static str> {
        match self {
            AuthError::EmptyEmail | AuthError::EmptyPassword => {
                Some("Email and password are required.")
            }
            AuthError::UserNotFound | AuthError::InvalidPassword => Some("Invalid credentials."),
            AuthError::UserAlreadyExists => Some("User already exists. Choose different email."),
            AuthError::InvalidPrivateKey(_)
            | AuthError::PasswordHashing(_)
            | AuthError::Database(_) => None,
        }
    }

    /// Build the HTTP response, stamping `meta.server_time` with `now`
    pub fn into_response_at(self, now: DateTime<Utc>) -> Response {
        self.log();

        let kind = self.kind();
        match self.public_message() {
            Some(message) => {
                Envelope::new(kind.status_code(), MessageResponse { message }, now).into_response()
            }
            None => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        let kind = self.kind();

        if kind.is_server_error() {
            tracing::error!(kind = %kind, error = %self, "Auth request failed");
        } else if kind == ErrorKind::Unauthorized {
            tracing::warn!(kind = %kind, reason = %self, "Invalid login attempt");
        } else {
            tracing::debug!(kind = %kind, error = %self, "Auth error");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bad_key_error() -> AuthError {
        let key = jsonwebtoken::EncodingKey::from_rsa_der(b"not a key");
        let header = jsonwebtoken::Header::new(jsonwebtoken::Algorithm::RS256);
        let err = jsonwebtoken::encode(&header, &std::collections::HashMap::from([("a", "b")]), &key)
            .unwrap_err();
        AuthError::InvalidPrivateKey(err)
    }

    #[test]
    fn test_kinds() {
        assert_eq!(AuthError::EmptyEmail.kind(), ErrorKind::BadRequest);
        assert_eq!(AuthError::EmptyPassword.kind(), ErrorKind::BadRequest);
        assert_eq!(AuthError::UserNotFound.kind(), ErrorKind::Unauthorized);
        assert_eq!(AuthError::InvalidPassword.kind(), ErrorKind::Unauthorized);
        assert_eq!(AuthError::UserAlreadyExists.kind(), ErrorKind::UnprocessableEntity);
        assert_eq!(bad_key_error().kind(), ErrorKind::InternalServerError);
        assert_eq!(
            AuthError::Database(sqlx::Error::PoolTimedOut).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_not_found_and_wrong_password_are_indistinguishable() {
        assert_eq!(
            AuthError::UserNotFound.public_message(),
            AuthError::InvalidPassword.public_message()
        );
        assert_eq!(AuthError::UserNotFound.kind(), AuthError::InvalidPassword.kind());
    }

    #[test]
    fn test_server_errors_have_no_public_message() {
        assert!(bad_key_error().public_message().is_none());
        assert!(AuthError::Database(sqlx::Error::PoolTimedOut)
            .public_message()
            .is_none());
    }

    #[test]
    fn test_server_errors_are_exactly_the_opaque_ones() {
        let errors = [
            AuthError::EmptyEmail,
            AuthError::EmptyPassword,
            AuthError::UserNotFound,
            AuthError::InvalidPassword,
            AuthError::UserAlreadyExists,
            bad_key_error(),
            AuthError::PasswordHashing(PasswordHashError::TooLong(73)),
            AuthError::Database(sqlx::Error::PoolTimedOut),
        ];

        for err in errors {
            assert_eq!(
                err.kind().is_server_error(),
                err.public_message().is_none(),
                "{err}"
            );
        }
    }

    #[test]
    fn test_database_error_is_transparent() {
        let err = AuthError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_string(), sqlx::Error::PoolTimedOut.to_string());
    }

    #[tokio::test]
    async fn test_into_response_at() {
        let now = Utc.with_ymd_and_hms(2022, 10, 29, 23, 59, 59).unwrap();

        let response = AuthError::UserAlreadyExists.into_response_at(now);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = AuthError::Database(sqlx::Error::PoolTimedOut).into_response_at(now);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], INTERNAL_ERROR_BODY.as_bytes());
    }
}

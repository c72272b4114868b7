//! PostgreSQL Credential Store Gateway

use platform::password::HashedPassword;
use sqlx::PgPool;

use crate::domain::entity::user::User;
use crate::domain::repository::{UserInsertGateway, UserLookupGateway};
use crate::error::{AuthError, AuthResult};

/// SQLSTATE raised by a violated UNIQUE constraint
const UNIQUE_VIOLATION: &str = "23505";

/// `created_at` is left to the column default so the store assigns it
const INSERT_USER: &str = r#"
    INSERT INTO "user" (
        first_name,
        last_name,
        email,
        crypted_password
    ) VALUES ($1, $2, $3, $4)
"#;

/// PostgreSQL-backed credential store
#[derive(Clone)]
pub struct PgUserGateway {
    pool: PgPool,
}

impl PgUserGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserLookupGateway for PgUserGateway {
    async fn get_user_by_email(&self, email: &str) -> AuthResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                first_name,
                last_name,
                email,
                crypted_password
            FROM "user"
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(lookup_error)?;

        Ok(row.into_user())
    }
}

impl UserInsertGateway for PgUserGateway {
    async fn insert_user(&self, user: &User) -> AuthResult<()> {
        sqlx::query(INSERT_USER)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(user.crypted_password.as_str())
            .execute(&self.pool)
            .await
            .map_err(insert_error)?;

        Ok(())
    }
}

// ============================================================================
// Error classification
// ============================================================================

/// A missing row is the only lookup failure with domain meaning
fn lookup_error(err: sqlx::Error) -> AuthError {
    match err {
        sqlx::Error::RowNotFound => AuthError::UserNotFound,
        other => AuthError::Database(other),
    }
}

/// A unique violation on insert means the email is taken
fn insert_error(err: sqlx::Error) -> AuthError {
    let duplicate = match &err {
        sqlx::Error::Database(db_err) => is_unique_violation(db_err.code().as_deref()),
        _ => false,
    };

    if duplicate {
        AuthError::UserAlreadyExists
    } else {
        AuthError::Database(err)
    }
}

fn is_unique_violation(code: Option<&str>) -> bool {
    code == Some(UNIQUE_VIOLATION)
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    first_name: String,
    last_name: String,
    email: String,
    crypted_password: String,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            crypted_password: HashedPassword::from_stored(self.crypted_password),
        }
    }
}

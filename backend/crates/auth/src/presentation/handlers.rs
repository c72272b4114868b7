//! HTTP Handlers

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use jsonwebtoken::EncodingKey;
use kernel::Envelope;
use platform::clock::{Clock, SystemClock};
use platform::password::{BcryptPasswordHasher, ClearTextPassword, PasswordHasher};

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::{UserInsertGateway, UserLookupGateway};
use crate::presentation::dto::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

pub const REGISTERED_MESSAGE: &str = "User registered. Continue to login.";

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<G>
where
    G: UserLookupGateway + UserInsertGateway + Clone + Send + Sync + 'static,
{
    pub gateway: Arc<G>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub clock: Arc<dyn Clock>,
    pub signing_key: Arc<EncodingKey>,
    pub config: Arc<AuthConfig>,
}

impl<G> AuthAppState<G>
where
    G: UserLookupGateway + UserInsertGateway + Clone + Send + Sync + 'static,
{
    /// State with the bcrypt hasher and the system clock
    pub fn new(gateway: G, signing_key: EncodingKey, config: AuthConfig) -> Self {
        Self {
            gateway: Arc::new(gateway),
            hasher: Arc::new(BcryptPasswordHasher),
            clock: Arc::new(SystemClock),
            signing_key: Arc::new(signing_key),
            config: Arc::new(config),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_hasher(mut self, hasher: impl PasswordHasher + 'static) -> Self {
        self.hasher = Arc::new(hasher);
        self
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /v1/register
pub async fn register<G>(
    State(state): State<AuthAppState<G>>,
    Form(req): Form<RegisterRequest>,
) -> Response
where
    G: UserLookupGateway + UserInsertGateway + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(
        state.gateway.clone(),
        state.hasher.clone(),
        state.config.clone(),
    );

    let input = RegisterInput {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        password: ClearTextPassword::new(req.password),
    };

    match use_case.execute(input).await {
        Ok(()) => Envelope::new(
            StatusCode::CREATED.as_u16(),
            MessageResponse {
                message: REGISTERED_MESSAGE,
            },
            state.clock.now_in_utc(),
        )
        .into_response(),
        Err(e) => e.into_response_at(state.clock.now_in_utc()),
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /v1/login
pub async fn login<G>(
    State(state): State<AuthAppState<G>>,
    Form(req): Form<LoginRequest>,
) -> Response
where
    G: UserLookupGateway + UserInsertGateway + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.gateway.clone(),
        state.hasher.clone(),
        state.clock.clone(),
        state.signing_key.clone(),
        state.config.clone(),
    );

    let input = LoginInput {
        email: req.email,
        password: ClearTextPassword::new(req.password),
    };

    match use_case.execute(input).await {
        Ok(output) => Envelope::new(
            StatusCode::OK.as_u16(),
            LoginResponse {
                access_token: output.access_token,
                expires_in: output.expires_in,
                token_type: output.token_type,
            },
            state.clock.now_in_utc(),
        )
        .into_response(),
        Err(e) => e.into_response_at(state.clock.now_in_utc()),
    }
}

//! Auth Router

use axum::{Router, routing::post};

use crate::domain::repository::{UserInsertGateway, UserLookupGateway};
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any gateway implementation
pub fn auth_router<G>(state: AuthAppState<G>) -> Router
where
    G: UserLookupGateway + UserInsertGateway + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/v1/register", post(handlers::register::<G>))
        .route("/v1/login", post(handlers::login::<G>))
        .with_state(state)
}

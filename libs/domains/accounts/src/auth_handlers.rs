use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    response::Response,
    routing::{get, post},
};
use axum_helpers::{AppError, TokenClaims, TokenIssuer, ValidatedJson};

use crate::handlers::respond;
use crate::models::LoginRequest;
use crate::password::PasswordHasher;
use crate::repository::AccountRepository;
use crate::service::AuthService;

/// Sign-in and profile routes, meant to be nested under `/auth`.
///
/// `/profile` reads the claims the auth guard stores in the request
/// extensions, so the guard must run in front of this router.
pub fn router<R, H, T>(service: AuthService<R, H, T>) -> Router
where
    R: AccountRepository + ?Sized + 'static,
    H: PasswordHasher + ?Sized + 'static,
    T: TokenIssuer + ?Sized + 'static,
{
    Router::new()
        .route("/login", post(login))
        .route("/profile", get(profile))
        .with_state(service)
}

/// POST /auth/login
async fn login<R, H, T>(
    State(service): State<AuthService<R, H, T>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> Result<Response, AppError>
where
    R: AccountRepository + ?Sized,
    H: PasswordHasher + ?Sized,
    T: TokenIssuer + ?Sized,
{
    let outcome = service.sign_in(&input.email, &input.password).await?;
    respond(outcome, StatusCode::OK)
}

/// GET /auth/profile
async fn profile(Extension(claims): Extension<TokenClaims>) -> Json<TokenClaims> {
    Json(claims)
}

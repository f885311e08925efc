use super::jwt::TokenIssuer;
use super::public::PublicRoutes;
use crate::errors::AppError;
use axum::{
    extract::{MatchedPath, Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Message sent with every rejected request. Sub-causes are only logged.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// State of the [`auth_guard`] middleware.
#[derive(Clone)]
pub struct AuthGuard {
    tokens: Arc<dyn TokenIssuer>,
    public: Arc<PublicRoutes>,
}

impl AuthGuard {
    pub fn new(tokens: Arc<dyn TokenIssuer>, public: PublicRoutes) -> Self {
        Self {
            tokens,
            public: Arc::new(public),
        }
    }
}

/// Why a request carried no usable bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearerError {
    Missing,
    NotUtf8,
    WrongScheme,
    Empty,
}

/// Extracts the token from `Authorization: Bearer <token>`.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::NotUtf8)?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or(BearerError::WrongScheme)?
        .trim();

    if token.is_empty() {
        return Err(BearerError::Empty);
    }
    Ok(token)
}

/// Global authentication guard.
///
/// Install it with `route_layer` on the fully assembled router so unknown
/// paths fall through to the 404 fallback instead of a 401:
/// - routes registered in [`PublicRoutes`] pass through untouched
/// - everything else needs a bearer token that verifies; its
///   [`TokenClaims`](super::jwt::TokenClaims) are inserted into the request
///   extensions
/// - any failure is a 401 with the same body
///
/// ```ignore
/// let guard = AuthGuard::new(Arc::new(jwt_auth), public_routes);
/// let app = routes.route_layer(middleware::from_fn_with_state(guard, auth_guard));
/// ```
pub async fn auth_guard(
    State(guard): State<AuthGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_owned();
    let template = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str());

    // Behind `nest` the outer template is a wildcard, so the concrete path
    // is checked as well.
    let public = guard.public.is_public(request.method(), &path)
        || template.is_some_and(|template| guard.public.is_public(request.method(), template));

    if public {
        return Ok(next.run(request).await);
    }

    let token = extract_bearer_token(request.headers()).map_err(|reason| {
        tracing::debug!(?reason, %path, "Rejected request without bearer token");
        unauthorized()
    })?;

    let claims = guard.tokens.verify(token).map_err(|e| {
        tracing::debug!(error = %e, %path, "Rejected request with invalid token");
        unauthorized()
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

fn unauthorized() -> AppError {
    AppError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string())
}

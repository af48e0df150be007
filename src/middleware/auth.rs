use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::models::CurrentUser;
use crate::services::AuthService;
use crate::AppState;

/// Authentication middleware
/// Extracts and validates JWT from Authorization header
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = AuthService::bearer_token(request.headers())?;
    let user_id = AuthService::validate_token(token, &state.config.jwt)?;

    // Insert current user into request extensions
    request.extensions_mut().insert(CurrentUser { id: user_id });

    Ok(next.run(request).await)
}

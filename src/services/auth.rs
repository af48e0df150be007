use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::error::{AppError, Result};
use crate::models::Claims;

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Extract the bearer token from the Authorization header
    pub fn bearer_token(headers: &HeaderMap) -> Result<&str> {
        let value = headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::MissingCredential("no Authorization header".to_string()))?
            .to_str()
            .map_err(|_| AppError::MissingCredential("Authorization header is not text".to_string()))?;

        let token = value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .ok_or_else(|| AppError::MissingCredential("Authorization scheme is not Bearer".to_string()))?;

        if token.is_empty() {
            return Err(AppError::MissingCredential("empty bearer token".to_string()));
        }

        Ok(token)
    }

    /// Validate access token and return the caller's user id
    pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Uuid> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_issuer(&[config.issuer.as_str()]);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.secret.as_bytes()),
            &validation,
        )?;

        Uuid::parse_str(&token_data.claims.sub)
            .map_err(|_| AppError::InvalidCredential(ErrorKind::InvalidSubject.into()))
    }

    /// Mint an access token for `user_id`
    #[cfg(test)]
    pub fn issue_token(user_id: &str, config: &JwtConfig, expires_in: chrono::Duration) -> String {
        use jsonwebtoken::{encode, EncodingKey, Header};

        let now = chrono::Utc::now();
        let claims = Claims {
            iss: config.issuer.clone(),
            sub: user_id.to_string(),
            exp: (now + expires_in).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encode test token")
    }
}

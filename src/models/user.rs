use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current authenticated user (extracted from JWT)
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
}

/// JWT Claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: String, // user id
    pub exp: usize,  // expiration time
    pub iat: usize,  // issued at
}

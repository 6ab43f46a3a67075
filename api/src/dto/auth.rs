use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// Login request body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login payload, shared by REST and GraphQL
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
pub struct AuthPayload {
    /// Signed bearer token with a 1-hour expiry
    pub token: String,
}

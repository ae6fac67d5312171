use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

/// Accepts any token that is a bare user id. Keeps route tests free of JWT secrets.
pub struct StubTokenProvider;

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        Ok(user_id.to_string())
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let sub = Uuid::parse_str(token).map_err(|_| TokenError::MalformedToken)?;
        let now = chrono::Utc::now().timestamp();
        Ok(TokenClaims {
            sub,
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: "access".to_string(),
        })
    }
}

pub fn stub_token_provider() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(Arc::new(StubTokenProvider) as Arc<dyn TokenProvider + Send + Sync>)
}

pub fn bearer(user_id: Uuid) -> (&'static str, String) {
    ("Authorization", format!("Bearer {user_id}"))
}

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::{Caller, Role, UserId},
    ports::{incoming::use_cases::ResolveCallerError, outgoing::TokenProvider},
};
use crate::shared::api::AppError;
use crate::AppState;

pub const NO_TOKEN_MESSAGE: &str = "Access denied. No token provided.";
pub const INVALID_TOKEN_MESSAGE: &str = "Token is not valid";
pub const INSUFFICIENT_ROLE_MESSAGE: &str = "Access denied. Insufficient permissions.";

/// The caller behind a valid bearer token, re-read from the store on every request.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
    pub is_verified: bool,
}

impl AuthenticatedUser {
    /// Role gate. Admins pass every gate.
    pub fn authorize(&self, allowed: &[Role]) -> Result<(), AppError> {
        if self.role.permits(allowed) {
            Ok(())
        } else {
            tracing::debug!(user_id = %self.user_id, role = %self.role, "Role gate refused");
            Err(AppError::forbidden(INSUFFICIENT_ROLE_MESSAGE))
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn caller(&self) -> Caller {
        Caller {
            user_id: self.user_id,
            role: self.role,
            is_verified: self.is_verified,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = req
            .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
            .cloned();
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let (Some(token_provider), Some(state)) = (token_provider, state) else {
                return Err(AppError::internal("Authentication services are not registered"));
            };

            let token = token.ok_or_else(|| AppError::unauthenticated(NO_TOKEN_MESSAGE))?;

            let claims = token_provider.verify_token(&token).map_err(|e| {
                tracing::debug!(error = %e, "Rejected bearer token");
                AppError::unauthenticated(INVALID_TOKEN_MESSAGE)
            })?;

            let caller = state
                .auth
                .resolve_caller
                .execute(UserId::from(claims.sub))
                .await
                .map_err(|e| match e {
                    ResolveCallerError::UnknownAccount => {
                        AppError::unauthenticated(INVALID_TOKEN_MESSAGE)
                    }
                    ResolveCallerError::QueryError(detail) => AppError::internal(detail),
                })?;

            Ok(AuthenticatedUser {
                user_id: caller.user_id,
                role: caller.role,
                is_verified: caller.is_verified,
            })
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

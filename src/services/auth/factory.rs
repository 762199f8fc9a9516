/// Factory: build `AuthService` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{AccessJwtError, AuthService};

pub fn build_auth_service(config: &Config) -> Result<Arc<AuthService>, AccessJwtError> {
    let auth = AuthService::new(&config.auth).inspect_err(|e| {
        tracing::error!(
            error = %e,
            algorithm = ?config.auth.algorithm,
            "failed to build access token verifier"
        );
    })?;

    Ok(Arc::new(auth))
}

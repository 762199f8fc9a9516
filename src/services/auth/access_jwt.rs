use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::{error::Error as StdError, fmt};

use crate::config::AuthConfig;

// Errors returned by access-token verification + required claim checks.
#[derive(Debug)]
pub enum AccessJwtError {
    InvalidKey(jsonwebtoken::errors::Error),
    Jwt(jsonwebtoken::errors::Error),
    MissingClaim(&'static str),
}

impl fmt::Display for AccessJwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey(e) => write!(f, "invalid verification key: {}", e),
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::MissingClaim(name) => write!(f, "missing '{}' claim", name),
        }
    }
}

impl StdError for AccessJwtError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::InvalidKey(e) | Self::Jwt(e) => Some(e),
            Self::MissingClaim(_) => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AccessJwtError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// Access token (JWT) claims this service reads.
///
/// Both are optional at the serde level so that a missing claim is reported
/// as `MissingClaim` instead of a decode error. An explicit `null` is treated
/// as missing.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

/// AuthService が返す「検証済み・アプリ側で使う型」
///
/// - 署名検証に成功し、かつ `sub` / `id` が揃っている場合にのみ作られる
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedAccessToken {
    pub username: String,
    pub user_id: i64,
}

/// Access-token verifier built once at startup from `AuthConfig`.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AuthService {
    pub fn new(config: &AuthConfig) -> Result<Self, AccessJwtError> {
        let decoding_key = decoding_key(config.algorithm, &config.secret_key)
            .map_err(AccessJwtError::InvalidKey)?;

        let mut validation = Validation::new(config.algorithm);
        // `exp` is only mandatory when configured; otherwise it is checked if present.
        validation.required_spec_claims.clear();
        validation.validate_exp = config.validate_exp;
        validation.validate_nbf = config.validate_nbf;
        validation.leeway = config.leeway_seconds;
        if config.require_exp {
            validation.required_spec_claims.insert("exp".to_string());
        }
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
            validation.required_spec_claims.insert("iss".to_string());
        }
        if let Some(audience) = &config.audience {
            validation.set_audience(&[audience]);
            validation.required_spec_claims.insert("aud".to_string());
        }

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    /// Verify and decode a JWT access token, then require `sub` and `id`.
    ///
    /// `jsonwebtoken::Validation` checks the signature, the algorithm, and
    /// `exp`/`nbf`/`iss`/`aud` as configured.
    pub fn verify(&self, token: &str) -> Result<VerifiedAccessToken, AccessJwtError> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;

        let username = data.claims.sub.ok_or(AccessJwtError::MissingClaim("sub"))?;
        let user_id = data.claims.id.ok_or(AccessJwtError::MissingClaim("id"))?;

        Ok(VerifiedAccessToken { username, user_id })
    }
}

// HS* verifies with the raw secret; the other families expect a PEM public key.
fn decoding_key(
    algorithm: Algorithm,
    secret: &str,
) -> Result<DecodingKey, jsonwebtoken::errors::Error> {
    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
            Ok(DecodingKey::from_secret(secret.as_bytes()))
        }
        Algorithm::RS256
        | Algorithm::RS384
        | Algorithm::RS512
        | Algorithm::PS256
        | Algorithm::PS384
        | Algorithm::PS512 => DecodingKey::from_rsa_pem(secret.as_bytes()),
        Algorithm::ES256 | Algorithm::ES384 => DecodingKey::from_ec_pem(secret.as_bytes()),
        Algorithm::EdDSA => DecodingKey::from_ed_pem(secret.as_bytes()),
    }
}

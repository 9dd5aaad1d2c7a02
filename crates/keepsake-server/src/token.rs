//! LiveKit access-token builder and JWT handling.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default token lifetime applied when none is set.
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 6 * 60 * 60;

/// Errors returned by token issuance and validation.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing the token failed.
    #[error("token creation failed: {0}")]
    CreationError(String),
    /// Decoding or validating a token failed.
    #[error("token validation failed: {0}")]
    ValidationError(String),
    /// No identity was set before signing.
    #[error("token has no identity")]
    MissingIdentity,
}

/// Video grants embedded in a room access token.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoGrants {
    /// Allow joining the named room.
    pub room_join: bool,
    /// Room name the grant applies to.
    pub room: String,
    /// Allow publishing tracks.
    pub can_publish: bool,
    /// Allow subscribing to tracks.
    pub can_subscribe: bool,
    /// Hide the participant from others.
    pub hidden: bool,
    /// Mark the participant as a recorder.
    pub recorder: bool,
}

/// Signed claim set for a room access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer, the API key.
    pub iss: String,
    /// Subject, the participant identity.
    pub sub: String,
    /// Display name for the participant.
    #[serde(default)]
    pub name: String,
    /// Not-before timestamp.
    pub nbf: i64,
    /// Expiry timestamp.
    pub exp: i64,
    /// Token id, mirroring the identity.
    #[serde(default)]
    pub jti: String,
    /// Video grants for the room.
    #[serde(default)]
    pub video: VideoGrants,
}

/// Builder for signed room access credentials.
///
/// Pure function over its inputs and the API key pair; holds no state beyond
/// what it signs.
#[derive(Debug, Clone)]
pub struct AccessToken {
    api_key: String,
    api_secret: String,
    identity: Option<String>,
    name: Option<String>,
    grants: VideoGrants,
    ttl: Duration,
}

impl AccessToken {
    /// Create a token builder for an API key pair.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            identity: None,
            name: None,
            grants: VideoGrants::default(),
            ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECONDS),
        }
    }

    /// Set the participant identity.
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Set the participant display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the video grants.
    pub fn with_grants(mut self, grants: VideoGrants) -> Self {
        self.grants = grants;
        self
    }

    /// Override the token lifetime.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Sign the token and return the JWT string.
    pub fn to_jwt(&self) -> Result<String, TokenError> {
        let identity = self.identity.as_ref().ok_or(TokenError::MissingIdentity)?;
        let now = Utc::now();
        let claims = Claims {
            iss: self.api_key.clone(),
            sub: identity.clone(),
            name: self.name.clone().unwrap_or_default(),
            nbf: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            jti: identity.clone(),
            video: self.grants.clone(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.api_secret.as_bytes()),
        )
        .map_err(|err| TokenError::CreationError(err.to_string()))
    }
}

/// Decode and validate a token, returning its claims.
pub fn decode_claims(token: &str, api_secret: &str) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(api_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|err| TokenError::ValidationError(err.to_string()))
}

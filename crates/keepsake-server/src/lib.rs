//! Room access-token issuance and its HTTP surface.

pub mod http;
pub mod token;

pub use http::{TokenState, router, serve, token_routes};
pub use token::{AccessToken, Claims, TokenError, VideoGrants, decode_claims};

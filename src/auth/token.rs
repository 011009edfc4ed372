//! OAuth bearer tokens.
//!
//! This module provides [`Token`], the cached credential attached to every
//! API request, and [`TokenResponse`], the JSON body returned by the token
//! endpoint.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The JSON body returned by the OAuth token endpoint.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// The access token value.
    pub access_token: String,
    /// The token type, normally `Bearer`.
    pub token_type: String,
    /// Lifetime of the token in seconds.
    pub expires_in: i64,
    /// The granted scopes, space separated.
    #[serde(default)]
    pub scope: String,
    /// Refresh token, only issued by the password flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"*****")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

/// An access token together with the instant it was issued.
///
/// Tokens are immutable. A refreshed token replaces the previous one
/// wholesale; nothing ever mutates a token in place.
///
/// # Example
///
/// ```rust
/// use commercetools_api::Token;
/// use chrono::{Duration, Utc};
///
/// let token = Token::new("abc", "Bearer", 3600, "manage_project:foo", Utc::now());
/// assert!(!token.is_expired());
/// assert_eq!(token.authorization_header(), "Bearer abc");
///
/// let stale = Token::new("abc", "Bearer", 60, "manage_project:foo", Utc::now() - Duration::hours(1));
/// assert!(stale.is_expired());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    access_token: String,
    token_type: String,
    expires_in: i64,
    scope: String,
    refresh_token: Option<String>,
    issued_at: DateTime<Utc>,
}

impl Token {
    /// Creates a token issued at `issued_at`.
    #[must_use]
    pub fn new(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        expires_in: i64,
        scope: impl Into<String>,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
            expires_in,
            scope: scope.into(),
            refresh_token: None,
            issued_at,
        }
    }

    /// Creates a token from a token endpoint response received at `issued_at`.
    #[must_use]
    pub fn from_response(response: TokenResponse, issued_at: DateTime<Utc>) -> Self {
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            expires_in: response.expires_in,
            scope: response.scope,
            refresh_token: response.refresh_token,
            issued_at,
        }
    }

    /// Returns the access token value.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the token type (normally `Bearer`).
    #[must_use]
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Returns the lifetime in seconds.
    #[must_use]
    pub const fn expires_in(&self) -> i64 {
        self.expires_in
    }

    /// Returns the granted scopes.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Returns the refresh token, if one was issued.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Returns when the token was issued.
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Returns the instant after which the token is no longer valid.
    ///
    /// A lifetime beyond the representable range saturates at
    /// [`DateTime::<Utc>::MAX_UTC`] (or `MIN_UTC` when negative).
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        Duration::try_seconds(self.expires_in)
            .and_then(|lifetime| self.issued_at.checked_add_signed(lifetime))
            .unwrap_or(if self.expires_in < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            })
    }

    /// Returns `true` once `issued_at + expires_in` has been reached.
    ///
    /// No clock-skew margin is applied.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Returns `true` if the token is expired at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    /// Returns the `Authorization` header value (`<tokenType> <accessToken>`).
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"*****")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .field("issued_at", &self.issued_at)
            .finish_non_exhaustive()
    }
}

// Verify Token is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Token>();
};

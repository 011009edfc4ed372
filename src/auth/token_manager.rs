//! Token acquisition and caching.
//!
//! [`TokenManager`] owns the single cached [`Token`] of a client. Tokens are
//! fetched lazily: the first call that needs one, or the first call after the
//! cached token expired, requests a new one through the client credentials
//! grant. There is no background refresh.
//!
//! # Concurrency
//!
//! The cached token is only ever replaced wholesale, so readers never see a
//! partially written token. Fetching is not deduplicated: two callers that
//! both observe an expired token will both request a new one. On write-back
//! a fetched token only replaces a cached token that is absent or older, so
//! the newest token wins and a late, older write cannot clobber it.

use std::sync::{Arc, PoisonError, RwLock};

use base64::prelude::*;
use chrono::Utc;

use crate::auth::token::{Token, TokenResponse};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::Configuration;
use crate::rest::Response;

/// Caches the bearer token of a client and fetches new ones on demand.
///
/// # Thread Safety
///
/// `TokenManager` is `Send + Sync`; share it across tasks through the
/// [`Client`](crate::clients::Client) that owns it.
#[derive(Debug, Default)]
pub struct TokenManager {
    cached: RwLock<Option<Arc<Token>>>,
}

// Verify TokenManager is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenManager>();
};

impl TokenManager {
    /// Creates a manager with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached token, expired or not.
    #[must_use]
    pub fn current(&self) -> Option<Arc<Token>> {
        self.cached
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the cached token unconditionally.
    pub fn store(&self, token: Token) {
        *self.cached.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(token));
    }

    /// Drops the cached token.
    pub fn clear(&self) {
        *self.cached.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Returns a valid token, fetching a new one if the cache is empty or stale.
    ///
    /// Returns `None` if a token could not be obtained. The failure is logged
    /// and the stale token, if any, is dropped from the cache.
    pub async fn ensure_token(
        &self,
        http: &HttpClient,
        config: &Configuration,
    ) -> Option<Arc<Token>> {
        if let Some(token) = self.current() {
            if !token.is_expired() {
                return Some(token);
            }
            tracing::debug!(expired_at = %token.expires_at(), "Cached token expired");
        }

        let outcome = self.request_token(http, config).await;
        let token = match outcome {
            Ok(response) if response.success => response.result,
            Ok(response) => {
                tracing::warn!(
                    status = response.status_code,
                    errors = ?response.errors,
                    "Token request was rejected"
                );
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Token request failed");
                None
            }
        };

        match token {
            Some(token) => Some(self.store_if_stale(token)),
            None => {
                self.clear_if_expired();
                None
            }
        }
    }

    /// Requests a new token through the client credentials grant.
    ///
    /// The cache is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failures or if a successful token
    /// response cannot be decoded.
    pub async fn request_token(
        &self,
        http: &HttpClient,
        config: &Configuration,
    ) -> Result<Response<Token>, HttpError> {
        let scope = config.scope_string();
        let form = [
            ("grant_type", "client_credentials"),
            ("scope", scope.as_str()),
        ];
        Self::send_token_request(http, config, &form).await
    }

    /// Exchanges a refresh token for a new access token.
    ///
    /// The cache is left untouched; pass the result to [`store`](Self::store)
    /// to use it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failures or if a successful token
    /// response cannot be decoded.
    pub async fn refresh_token(
        &self,
        http: &HttpClient,
        config: &Configuration,
        refresh_token: &str,
    ) -> Result<Response<Token>, HttpError> {
        let form = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ];
        Self::send_token_request(http, config, &form).await
    }

    async fn send_token_request(
        http: &HttpClient,
        config: &Configuration,
        form: &[(&str, &str)],
    ) -> Result<Response<Token>, HttpError> {
        let credentials = format!(
            "{}:{}",
            config.client_id().as_ref(),
            config.client_secret().as_ref()
        );
        let request = HttpRequest::builder(HttpMethod::Post, config.oauth_url().as_ref())
            .form(form)
            .header(
                "Authorization",
                format!("Basic {}", BASE64_STANDARD.encode(credentials)),
            )
            .build()?;

        let issued_at = Utc::now();
        let http_response = http.execute(request).await?;
        let response = Response::<TokenResponse>::from_http(http_response)?;

        Ok(response.map(|body| Token::from_response(body, issued_at)))
    }

    fn store_if_stale(&self, fetched: Token) -> Arc<Token> {
        let mut cached = self.cached.write().unwrap_or_else(PoisonError::into_inner);
        match cached.as_ref() {
            Some(current) if current.issued_at() > fetched.issued_at() => {
                tracing::debug!("A newer token was cached concurrently, keeping it");
                Arc::clone(current)
            }
            _ => {
                let fetched = Arc::new(fetched);
                tracing::debug!(expires_at = %fetched.expires_at(), "Cached new token");
                *cached = Some(Arc::clone(&fetched));
                fetched
            }
        }
    }

    fn clear_if_expired(&self) {
        let mut cached = self.cached.write().unwrap_or_else(PoisonError::into_inner);
        if cached.as_ref().is_some_and(|token| token.is_expired()) {
            *cached = None;
        }
    }
}

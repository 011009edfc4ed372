//! Authentication types for the commercetools API client.
//!
//! This module provides the OAuth scopes a client requests, the bearer
//! [`Token`] attached to every API call, and the [`TokenManager`] that
//! fetches and caches it.
//!
//! # Overview
//!
//! - [`ProjectScope`]: A named project scope such as `manage_products`
//! - [`Scopes`]: One scope, a set of scopes, or a raw scope string
//! - [`Token`]: An access token and the instant it was issued
//! - [`TokenResponse`]: The token endpoint's JSON body
//! - [`TokenManager`]: Client credentials flow with a single-slot cache
//!
//! # Token Lifecycle
//!
//! A token is fetched on the first authenticated call and reused until
//! `issued_at + expires_in` has passed. The next call after that fetches a
//! replacement. If no token can be obtained, the call fails with a
//! `no_token` error and nothing is sent to the API.
//!
//! # Example
//!
//! ```rust
//! use commercetools_api::{ProjectKey, ProjectScope, Scopes, Token};
//! use chrono::Utc;
//!
//! let key = ProjectKey::new("my-project").unwrap();
//! let scopes = Scopes::from_iter([ProjectScope::ViewOrders, ProjectScope::ManageCustomers]);
//! assert_eq!(
//!     scopes.to_scope_string(&key),
//!     "manage_customers:my-project view_orders:my-project"
//! );
//!
//! let token = Token::new("abc", "Bearer", 172_800, "manage_project:my-project", Utc::now());
//! assert!(!token.is_expired());
//! ```

mod scopes;
mod token;
mod token_manager;

pub use scopes::{ProjectScope, Scopes};
pub use token::{Token, TokenResponse};
pub use token_manager::TokenManager;

//! REST layer of the commercetools API.
//!
//! This module provides:
//!
//! - **[`Response<T>`]**: The uniform result of every call, carrying either
//!   the decoded body or the API's error messages
//! - **[`QueryParams`]**: Predicates, sorting, paging and reference expansion
//! - **Update actions**: [`UpdateAction`], [`TypedAction`], [`GenericAction`]
//!   and the [`UpdateRequest`] that encodes them
//! - **[`Resource`] and [`UpdatableResource`]**: CRUD operations shared by all
//!   resources
//! - **[`resources`]**: The resource types themselves
//!
//! # Example
//!
//! ```rust,ignore
//! use commercetools_api::rest::{Resource, UpdatableResource, UpdateRequest};
//! use commercetools_api::rest::resources::{CustomerGroup, SetKeyAction};
//!
//! let response = CustomerGroup::get_by_id(&client, "4e5e3b5a").await?;
//! if let Some(group) = response.result {
//!     let request = UpdateRequest::new(group.version)
//!         .action(SetKeyAction::new(Some("vip".to_string())));
//!     CustomerGroup::update(&client, &group.id, &request).await?;
//! } else {
//!     for error in &response.errors {
//!         eprintln!("{}: {}", error.code, error.message);
//!     }
//! }
//! ```

mod actions;
mod query;
pub(crate) mod resource;
mod response;

pub mod resources;

pub use actions::{
    encode, validate, GenericAction, TypedAction, UpdateAction, UpdateRequest, ACTION_FIELD,
};
pub use query::{expand_pairs, QueryParams};
pub use resource::{Resource, UpdatableResource};
pub use response::{ErrorMessage, PagedQueryResult, Response, NO_TOKEN_CODE};

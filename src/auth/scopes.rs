//! OAuth scope handling for the commercetools API.
//!
//! This module provides [`ProjectScope`], the named scopes an API client can
//! be granted, and [`Scopes`], which accepts any of the three forms a
//! configuration may carry (a single named scope, a set of named scopes, or a
//! raw space-separated string) and renders the wire string sent to the token
//! endpoint.

use crate::config::ProjectKey;
use crate::error::ConfigError;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A named project scope.
///
/// Each scope is rendered on the wire as `<name>:<projectKey>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProjectScope {
    /// `manage_project`: full access to the project.
    ManageProject,
    /// `view_project`
    ViewProject,
    /// `manage_products`
    ManageProducts,
    /// `view_products`
    ViewProducts,
    /// `manage_orders`
    ManageOrders,
    /// `view_orders`
    ViewOrders,
    /// `manage_customers`
    ManageCustomers,
    /// `view_customers`
    ViewCustomers,
    /// `manage_payments`
    ManagePayments,
    /// `view_payments`
    ViewPayments,
    /// `manage_shipping_methods`
    ManageShippingMethods,
    /// `view_shipping_methods`
    ViewShippingMethods,
    /// `manage_my_orders`
    ManageMyOrders,
    /// `manage_my_profile`
    ManageMyProfile,
    /// `create_anonymous_token`
    CreateAnonymousToken,
}

impl ProjectScope {
    const ALL: [Self; 15] = [
        Self::ManageProject,
        Self::ViewProject,
        Self::ManageProducts,
        Self::ViewProducts,
        Self::ManageOrders,
        Self::ViewOrders,
        Self::ManageCustomers,
        Self::ViewCustomers,
        Self::ManagePayments,
        Self::ViewPayments,
        Self::ManageShippingMethods,
        Self::ViewShippingMethods,
        Self::ManageMyOrders,
        Self::ManageMyProfile,
        Self::CreateAnonymousToken,
    ];

    /// Returns the wire name of this scope (without the project key).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ManageProject => "manage_project",
            Self::ViewProject => "view_project",
            Self::ManageProducts => "manage_products",
            Self::ViewProducts => "view_products",
            Self::ManageOrders => "manage_orders",
            Self::ViewOrders => "view_orders",
            Self::ManageCustomers => "manage_customers",
            Self::ViewCustomers => "view_customers",
            Self::ManagePayments => "manage_payments",
            Self::ViewPayments => "view_payments",
            Self::ManageShippingMethods => "manage_shipping_methods",
            Self::ViewShippingMethods => "view_shipping_methods",
            Self::ManageMyOrders => "manage_my_orders",
            Self::ManageMyProfile => "manage_my_profile",
            Self::CreateAnonymousToken => "create_anonymous_token",
        }
    }

    /// Renders this scope for the given project (`manage_project:foo`).
    #[must_use]
    pub fn for_project(&self, project_key: &ProjectKey) -> String {
        format!("{}:{}", self.as_str(), project_key)
    }
}

impl fmt::Display for ProjectScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectScope {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidScope {
                reason: format!("Unknown project scope '{s}'"),
            })
    }
}

/// The scopes requested when acquiring a token.
///
/// # Example
///
/// ```rust
/// use commercetools_api::{ProjectKey, ProjectScope, Scopes};
///
/// let key = ProjectKey::new("foo").unwrap();
///
/// let single = Scopes::from(ProjectScope::ManageProducts);
/// assert_eq!(single.to_scope_string(&key), "manage_products:foo");
///
/// let set = Scopes::from_iter([ProjectScope::ManageProducts, ProjectScope::ManageCustomers]);
/// assert_eq!(set.to_scope_string(&key), "manage_customers:foo manage_products:foo");
///
/// let raw: Scopes = "manage_customers:foo view_orders".parse().unwrap();
/// assert_eq!(raw.to_scope_string(&key), "manage_customers:foo view_orders:foo");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scopes {
    /// One or more named scopes.
    Named(BTreeSet<ProjectScope>),
    /// A raw, space-separated scope string.
    Raw(Vec<String>),
}

impl Scopes {
    /// Renders the space-separated wire string for the given project.
    ///
    /// Named scopes are sorted by their wire representation. Raw tokens that
    /// already carry a `:` are kept verbatim, bare tokens get `:<projectKey>`
    /// appended.
    #[must_use]
    pub fn to_scope_string(&self, project_key: &ProjectKey) -> String {
        match self {
            Self::Named(scopes) => {
                let mut rendered: Vec<String> =
                    scopes.iter().map(|s| s.for_project(project_key)).collect();
                rendered.sort_unstable();
                rendered.join(" ")
            }
            Self::Raw(tokens) => tokens
                .iter()
                .map(|token| {
                    if token.contains(':') {
                        token.clone()
                    } else {
                        format!("{token}:{project_key}")
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Returns the first named scope, if this is a named scope set.
    #[must_use]
    pub fn primary(&self) -> Option<ProjectScope> {
        match self {
            Self::Named(scopes) => scopes.iter().next().copied(),
            Self::Raw(_) => None,
        }
    }
}

impl Default for Scopes {
    fn default() -> Self {
        Self::from(ProjectScope::ManageProject)
    }
}

impl From<ProjectScope> for Scopes {
    fn from(scope: ProjectScope) -> Self {
        Self::Named(BTreeSet::from([scope]))
    }
}

impl FromIterator<ProjectScope> for Scopes {
    fn from_iter<I: IntoIterator<Item = ProjectScope>>(iter: I) -> Self {
        Self::Named(iter.into_iter().collect())
    }
}

impl FromStr for Scopes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<String> = s.split_whitespace().map(str::to_string).collect();
        if tokens.is_empty() {
            return Err(ConfigError::InvalidScope {
                reason: "Scope string cannot be empty".to_string(),
            });
        }

        let valid = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':');
        if let Some(bad) = tokens.iter().find(|t| !t.chars().all(valid)) {
            return Err(ConfigError::InvalidScope {
                reason: format!("Invalid characters in scope: '{bad}'"),
            });
        }

        Ok(Self::Raw(tokens))
    }
}

//! Query parameters for resource queries and reads.

/// Query string parameters understood by the resource endpoints.
///
/// Parameters are rendered in a fixed order (`where`, `sort`, `limit`,
/// `offset`, `expand`, `withTotal`). Repeated parameters are sent once per
/// value.
///
/// # Example
///
/// ```rust
/// use commercetools_api::rest::QueryParams;
///
/// let params = QueryParams::new()
///     .where_predicate(r#"key = "vip""#)
///     .sort("createdAt desc")
///     .limit(20)
///     .expand("customerGroup")
///     .expand("shippingInfo.shippingMethod");
///
/// let pairs = params.to_pairs();
/// assert_eq!(pairs[0], ("where".to_string(), r#"key = "vip""#.to_string()));
/// assert_eq!(pairs.iter().filter(|(k, _)| k == "expand").count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    where_predicates: Vec<String>,
    sort: Vec<String>,
    limit: Option<u32>,
    offset: Option<u32>,
    expand: Vec<String>,
    with_total: Option<bool>,
}

impl QueryParams {
    /// Creates empty query parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `where` predicate.
    #[must_use]
    pub fn where_predicate(mut self, predicate: impl Into<String>) -> Self {
        self.where_predicates.push(predicate.into());
        self
    }

    /// Adds a `sort` expression.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort.push(sort.into());
        self
    }

    /// Sets the page size. `0` means "server default" and is not sent.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the page offset.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Adds a reference expansion path.
    #[must_use]
    pub fn expand(mut self, path: impl Into<String>) -> Self {
        self.expand.push(path.into());
        self
    }

    /// Requests (or suppresses) the `total` field of a paged result.
    #[must_use]
    pub const fn with_total(mut self, with_total: bool) -> Self {
        self.with_total = Some(with_total);
        self
    }

    /// Renders the parameters as ordered key/value pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for predicate in &self.where_predicates {
            pairs.push(("where".to_string(), predicate.clone()));
        }
        for sort in &self.sort {
            pairs.push(("sort".to_string(), sort.clone()));
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_string(), offset.to_string()));
        }
        for path in &self.expand {
            pairs.push(("expand".to_string(), path.clone()));
        }
        if let Some(with_total) = self.with_total {
            pairs.push(("withTotal".to_string(), with_total.to_string()));
        }
        pairs
    }
}

/// Renders a list of expansion paths as `expand` pairs.
#[must_use]
pub fn expand_pairs(paths: &[&str]) -> Vec<(String, String)> {
    paths
        .iter()
        .map(|p| ("expand".to_string(), (*p).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_empty_params_render_nothing() {
        assert!(QueryParams::new().to_pairs().is_empty());
    }

    #[test]
    fn test_params_render_in_fixed_order() {
        let params = QueryParams::new()
            .expand("a")
            .with_total(false)
            .offset(10)
            .limit(5)
            .sort("name asc")
            .where_predicate("version > 1");

        assert_eq!(
            params.to_pairs(),
            vec![
                pair("where", "version > 1"),
                pair("sort", "name asc"),
                pair("limit", "5"),
                pair("offset", "10"),
                pair("expand", "a"),
                pair("withTotal", "false"),
            ]
        );
    }

    #[test]
    fn test_zero_limit_is_not_sent() {
        let pairs = QueryParams::new().limit(0).offset(0).to_pairs();
        assert_eq!(pairs, vec![pair("offset", "0")]);
    }

    #[test]
    fn test_repeated_keys_are_preserved() {
        let pairs = QueryParams::new()
            .where_predicate("a = 1")
            .where_predicate("b = 2")
            .to_pairs();
        assert_eq!(pairs, vec![pair("where", "a = 1"), pair("where", "b = 2")]);
    }

    #[test]
    fn test_expand_pairs() {
        assert_eq!(
            expand_pairs(&["x", "y"]),
            vec![pair("expand", "x"), pair("expand", "y")]
        );
    }
}

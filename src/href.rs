//! Resolving a route (or raw path) into a complete href: base joining,
//! parameter filling and query-string encoding.

use serde_json::{Map, Value};

use crate::params::{fill_params, value_string};
use crate::path::resolve_url;
use crate::TreeNode;

// ============================================================================
// Inputs
// ============================================================================

/// Anything that carries a raw route path: a string, or a [`TreeNode`] via
/// its `path` field.
pub trait AsRoutePath {
    /// The raw (possibly templated) route path.
    fn as_route_path(&self) -> &str;
}

impl AsRoutePath for str {
    fn as_route_path(&self) -> &str {
        self
    }
}

impl AsRoutePath for String {
    fn as_route_path(&self) -> &str {
        self
    }
}

impl AsRoutePath for TreeNode {
    fn as_route_path(&self) -> &str {
        &self.path
    }
}

/// Options for [`resolve_route_path`].
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Base path the route resolves against. Defaults to `/`.
    pub base: String,
    /// Template parameters, applied when non-empty.
    pub params: Option<Map<String, Value>>,
    /// Query values, appended when non-empty; `null` values are skipped.
    pub query: Option<Map<String, Value>>,
    /// Force append semantics for absolute route paths. Defaults to false.
    pub append: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        ResolveOptions {
            base: "/".to_string(),
            params: None,
            query: None,
            append: false,
        }
    }
}

impl ResolveOptions {
    /// Default options: base `/`, no params, no query, replace semantics.
    pub fn new() -> Self {
        ResolveOptions::default()
    }

    /// Sets the base path (builder style).
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Sets the template parameters (builder style).
    pub fn params(mut self, params: Map<String, Value>) -> Self {
        self.params = Some(params);
        self
    }

    /// Sets the query values (builder style).
    pub fn query(mut self, query: Map<String, Value>) -> Self {
        self.query = Some(query);
        self
    }

    /// Forces append semantics for absolute paths (builder style).
    pub fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }
}

// ============================================================================
// Query Encoding
// ============================================================================

/// Percent-encodes a flat key/value mapping as `k1=v1&k2=v2`, skipping
/// `null` values. Keys come out in the map's iteration order (sorted, with
/// serde_json's default map).
fn encode_query(query: &Map<String, Value>) -> String {
    query
        .iter()
        .filter(|(_, value)| !value.is_null())
        .filter_map(|(key, value)| {
            value_string(value)
                .map(|v| format!("{}={}", urlencoding::encode(key), urlencoding::encode(&v)))
        })
        .collect::<Vec<_>>()
        .join("&")
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolves a route (or raw path) into a complete href: join against the
/// base, fill template parameters, append the encoded query.
///
/// An empty result means the template could not be filled (see
/// [`fill_params`]).
///
/// # Examples
///
/// ```
/// use route_tree::{resolve_route_path, ResolveOptions};
/// use serde_json::json;
///
/// let options = ResolveOptions::new()
///     .params(json!({ "id": 7 }).as_object().unwrap().clone())
///     .query(json!({ "q": "x y" }).as_object().unwrap().clone());
///
/// assert_eq!(resolve_route_path("/foo/:id", &options), "/foo/7?q=x%20y");
/// ```
pub fn resolve_route_path<R>(route: &R, options: &ResolveOptions) -> String
where
    R: AsRoutePath + ?Sized,
{
    let mut path = resolve_url(&options.base, route.as_route_path(), options.append);

    // apply params, eg: /foo/:id with { id: 1 } becomes /foo/1
    if let Some(params) = options.params.as_ref().filter(|p| !p.is_empty()) {
        path = fill_params(&path, params);
    }

    if let Some(query) = options.query.as_ref().filter(|q| !q.is_empty()) {
        let encoded = encode_query(query);
        if !encoded.is_empty() {
            path.push(if path.contains('?') { '&' } else { '?' });
            path.push_str(&encoded);
        }
    }

    path
}

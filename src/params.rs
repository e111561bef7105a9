//! Path template filling with a process-wide compile cache.
//!
//! Templates use colon-parameter syntax: `/users/:id` with `{id: 1}` fills
//! to `/users/1`. Compiled templates are cached by the raw template string,
//! populated lazily and never evicted.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use thiserror::Error;

/// A template that could not be filled.
#[derive(Debug, Error)]
pub enum FillError {
    /// A required parameter had no value (or an explicit `null`).
    #[error("missing param `{name}` for path `{path}`")]
    MissingParam {
        /// The parameter name (`"0"` for the wildcard).
        name: String,
        /// The template being filled.
        path: String,
    },
}

#[derive(Debug, Clone)]
enum Token {
    /// Literal segment text.
    Static(String),
    /// `:name` (required) or `:name?` (optional) parameter.
    Param { name: String, optional: bool },
    /// `*` wildcard, filled from the positional key `"0"`.
    Wildcard,
}

#[derive(Debug, Clone)]
struct CompiledPath {
    tokens: Vec<Token>,
}

impl CompiledPath {
    fn fill(&self, template: &str, params: &Map<String, Value>) -> Result<String, FillError> {
        let mut segments: Vec<String> = Vec::with_capacity(self.tokens.len());

        for token in &self.tokens {
            match token {
                Token::Static(text) => segments.push(text.clone()),
                Token::Param { name, optional } => match params.get(name).and_then(value_string) {
                    Some(value) => segments.push(value),
                    None if *optional => {}
                    None => {
                        return Err(FillError::MissingParam {
                            name: name.clone(),
                            path: template.to_string(),
                        })
                    }
                },
                Token::Wildcard => match params.get("0").and_then(value_string) {
                    Some(value) => segments.push(value),
                    None => {
                        return Err(FillError::MissingParam {
                            name: "0".to_string(),
                            path: template.to_string(),
                        })
                    }
                },
            }
        }

        Ok(segments.join("/"))
    }
}

/// Parses a template into per-segment tokens. Splitting keeps the empty
/// leading segment so rejoining preserves the leading slash.
fn compile(template: &str) -> CompiledPath {
    let tokens = template
        .split('/')
        .map(|segment| {
            if segment == "*" {
                Token::Wildcard
            } else if let Some(rest) = segment.strip_prefix(':') {
                let (name, optional) = match rest.strip_suffix('?') {
                    Some(name) => (name, true),
                    None => (rest, false),
                };
                Token::Param {
                    name: name.to_string(),
                    optional,
                }
            } else {
                Token::Static(segment.to_string())
            }
        })
        .collect();
    CompiledPath { tokens }
}

/// Template string → compiled form, shared process-wide. Append-only.
static COMPILE_CACHE: Lazy<Mutex<HashMap<String, CompiledPath>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Renders a JSON value into a path segment; `Null` counts as "no value".
pub(crate) fn value_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Substitutes named parameters into a colon-parameter path template.
///
/// Compiled templates are cached process-wide by template string. A
/// `pathMatch` parameter doubles as the positional `*` wildcard value, the
/// compatibility rule inherited from asterisk routes; the caller's map is
/// never modified.
///
/// Filling never fails past this boundary: a missing required parameter
/// yields an empty string (and a `tracing` warning in debug builds), and an
/// empty string is the caller's cue that the template could not be
/// resolved.
///
/// # Examples
///
/// ```
/// use route_tree::fill_params;
/// use serde_json::json;
///
/// let params = json!({ "id": 1 });
/// assert_eq!(fill_params("/foo/:id", params.as_object().unwrap()), "/foo/1");
///
/// // missing required parameter: empty string, no panic
/// assert_eq!(fill_params("/foo/:id", &serde_json::Map::new()), "");
/// ```
pub fn fill_params(path: &str, params: &Map<String, Value>) -> String {
    let compiled = {
        let mut cache = COMPILE_CACHE.lock().unwrap();
        cache
            .entry(path.to_string())
            .or_insert_with(|| compile(path))
            .clone()
    };

    // Asterisk-route compatibility: `pathMatch` doubles as the positional
    // wildcard param. Filling works on a scoped copy, so the caller's map
    // stays untouched.
    let filled = match params.get("pathMatch") {
        Some(path_match) => {
            let mut scoped = params.clone();
            scoped.insert("0".to_string(), path_match.clone());
            compiled.fill(path, &scoped)
        }
        None => compiled.fill(path, params),
    };

    match filled {
        Ok(result) => result,
        Err(err) => {
            if cfg!(debug_assertions) {
                tracing::warn!(template = %path, error = %err, "cannot fill params");
            }
            String::new()
        }
    }
}

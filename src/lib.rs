//! # Route Tree
//!
//! Utilities for working with hierarchical route configurations: a tree of
//! nodes, each carrying a relative path segment and optional children.
//!
//! - Depth-first and breadth-first traversal with tri-state early exit
//!   ([`Signal`]), resolving every node's absolute path along the way
//! - Node lookup by target path or predicate ([`find_node_ref`])
//! - Structure-preserving filtering into a new tree ([`reduce_tree`])
//! - Pre-order flattening into a mapped sequence ([`flat_map_tree`])
//! - Path template filling (`/foo/:id` + `{id: 1}` → `/foo/1`) with a
//!   process-wide compile cache ([`fill_params`]), and full href resolution
//!   with query strings ([`resolve_route_path`])
//!
//! The crate never routes requests and never mutates a caller's tree; it
//! operates on an already-constructed, in-memory configuration. Trees are
//! assumed to be finite (owned children make cycles unrepresentable in safe
//! code).
//!
//! ## Example
//!
//! ```
//! use route_tree::{find_node_ref, FindOptions, TreeNode};
//!
//! let routes = vec![
//!     TreeNode::new("/settings").with_children(vec![
//!         TreeNode::new("profile"),
//!         TreeNode::new("security"),
//!     ]),
//! ];
//!
//! let found = find_node_ref(&routes, "/settings/profile", FindOptions::default()).unwrap();
//! assert_eq!(found.path, "/settings/profile");
//! assert_eq!(found.parent.unwrap().path, "/settings");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Module Declarations
// ============================================================================

pub mod href;
pub mod locate;
pub mod params;
pub mod path;
pub mod traverse;
pub mod tree;

// Re-export the public API at the crate root
pub use href::{resolve_route_path, AsRoutePath, ResolveOptions};
pub use locate::{find_node_ref, FindOptions, NodeMatcher};
pub use params::{fill_params, FillError};
pub use path::{match_path, resolve_url, MatchKind};
pub use traverse::{traverse, traverse_bfs, EnterLeave, Signal, Visitor};
pub use tree::{flat_map_tree, reduce_forest, reduce_tree};

// ============================================================================
// Core Types
// ============================================================================

/// A single node in a route tree.
///
/// `path` is a relative segment; an empty `path` means "same as the parent".
/// The absolute path of a node is never stored on the node itself, it is
/// resolved transiently during traversal by joining every ancestor's segment
/// onto the root base `/`.
///
/// Arbitrary caller-defined fields ride in `meta` and are opaque to this
/// crate: they survive [`reduce_tree`](crate::reduce_tree) untouched and are
/// never inspected. With serde, extra JSON keys land in `meta` on
/// deserialization and are flattened back out on serialization:
///
/// ```
/// use route_tree::TreeNode;
///
/// let node: TreeNode = serde_json::from_str(
///     r#"{ "path": "/users", "title": "Users" }"#,
/// ).unwrap();
/// assert_eq!(node.path, "/users");
/// assert_eq!(node.meta.get("title").unwrap(), "Users");
/// ```
///
/// `children: None` and `children: Some(vec![])` are distinct states on
/// purpose: a reduced tree omits the children field entirely when nothing
/// survived filtering, it never leaves an empty array behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Relative path segment (may be empty).
    #[serde(default)]
    pub path: String,
    /// Ordered child nodes; absent is not the same as empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    /// Caller-defined extra fields, preserved but never interpreted.
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

impl TreeNode {
    /// Creates a leaf node with the given relative path segment.
    pub fn new(path: impl Into<String>) -> Self {
        TreeNode {
            path: path.into(),
            children: None,
            meta: Map::new(),
        }
    }

    /// Attaches child nodes (builder style).
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = Some(children);
        self
    }

    /// Attaches a caller-defined metadata field (builder style).
    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }

    /// The node's children, or an empty slice when the field is absent.
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// True when the node has at least one child.
    pub fn has_children(&self) -> bool {
        self.children.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// A transient reference to a located node: the node itself, its parent (if
/// any) and its fully resolved absolute path.
///
/// Produced fresh on each traversal step; `parent` is `None` for top-level
/// nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRef<'a> {
    /// The located node's parent; `None` for roots.
    pub parent: Option<&'a TreeNode>,
    /// The located node.
    pub node: &'a TreeNode,
    /// Absolute path resolved along the traversal.
    pub path: String,
}

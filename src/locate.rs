//! Node lookup: find the first node matching a target path or predicate.

use crate::path::{match_path, MatchKind};
use crate::traverse::{traverse, traverse_bfs, Signal, Visitor};
use crate::{NodeRef, TreeNode};

// ============================================================================
// Matchers
// ============================================================================

/// Something that can decide, per visited node, whether the search is over.
///
/// Implemented for `&str`/`String` (match by target path) and for
/// `FnMut(Option<&TreeNode>, &TreeNode, &str) -> Signal` closures
/// (match by predicate). Returning [`Signal::Break`] means "found".
pub trait NodeMatcher<'a> {
    /// Evaluates one visited node; `Break` ends the search with a hit.
    fn eval(&mut self, parent: Option<&'a TreeNode>, node: &'a TreeNode, path: &str) -> Signal;
}

/// Target-path matching: skip branches that cannot contain the target,
/// descend through strict prefixes, stop on the exact path.
impl<'a> NodeMatcher<'a> for &str {
    fn eval(&mut self, _parent: Option<&'a TreeNode>, _node: &'a TreeNode, path: &str) -> Signal {
        if !self.starts_with(path) {
            Signal::Skip
        } else if *self == path {
            Signal::Break
        } else {
            Signal::Normal
        }
    }
}

impl<'a> NodeMatcher<'a> for String {
    fn eval(&mut self, parent: Option<&'a TreeNode>, node: &'a TreeNode, path: &str) -> Signal {
        let mut target = self.as_str();
        target.eval(parent, node, path)
    }
}

impl<'a, F> NodeMatcher<'a> for F
where
    F: FnMut(Option<&'a TreeNode>, &'a TreeNode, &str) -> Signal,
{
    fn eval(&mut self, parent: Option<&'a TreeNode>, node: &'a TreeNode, path: &str) -> Signal {
        self(parent, node, path)
    }
}

// ============================================================================
// Options
// ============================================================================

/// Options for [`find_node_ref`].
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// Scope the search to paths matching this prefix; nodes whose resolved
    /// path classifies as [`MatchKind::NoMatch`] against it are skipped
    /// (subtree and all) before the matcher runs.
    pub prefix: Option<String>,
    /// Search breadth-first instead of the default depth-first.
    pub bfs: bool,
}

impl FindOptions {
    /// Default options: depth-first, unscoped.
    pub fn new() -> Self {
        FindOptions::default()
    }

    /// Scopes the search to the given path prefix (builder style).
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Switches to breadth-first search (builder style).
    pub fn bfs(mut self, bfs: bool) -> Self {
        self.bfs = bfs;
        self
    }
}

// ============================================================================
// Lookup
// ============================================================================

struct Probe<'a, M> {
    matcher: M,
    prefix: Option<String>,
    found: Option<NodeRef<'a>>,
}

impl<'a, M: NodeMatcher<'a>> Visitor<'a> for Probe<'a, M> {
    fn enter(&mut self, parent: Option<&'a TreeNode>, node: &'a TreeNode, path: &str) -> Signal {
        let signal = match self.prefix.as_deref() {
            Some(prefix) if match_path(path, prefix) == MatchKind::NoMatch => Signal::Skip,
            _ => self.matcher.eval(parent, node, path),
        };
        if signal.is_break() {
            self.found = Some(NodeRef {
                parent,
                node,
                path: path.to_string(),
            });
        }
        signal
    }
}

/// Finds the first node for which the matcher signals [`Signal::Break`],
/// returning it together with its parent and resolved absolute path.
///
/// The search runs depth-first by default, breadth-first with
/// [`FindOptions::bfs`]; with exactly one matching node both strategies
/// find the same one. Returns `None` when nothing matched.
///
/// # Examples
///
/// By target path:
///
/// ```
/// use route_tree::{find_node_ref, FindOptions, TreeNode};
///
/// let routes = vec![TreeNode::new("/a").with_children(vec![TreeNode::new("b")])];
///
/// let found = find_node_ref(&routes, "/a/b", FindOptions::default()).unwrap();
/// assert_eq!(found.path, "/a/b");
/// assert_eq!(found.parent.unwrap().path, "/a");
/// ```
///
/// By predicate, scoped to a prefix:
///
/// ```
/// use route_tree::{find_node_ref, FindOptions, Signal, TreeNode};
///
/// let routes = vec![
///     TreeNode::new("/admin").with_children(vec![TreeNode::new("users")]),
///     TreeNode::new("/public").with_children(vec![TreeNode::new("users")]),
/// ];
///
/// let found = find_node_ref(
///     &routes,
///     |_: Option<&TreeNode>, node: &TreeNode, _: &str| Signal::from(node.path == "users"),
///     FindOptions::new().prefix("/public"),
/// )
/// .unwrap();
/// assert_eq!(found.path, "/public/users");
/// ```
pub fn find_node_ref<'a, M>(
    roots: &'a [TreeNode],
    matcher: M,
    options: FindOptions,
) -> Option<NodeRef<'a>>
where
    M: NodeMatcher<'a>,
{
    let mut probe = Probe {
        matcher,
        prefix: options.prefix,
        found: None,
    };
    if options.bfs {
        traverse_bfs(roots, &mut probe);
    } else {
        traverse(roots, &mut probe);
    }
    probe.found
}

//! Depth-first and breadth-first tree traversal.
//!
//! Both walks resolve each node's absolute path on entry and obey the same
//! tri-state [`Signal`] protocol: `Normal` keeps going, `Skip` curtails
//! descent into the current node's children only, `Break` aborts the whole
//! walk immediately.

use std::collections::VecDeque;

use crate::path::resolve_url;
use crate::TreeNode;

// ============================================================================
// Control Signals
// ============================================================================

/// Control signal returned by traversal visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Continue descending and iterating.
    Normal,
    /// Do not descend into this node's children; siblings still run.
    Skip,
    /// Abort the entire traversal immediately.
    Break,
}

impl Signal {
    /// True for the abort signal.
    pub fn is_break(self) -> bool {
        self == Signal::Break
    }
}

/// `true` means "found, stop here"; `false` means "no opinion, keep going".
impl From<bool> for Signal {
    fn from(found: bool) -> Self {
        if found {
            Signal::Break
        } else {
            Signal::Normal
        }
    }
}

/// `None` means "no opinion, keep going".
impl From<Option<Signal>> for Signal {
    fn from(signal: Option<Signal>) -> Self {
        signal.unwrap_or(Signal::Normal)
    }
}

// ============================================================================
// Visitors
// ============================================================================

/// Callbacks invoked while walking a tree.
///
/// Both hooks default to no-ops returning [`Signal::Normal`]. A bare
/// `FnMut(Option<&TreeNode>, &TreeNode, &str) -> Signal` closure acts as an
/// enter-only visitor; use [`EnterLeave`] to pair enter and leave closures.
///
/// Arguments are the node's parent (`None` for top-level nodes), the node
/// itself, and its resolved absolute path.
pub trait Visitor<'a> {
    /// Called when a node is first reached, before its children.
    fn enter(&mut self, _parent: Option<&'a TreeNode>, _node: &'a TreeNode, _path: &str) -> Signal {
        Signal::Normal
    }

    /// Called after a node's subtree has been processed (or skipped).
    fn leave(&mut self, _parent: Option<&'a TreeNode>, _node: &'a TreeNode, _path: &str) -> Signal {
        Signal::Normal
    }
}

impl<'a, F> Visitor<'a> for F
where
    F: FnMut(Option<&'a TreeNode>, &'a TreeNode, &str) -> Signal,
{
    fn enter(&mut self, parent: Option<&'a TreeNode>, node: &'a TreeNode, path: &str) -> Signal {
        self(parent, node, path)
    }
}

/// Pairs an enter and a leave closure into a [`Visitor`].
pub struct EnterLeave<E, L> {
    /// Invoked on node entry.
    pub enter: E,
    /// Invoked on node exit.
    pub leave: L,
}

impl<E, L> EnterLeave<E, L> {
    /// Builds a visitor from the two closures.
    pub fn new(enter: E, leave: L) -> Self {
        EnterLeave { enter, leave }
    }
}

impl<'a, E, L> Visitor<'a> for EnterLeave<E, L>
where
    E: FnMut(Option<&'a TreeNode>, &'a TreeNode, &str) -> Signal,
    L: FnMut(Option<&'a TreeNode>, &'a TreeNode, &str) -> Signal,
{
    fn enter(&mut self, parent: Option<&'a TreeNode>, node: &'a TreeNode, path: &str) -> Signal {
        (self.enter)(parent, node, path)
    }

    fn leave(&mut self, parent: Option<&'a TreeNode>, node: &'a TreeNode, path: &str) -> Signal {
        (self.leave)(parent, node, path)
    }
}

// ============================================================================
// Depth-First Traversal
// ============================================================================

/// Walks the tree depth-first, pre-order, resolving each node's absolute
/// path on entry.
///
/// Per node, in sibling order: `enter` runs first; `Break` aborts the whole
/// walk at once (no `leave` for that node, no further siblings anywhere).
/// Unless the signal was `Skip`, the children are then walked with this node
/// as parent and its resolved path as the new base. `leave` runs afterwards
/// whether or not children were visited; a `Break` from the child walk or
/// from `leave` also aborts everything.
///
/// Top-level nodes are entered with `parent = None`. A single root passes
/// via [`std::slice::from_ref`]. Returns [`Signal::Break`] when the walk was
/// aborted, [`Signal::Normal`] when it ran to completion.
///
/// # Examples
///
/// ```
/// use route_tree::{traverse, Signal, TreeNode};
///
/// let tree = TreeNode::new("/docs").with_children(vec![
///     TreeNode::new("guide"),
///     TreeNode::new("api"),
/// ]);
///
/// let mut seen = Vec::new();
/// traverse(std::slice::from_ref(&tree), &mut |_: Option<&TreeNode>,
///                                              _: &TreeNode,
///                                              path: &str| {
///     seen.push(path.to_string());
///     Signal::Normal
/// });
/// assert_eq!(seen, ["/docs", "/docs/guide", "/docs/api"]);
/// ```
pub fn traverse<'a, V>(roots: &'a [TreeNode], visitor: &mut V) -> Signal
where
    V: Visitor<'a> + ?Sized,
{
    walk(None, roots, "/", visitor)
}

fn walk<'a, V>(
    parent: Option<&'a TreeNode>,
    siblings: &'a [TreeNode],
    root: &str,
    visitor: &mut V,
) -> Signal
where
    V: Visitor<'a> + ?Sized,
{
    for node in siblings {
        let path = resolve_url(root, &node.path, true);

        let mut signal = visitor.enter(parent, node, &path);
        if signal.is_break() {
            return Signal::Break;
        }

        if signal != Signal::Skip && node.has_children() {
            signal = walk(Some(node), node.children(), &path, visitor);
        }

        if signal.is_break() || visitor.leave(parent, node, &path).is_break() {
            return Signal::Break;
        }
    }
    Signal::Normal
}

// ============================================================================
// Breadth-First Traversal
// ============================================================================

/// Walks the tree breadth-first over an explicit FIFO queue, returning the
/// nodes visited in order.
///
/// Each dequeued node runs the visitor's `enter` hook and is collected
/// unless the signal was `Skip`. `Break` stops immediately: already
/// collected nodes (including the breaking one) are returned and the rest of
/// the queue is discarded. Otherwise, unless skipped, the node's children
/// are enqueued with the node as parent and its resolved path as their base.
///
/// Top-level nodes are seeded with `parent = None` and base `/`.
pub fn traverse_bfs<'a, V>(roots: &'a [TreeNode], visitor: &mut V) -> Vec<&'a TreeNode>
where
    V: Visitor<'a> + ?Sized,
{
    let mut visited = Vec::new();

    let mut queue: VecDeque<(Option<&'a TreeNode>, &'a TreeNode, String)> = roots
        .iter()
        .map(|node| (None, node, resolve_url("/", &node.path, true)))
        .collect();

    while let Some((parent, node, path)) = queue.pop_front() {
        let signal = visitor.enter(parent, node, &path);

        if signal != Signal::Skip {
            visited.push(node);
        }
        if signal.is_break() {
            break;
        }
        if signal != Signal::Skip {
            for child in node.children() {
                queue.push_back((Some(node), child, resolve_url(&path, &child.path, true)));
            }
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<TreeNode> {
        vec![
            TreeNode::new("/a").with_children(vec![
                TreeNode::new("b").with_children(vec![TreeNode::new("c")]),
                TreeNode::new("d"),
            ]),
            TreeNode::new("/e"),
        ]
    }

    #[test]
    fn test_dfs_preorder_paths() {
        let roots = sample();
        let mut seen = Vec::new();
        let result = traverse(&roots, &mut |_: Option<&TreeNode>,
                                            _: &TreeNode,
                                            path: &str| {
            seen.push(path.to_string());
            Signal::Normal
        });
        assert_eq!(result, Signal::Normal);
        assert_eq!(seen, ["/a", "/a/b", "/a/b/c", "/a/d", "/e"]);
    }

    #[test]
    fn test_dfs_parents() {
        let roots = sample();
        let mut parents = Vec::new();
        traverse(&roots, &mut |parent: Option<&TreeNode>,
                               _: &TreeNode,
                               _: &str| {
            parents.push(parent.map(|p| p.path.clone()));
            Signal::Normal
        });
        assert_eq!(
            parents,
            [
                None,
                Some("/a".to_string()),
                Some("b".to_string()),
                Some("/a".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn test_dfs_skip_curtails_descent_only() {
        let roots = sample();
        let mut seen = Vec::new();
        traverse(&roots, &mut |_: Option<&TreeNode>, node: &TreeNode, path: &str| {
            seen.push(path.to_string());
            if node.path == "b" {
                Signal::Skip
            } else {
                Signal::Normal
            }
        });
        // "/a/b/c" is skipped, the sibling "d" and the second root still run
        assert_eq!(seen, ["/a", "/a/b", "/a/d", "/e"]);
    }

    #[test]
    fn test_dfs_break_aborts_whole_walk() {
        let roots = sample();
        let mut enters = 0usize;
        let mut leaves = 0usize;
        let result = traverse(
            &roots,
            &mut EnterLeave::new(
                |_: Option<&TreeNode>, _: &TreeNode, path: &str| {
                    enters += 1;
                    if path == "/a/b/c" {
                        Signal::Break
                    } else {
                        Signal::Normal
                    }
                },
                |_: Option<&TreeNode>, _: &TreeNode, _: &str| {
                    leaves += 1;
                    Signal::Normal
                },
            ),
        );
        assert_eq!(result, Signal::Break);
        // Enter ran for /a, /a/b, /a/b/c and nothing after; the breaking
        // node and its ancestors never see a leave call.
        assert_eq!(enters, 3);
        assert_eq!(leaves, 0);
    }

    #[test]
    fn test_dfs_leave_runs_after_skip() {
        let roots = sample();
        let mut left = Vec::new();
        traverse(
            &roots,
            &mut EnterLeave::new(
                |_: Option<&TreeNode>, node: &TreeNode, _: &str| {
                    if node.path == "b" {
                        Signal::Skip
                    } else {
                        Signal::Normal
                    }
                },
                |_: Option<&TreeNode>, _: &TreeNode, path: &str| {
                    left.push(path.to_string());
                    Signal::Normal
                },
            ),
        );
        // post-order, with the skipped subtree absent
        assert_eq!(left, ["/a/b", "/a/d", "/a", "/e"]);
    }

    #[test]
    fn test_dfs_leave_break_stops_siblings() {
        let roots = sample();
        let mut seen = Vec::new();
        let result = traverse(
            &roots,
            &mut EnterLeave::new(
                |_: Option<&TreeNode>, _: &TreeNode, path: &str| {
                    seen.push(path.to_string());
                    Signal::Normal
                },
                |_: Option<&TreeNode>, _: &TreeNode, path: &str| {
                    if path == "/a/b/c" {
                        Signal::Break
                    } else {
                        Signal::Normal
                    }
                },
            ),
        );
        assert_eq!(result, Signal::Break);
        assert_eq!(seen, ["/a", "/a/b", "/a/b/c"]);
    }

    #[test]
    fn test_bfs_level_order() {
        let roots = sample();
        let visited = traverse_bfs(&roots, &mut |_: Option<&TreeNode>,
                                                 _: &TreeNode,
                                                 _: &str| Signal::Normal);
        let paths: Vec<&str> = visited.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, ["/a", "/e", "b", "d", "c"]);
    }

    #[test]
    fn test_bfs_break_keeps_collected_nodes() {
        let roots = sample();
        let visited = traverse_bfs(&roots, &mut |_: Option<&TreeNode>,
                                                 _: &TreeNode,
                                                 path: &str| {
            if path == "/e" {
                Signal::Break
            } else {
                Signal::Normal
            }
        });
        // The breaking node itself is still collected
        let paths: Vec<&str> = visited.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, ["/a", "/e"]);
    }

    #[test]
    fn test_bfs_skip_drops_node_and_subtree() {
        let roots = sample();
        let visited = traverse_bfs(&roots, &mut |_: Option<&TreeNode>,
                                                 node: &TreeNode,
                                                 _: &str| {
            if node.path == "b" {
                Signal::Skip
            } else {
                Signal::Normal
            }
        });
        let paths: Vec<&str> = visited.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, ["/a", "/e", "d"]);
    }

    #[test]
    fn test_signal_conversions() {
        assert_eq!(Signal::from(true), Signal::Break);
        assert_eq!(Signal::from(false), Signal::Normal);
        assert_eq!(Signal::from(None::<Signal>), Signal::Normal);
        assert_eq!(Signal::from(Some(Signal::Skip)), Signal::Skip);
    }
}

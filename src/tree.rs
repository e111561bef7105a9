//! Structure-preserving tree reduction and pre-order flattening.

use crate::path::resolve_url;
use crate::TreeNode;

// ============================================================================
// Reduction
// ============================================================================

/// Produces a filtered copy of a single tree, or `None` when the root itself
/// is rejected.
///
/// `predicate(parent, node, path, level)` decides per node; a `false` drops
/// the node and its entire subtree. `level` starts at 0 for the root. The
/// input is never mutated and the output never shares nodes with it: every
/// retained node is a fresh copy (path and caller-defined `meta` fields
/// carried over) whose children field is rebuilt from the recursively
/// reduced results, and omitted entirely when nothing survived.
///
/// # Examples
///
/// ```
/// use route_tree::{reduce_tree, TreeNode};
///
/// let tree = TreeNode::new("/admin").with_children(vec![
///     TreeNode::new("users"),
///     TreeNode::new("audit"),
/// ]);
///
/// let kept = reduce_tree(&tree, |_, node, _, _| node.path != "audit").unwrap();
/// assert_eq!(kept.children().len(), 1);
/// assert_eq!(kept.children()[0].path, "users");
///
/// assert!(reduce_tree(&tree, |_, _, _, _| false).is_none());
/// ```
pub fn reduce_tree<F>(node: &TreeNode, mut predicate: F) -> Option<TreeNode>
where
    F: FnMut(Option<&TreeNode>, &TreeNode, &str, usize) -> bool,
{
    reduce_node(None, node, "/", 0, &mut predicate)
}

/// Sequence-shaped counterpart of [`reduce_tree`]: reduces every root and
/// returns the survivors in order.
pub fn reduce_forest<F>(nodes: &[TreeNode], mut predicate: F) -> Vec<TreeNode>
where
    F: FnMut(Option<&TreeNode>, &TreeNode, &str, usize) -> bool,
{
    reduce_level(None, nodes, "/", 0, &mut predicate)
}

fn reduce_level<F>(
    parent: Option<&TreeNode>,
    siblings: &[TreeNode],
    root: &str,
    level: usize,
    predicate: &mut F,
) -> Vec<TreeNode>
where
    F: FnMut(Option<&TreeNode>, &TreeNode, &str, usize) -> bool,
{
    siblings
        .iter()
        .filter_map(|node| reduce_node(parent, node, root, level, predicate))
        .collect()
}

fn reduce_node<F>(
    parent: Option<&TreeNode>,
    node: &TreeNode,
    root: &str,
    level: usize,
    predicate: &mut F,
) -> Option<TreeNode>
where
    F: FnMut(Option<&TreeNode>, &TreeNode, &str, usize) -> bool,
{
    let path = resolve_url(root, &node.path, true);

    if !predicate(parent, node, &path, level) {
        return None;
    }

    let kept = reduce_level(Some(node), node.children(), &path, level + 1, predicate);

    Some(TreeNode {
        path: node.path.clone(),
        // an empty survivor set omits the field, it never becomes Some(vec![])
        children: if kept.is_empty() { None } else { Some(kept) },
        meta: node.meta.clone(),
    })
}

// ============================================================================
// Flattening
// ============================================================================

/// Flattens a single tree into a pre-order sequence of mapped values.
///
/// `map_fn(node, index, siblings)` receives each node together with its
/// position in its sibling slice; the root is passed with index 0 and itself
/// as the only sibling. Every node is visited: no filtering, no early exit,
/// no path resolution.
///
/// # Examples
///
/// ```
/// use route_tree::{flat_map_tree, TreeNode};
///
/// let tree = TreeNode::new("/a").with_children(vec![
///     TreeNode::new("b").with_children(vec![TreeNode::new("c")]),
///     TreeNode::new("d"),
/// ]);
///
/// let paths = flat_map_tree(&tree, |node, _, _| node.path.clone());
/// assert_eq!(paths, ["/a", "b", "c", "d"]);
/// ```
pub fn flat_map_tree<'a, T, F>(node: &'a TreeNode, mut map_fn: F) -> Vec<T>
where
    F: FnMut(&'a TreeNode, usize, &'a [TreeNode]) -> T,
{
    let mut out = Vec::new();
    flatten(std::slice::from_ref(node), &mut map_fn, &mut out);
    out
}

fn flatten<'a, T, F>(siblings: &'a [TreeNode], map_fn: &mut F, out: &mut Vec<T>)
where
    F: FnMut(&'a TreeNode, usize, &'a [TreeNode]) -> T,
{
    for (index, node) in siblings.iter().enumerate() {
        out.push(map_fn(node, index, siblings));
        if let Some(children) = node.children.as_deref() {
            flatten(children, map_fn, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> TreeNode {
        TreeNode::new("/a")
            .with_meta("title", json!("Root"))
            .with_children(vec![
                TreeNode::new("b")
                    .with_meta("hidden", json!(true))
                    .with_children(vec![TreeNode::new("c")]),
                TreeNode::new("d"),
            ])
    }

    #[test]
    fn test_reduce_keep_all_copies_structure() {
        let tree = sample();
        let out = reduce_tree(&tree, |_, _, _, _| true).unwrap();
        assert_eq!(out, tree);
    }

    #[test]
    fn test_reduce_reject_all() {
        let tree = sample();
        assert!(reduce_tree(&tree, |_, _, _, _| false).is_none());
        assert!(reduce_forest(std::slice::from_ref(&tree), |_, _, _, _| false).is_empty());
    }

    #[test]
    fn test_reduce_drops_subtree_with_node() {
        let tree = sample();
        let out = reduce_tree(&tree, |_, node, _, _| {
            node.meta.get("hidden") != Some(&json!(true))
        })
        .unwrap();
        // "b" is rejected, taking "c" with it; "d" survives
        assert_eq!(out.children().len(), 1);
        assert_eq!(out.children()[0].path, "d");
    }

    #[test]
    fn test_reduce_omits_children_field_when_empty() {
        let tree = sample();
        let out = reduce_tree(&tree, |_, _, _, level| level == 0).unwrap();
        assert_eq!(out.children, None);
    }

    #[test]
    fn test_reduce_preserves_meta() {
        let tree = sample();
        let out = reduce_tree(&tree, |_, _, _, _| true).unwrap();
        assert_eq!(out.meta.get("title"), Some(&json!("Root")));
        assert_eq!(out.children()[0].meta.get("hidden"), Some(&json!(true)));
    }

    #[test]
    fn test_reduce_levels_and_paths() {
        let tree = sample();
        let mut seen = Vec::new();
        reduce_tree(&tree, |_, _, path, level| {
            seen.push((path.to_string(), level));
            true
        });
        assert_eq!(
            seen,
            [
                ("/a".to_string(), 0),
                ("/a/b".to_string(), 1),
                ("/a/b/c".to_string(), 2),
                ("/a/d".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_reduce_never_mutates_input() {
        let tree = sample();
        let before = tree.clone();
        let _ = reduce_tree(&tree, |_, node, _, _| node.path != "b");
        assert_eq!(tree, before);
    }

    #[test]
    fn test_flat_map_visits_every_node_preorder() {
        let tree = sample();
        let paths = flat_map_tree(&tree, |node, _, _| node.path.clone());
        assert_eq!(paths, ["/a", "b", "c", "d"]);
    }

    #[test]
    fn test_flat_map_sibling_indexes() {
        let tree = sample();
        let indexed = flat_map_tree(&tree, |node, index, siblings| {
            (node.path.clone(), index, siblings.len())
        });
        assert_eq!(
            indexed,
            [
                ("/a".to_string(), 0, 1),
                ("b".to_string(), 0, 2),
                ("c".to_string(), 0, 1),
                ("d".to_string(), 1, 2),
            ]
        );
    }
}

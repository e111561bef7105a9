//! Base/relative path joining.

/// Joins a base path with a relative (or absolute) child path.
///
/// Resolution rules, in order:
///
/// - empty `relative` resolves to `base` unchanged (a node with an empty
///   path segment sits at the same path as its parent);
/// - a `relative` starting with `?` or `#` is appended to `base` verbatim;
/// - an absolute `relative` (leading `/`) replaces `base`, unless
///   `force_append` is set, in which case its segments are appended like any
///   other child path;
/// - otherwise `relative` is resolved against `base`'s segments, honoring
///   `.` and `..`. Without `force_append` the base's last segment is dropped
///   first (sibling-relative resolution); with it, segments are appended
///   below the base.
///
/// The result is always in canonical form: a leading `/`, no empty
/// segments, no trailing slash (except `/` itself).
///
/// # Examples
///
/// ```
/// use route_tree::resolve_url;
///
/// assert_eq!(resolve_url("/a", "b", true), "/a/b");
/// assert_eq!(resolve_url("/a", "/b", false), "/b");
/// assert_eq!(resolve_url("/a", "/b", true), "/a/b");
/// assert_eq!(resolve_url("/a/b", "../c", true), "/a/c");
/// assert_eq!(resolve_url("/a", "", true), "/a");
/// assert_eq!(resolve_url("/a", "?q=1", false), "/a?q=1");
/// ```
pub fn resolve_url(base: &str, relative: &str, force_append: bool) -> String {
    if relative.is_empty() {
        return base.to_string();
    }

    if relative.starts_with('?') || relative.starts_with('#') {
        return format!("{base}{relative}");
    }

    if relative.starts_with('/') && !force_append {
        return relative.to_string();
    }

    let mut stack: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();

    // Relative (non-forced) resolution starts from the base's directory
    if !force_append && !relative.starts_with('/') && !base.ends_with('/') {
        stack.pop();
    }

    for segment in relative.split('/').filter(|s| !s.is_empty()) {
        match segment {
            "." => {}
            ".." => {
                stack.pop();
            }
            _ => stack.push(segment),
        }
    }

    if stack.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", stack.join("/"))
    }
}

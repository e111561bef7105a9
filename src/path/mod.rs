//! Path comparison and joining.
//!
//! All functions here are **pure**: same input, same output, no side effects.

pub mod resolve;
pub use resolve::resolve_url;

/// How a target path relates to a reference path, segment-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The paths diverge before either one ends.
    NoMatch,
    /// Same segments, same length.
    Equal,
    /// The target is a strict prefix of the reference.
    TargetShorter,
    /// The reference is a strict prefix of the target.
    TargetLonger,
}

/// Compares two slash-delimited paths segment by segment.
///
/// Empty segments are discarded, so `/a/b`, `a/b` and `/a//b/` all denote
/// the same segment chain.
///
/// # Examples
///
/// ```
/// use route_tree::{match_path, MatchKind};
///
/// assert_eq!(match_path("/a/b", "/a/b"), MatchKind::Equal);
/// assert_eq!(match_path("/a/b", "/a"), MatchKind::TargetLonger);
/// assert_eq!(match_path("/a", "/a/b"), MatchKind::TargetShorter);
/// assert_eq!(match_path("/a/x", "/a/y"), MatchKind::NoMatch);
/// ```
pub fn match_path(target: &str, reference: &str) -> MatchKind {
    let target_segments: Vec<&str> = segments(target).collect();
    let reference_segments: Vec<&str> = segments(reference).collect();

    let shared = target_segments.len().min(reference_segments.len());
    for i in 0..shared {
        if target_segments[i] != reference_segments[i] {
            return MatchKind::NoMatch;
        }
    }

    match target_segments.len().cmp(&reference_segments.len()) {
        std::cmp::Ordering::Equal => MatchKind::Equal,
        std::cmp::Ordering::Less => MatchKind::TargetShorter,
        std::cmp::Ordering::Greater => MatchKind::TargetLonger,
    }
}

/// Non-empty segments of a slash-delimited path.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

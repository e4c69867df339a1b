//! Path normalization.
//!
//! # Rules
//! - Every leading and trailing `/` is stripped
//! - An empty remainder means the root (no segments)
//! - The remainder is split on every `/`; segments are taken literally
//!
//! Interior runs of slashes are not collapsed: `/home//about` yields the
//! segments `home`, `""`, `about`.

/// Split a raw path into its segments.
///
/// ```
/// use trie_router::routing::path::split_path;
///
/// assert_eq!(split_path("/home/about/").collect::<Vec<_>>(), ["home", "about"]);
/// assert_eq!(split_path("///").count(), 0);
/// ```
pub fn split_path(path: &str) -> impl Iterator<Item = &str> + '_ {
    let trimmed = path.trim_matches('/');
    (!trimmed.is_empty())
        .then(|| trimmed.split('/'))
        .into_iter()
        .flatten()
}

/// Render a segment sequence back into canonical form.
/// The empty sequence renders as `/`.
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::from("/");
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push('/');
        }
        out.push_str(segment.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(path: &str) -> Vec<&str> {
        split_path(path).collect()
    }

    #[test]
    fn test_root_forms() {
        assert!(segments("/").is_empty());
        assert!(segments("").is_empty());
        assert!(segments("////").is_empty());
    }

    #[test]
    fn test_boundary_slashes_stripped() {
        assert_eq!(segments("/home/about"), ["home", "about"]);
        assert_eq!(segments("home/about"), ["home", "about"]);
        assert_eq!(segments("//home/about//"), ["home", "about"]);
    }

    #[test]
    fn test_interior_slashes_kept() {
        assert_eq!(segments("/home//about"), ["home", "", "about"]);
    }

    #[test]
    fn test_segments_not_decoded() {
        assert_eq!(segments("/a%20b/ c "), ["a%20b", " c "]);
    }

    #[test]
    fn test_join() {
        let empty: [&str; 0] = [];
        assert_eq!(join_segments(&empty), "/");
        assert_eq!(join_segments(&["home", "about"]), "/home/about");
        assert_eq!(join_segments(&["home", "", "about"]), "/home//about");
    }
}

//! Path handling for archive-relative paths.
//!
//! Archive members are keyed without a leading `/` (`etc/hosts`, not
//! `/etc/hosts`), matching how tar stores names. The root itself has no
//! member, and is spelled `/` wherever a path is shown to the user.

/// The root directory as displayed and stored in the cursor.
pub const ROOT: &str = "/";

/// True if `path` is the root directory.
pub fn is_root(path: &str) -> bool {
    path == ROOT
}

/// Normalize a path: drop leading `/`, `.` segments and empty segments,
/// collapse `..`. `..` never climbs above the root.
pub fn normalize(path: &str) -> String {
    let mut segments = Vec::new();
    push_segments(&mut segments, path);
    join(&segments)
}

/// Join `relative` onto `base` with conventional path semantics.
///
/// An absolute `relative` restarts at the root. The result is normalized
/// but not checked for existence.
pub fn resolve(base: &str, relative: &str) -> String {
    let mut segments = Vec::new();
    if !relative.starts_with('/') {
        push_segments(&mut segments, base);
    }
    push_segments(&mut segments, relative);
    join(&segments)
}

fn push_segments<'a>(segments: &mut Vec<&'a str>, path: &'a str) {
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            name => segments.push(name),
        }
    }
}

fn join(segments: &[&str]) -> String {
    if segments.is_empty() {
        ROOT.to_string()
    } else {
        segments.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("a/b.txt", "a/b.txt")]
    #[case::leading_slash("/a/b.txt", "a/b.txt")]
    #[case::dot_prefix("./a/b.txt", "a/b.txt")]
    #[case::trailing_slash("a/", "a")]
    #[case::parent("a/b/../c", "a/c")]
    #[case::root("/", "/")]
    #[case::dot_only(".", "/")]
    #[case::above_root("../..", "/")]
    fn normalize_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[rstest]
    #[case::from_root("/", "a", "a")]
    #[case::nested("a", "b", "a/b")]
    #[case::parent_to_root("a", "..", "/")]
    #[case::parent_sibling("a/b", "../c", "a/c")]
    #[case::current("a", ".", "a")]
    #[case::absolute_restarts("a/b", "/c", "c")]
    #[case::absolute_root("a/b", "/", "/")]
    #[case::trailing_slash("/", "a/", "a")]
    fn resolve_cases(#[case] base: &str, #[case] relative: &str, #[case] expected: &str) {
        assert_eq!(resolve(base, relative), expected);
    }

    #[test]
    fn root_detection() {
        assert!(is_root("/"));
        assert!(!is_root("a"));
        assert!(!is_root(""));
    }
}

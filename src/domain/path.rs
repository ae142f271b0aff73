//! Dot-delimited folder paths and the ancestor predicates used by queries and moves.

use serde::{Deserialize, Serialize};

use crate::domain::Folder;

pub const SEPARATOR: char = '.';

pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR)
}

pub fn join(parent: &str, name: &str) -> String {
    format!("{parent}{SEPARATOR}{name}")
}

/// Path without its last segment, `None` for a root path.
pub fn parent(path: &str) -> Option<&str> {
    path.rfind(SEPARATOR).map(|idx| &path[..idx])
}

/// Last segment of a path.
pub fn leaf(path: &str) -> &str {
    path.rsplit(SEPARATOR).next().unwrap_or(path)
}

/// True if `path` lies strictly below `ancestor_path`.
pub fn is_strictly_below(path: &str, ancestor_path: &str) -> bool {
    path.len() > ancestor_path.len()
        && path.starts_with(ancestor_path)
        && path[ancestor_path.len()..].starts_with(SEPARATOR)
}

/// How ancestor relationships are tested against encoded paths.
///
/// `Substring` reproduces the raw containment test (`"name."` for descendant
/// queries, the bare source name for move targets). It can report false
/// positives when a name is embedded in a longer segment. `Segment` compares
/// whole segments only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMatch {
    #[default]
    Substring,
    Segment,
}

impl PathMatch {
    /// Does `path` have a folder called `name` among its ancestors?
    pub fn has_ancestor(&self, path: &str, name: &str) -> bool {
        match self {
            PathMatch::Substring => path.contains(&format!("{name}{SEPARATOR}")),
            PathMatch::Segment => match parent(path) {
                Some(ancestors) => segments(ancestors).any(|s| s == name),
                None => false,
            },
        }
    }

    /// Is `path` the subtree root `root` itself or somewhere below it?
    pub fn is_within_subtree(&self, path: &str, root: &Folder) -> bool {
        match self {
            PathMatch::Substring => path.contains(root.name.as_str()),
            PathMatch::Segment => path == root.path || is_strictly_below(path, &root.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrgId;
    use rstest::rstest;

    #[rstest]
    #[case("alpha", None)]
    #[case("alpha.bravo", Some("alpha"))]
    #[case("alpha.bravo.charlie", Some("alpha.bravo"))]
    fn test_parent(#[case] path: &str, #[case] expected: Option<&str>) {
        assert_eq!(parent(path), expected);
    }

    #[test]
    fn test_leaf() {
        assert_eq!(leaf("alpha"), "alpha");
        assert_eq!(leaf("alpha.bravo.charlie"), "charlie");
    }

    #[rstest]
    #[case("alpha.bravo", "alpha", true)]
    #[case("alpha", "alpha", false)]
    #[case("alphabet.x", "alpha", false)]
    #[case("golf.alpha.bravo", "alpha", false)]
    fn test_is_strictly_below(#[case] path: &str, #[case] ancestor: &str, #[case] expected: bool) {
        assert_eq!(is_strictly_below(path, ancestor), expected);
    }

    #[rstest]
    #[case(PathMatch::Substring, "alpha.bravo.charlie", "bravo", true)]
    #[case(PathMatch::Substring, "alpha.bravo", "bravo", false)]
    #[case(PathMatch::Substring, "bob.bob", "bob", true)]
    #[case(PathMatch::Substring, "x.bobby.y", "bob", false)]
    #[case(PathMatch::Substring, "x.jimbob.y", "bob", true)]
    #[case(PathMatch::Segment, "x.jimbob.y", "bob", false)]
    #[case(PathMatch::Segment, "bob.bob", "bob", true)]
    #[case(PathMatch::Segment, "bob", "bob", false)]
    fn test_has_ancestor(
        #[case] matcher: PathMatch,
        #[case] path: &str,
        #[case] name: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(matcher.has_ancestor(path, name), expected);
    }

    #[test]
    fn given_name_inside_longer_segment_when_matching_subtree_then_only_substring_reports_it() {
        let org = OrgId::random();
        let src = Folder::new("lf", org, "golf");
        let dst_path = "wolf.gulf";

        assert!(!PathMatch::Substring.is_within_subtree("alpha.delta", &src));
        assert!(PathMatch::Substring.is_within_subtree(dst_path, &src));
        assert!(!PathMatch::Segment.is_within_subtree(dst_path, &src));
        assert!(PathMatch::Segment.is_within_subtree("golf.x", &src));
        assert!(PathMatch::Segment.is_within_subtree("golf", &src));
    }
}

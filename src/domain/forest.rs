//! Render path-encoded folders as printable trees.

use std::collections::HashMap;

use itertools::Itertools;
use termtree::Tree;

use crate::domain::{Folder, OrgId};

/// Build one display tree per root, grouped by org.
///
/// Orgs come in order of first appearance, roots and children in collection
/// order. Children are attached by parent path within the same org. A folder
/// whose parent is missing is shown as a root of its own.
pub fn build_forest(folders: &[Folder]) -> Vec<(OrgId, Tree<String>)> {
    let known: HashMap<(OrgId, &str), usize> = folders
        .iter()
        .enumerate()
        .map(|(idx, f)| ((f.org_id, f.path.as_str()), idx))
        .collect();

    let mut first_seen: HashMap<OrgId, usize> = HashMap::new();
    for (idx, folder) in folders.iter().enumerate() {
        first_seen.entry(folder.org_id).or_insert(idx);
    }

    let mut children: HashMap<usize, Vec<usize>> = HashMap::new();
    let mut roots = Vec::new();
    for (idx, folder) in folders.iter().enumerate() {
        let parent = folder
            .parent_path()
            .and_then(|p| known.get(&(folder.org_id, p)));
        match parent {
            Some(&parent_idx) => children.entry(parent_idx).or_default().push(idx),
            None => roots.push(idx),
        }
    }

    roots
        .into_iter()
        .sorted_by_key(|&idx| first_seen[&folders[idx].org_id])
        .map(|idx| (folders[idx].org_id, to_tree(folders, &children, idx)))
        .collect()
}

fn to_tree(folders: &[Folder], children: &HashMap<usize, Vec<usize>>, idx: usize) -> Tree<String> {
    let leaves: Vec<Tree<String>> = children
        .get(&idx)
        .map(|kids| kids.iter().map(|&kid| to_tree(folders, children, kid)).collect())
        .unwrap_or_default();
    Tree::new(folders[idx].name.clone()).with_leaves(leaves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_nested_folders_when_building_forest_then_nests_by_path() {
        let org = OrgId::random();
        let folders = vec![
            Folder::new("alpha", org, "alpha"),
            Folder::new("bravo", org, "alpha.bravo"),
            Folder::new("charlie", org, "alpha.bravo.charlie"),
            Folder::new("golf", org, "golf"),
        ];

        let forest = build_forest(&folders);

        assert_eq!(forest.len(), 2);
        let (tree_org, alpha) = &forest[0];
        assert_eq!(*tree_org, org);
        assert_eq!(alpha.root, "alpha");
        assert_eq!(alpha.leaves.len(), 1);
        assert_eq!(alpha.leaves[0].leaves[0].root, "charlie");
        assert_eq!(forest[1].1.root, "golf");
        let rendered = alpha.to_string();
        assert!(rendered.contains("bravo"));
        assert!(rendered.contains("charlie"));
    }

    #[test]
    fn given_orgs_out_of_uuid_order_when_building_forest_then_grouped_by_first_appearance() {
        let late = OrgId::new(uuid::Uuid::from_u128(2));
        let early = OrgId::new(uuid::Uuid::from_u128(1));
        let folders = vec![
            Folder::new("alpha", late, "alpha"),
            Folder::new("foxtrot", early, "foxtrot"),
            Folder::new("golf", late, "golf"),
            Folder::new("hotel", early, "hotel"),
        ];

        let forest = build_forest(&folders);

        let roots: Vec<(OrgId, &str)> = forest.iter().map(|(o, t)| (*o, t.root.as_str())).collect();
        assert_eq!(
            roots,
            vec![(late, "alpha"), (late, "golf"), (early, "foxtrot"), (early, "hotel")]
        );
    }

    #[test]
    fn given_orphan_when_building_forest_then_rendered_as_root() {
        let org = OrgId::random();
        let folders = vec![Folder::new("x", org, "missing.x")];
        let forest = build_forest(&folders);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].1.root, "x");
    }

    #[test]
    fn given_two_orgs_when_building_forest_then_trees_do_not_mix() {
        let org1 = OrgId::random();
        let org2 = OrgId::random();
        let folders = vec![
            Folder::new("alpha", org1, "alpha"),
            Folder::new("alpha", org2, "alpha"),
            Folder::new("bravo", org2, "alpha.bravo"),
        ];
        let forest = build_forest(&folders);
        assert_eq!(forest.len(), 2);
        for (org, tree) in &forest {
            let expected = if *org == org2 { 1 } else { 0 };
            assert_eq!(tree.leaves.len(), expected);
        }
    }
}

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use crate::model::{Dependency, Issue};

/// The ordered forest derived from one snapshot. `ordered` holds every
/// input issue exactly once in display order; `parent_of` has no entry
/// for roots; `depth_of` covers every issue (roots at 0).
#[derive(Debug, Clone, Default)]
pub struct Tree {
    pub ordered: Vec<Issue>,
    pub parent_of: HashMap<String, String>,
    pub depth_of: HashMap<String, usize>,
}

/// Build the display forest from a flat snapshot.
///
/// Epics are visited first in input order, then any issue not yet
/// reached becomes its own root. Dangling edges are dropped, conflicting
/// parent edges after the first are ignored, and cycles are broken by
/// the visited set. This never fails: bad edge data degrades to a
/// flatter tree, not an error.
pub fn build_tree(issues: &[Issue], edges: &[Dependency]) -> Tree {
    let ids: HashSet<&str> = issues.iter().map(|issue| issue.id.as_str()).collect();

    let mut parent_of: HashMap<String, String> = HashMap::new();
    let mut children_of: IndexMap<String, Vec<String>> = IndexMap::new();

    for edge in edges {
        if !edge.is_parent_child() {
            continue;
        }
        if !ids.contains(edge.issue_id.as_str()) || !ids.contains(edge.depends_on_id.as_str()) {
            continue;
        }
        // First edge wins: a later edge claiming a different parent for
        // the same child is dropped entirely.
        if parent_of.contains_key(&edge.issue_id) {
            continue;
        }
        parent_of.insert(edge.issue_id.clone(), edge.depends_on_id.clone());
        children_of
            .entry(edge.depends_on_id.clone())
            .or_default()
            .push(edge.issue_id.clone());
    }

    // Child order follows the snapshot's issue order, not the order the
    // edges happened to arrive in.
    for children in children_of.values_mut() {
        if children.len() < 2 {
            continue;
        }
        let members: HashSet<String> = children.iter().cloned().collect();
        let mut sorted = Vec::with_capacity(children.len());
        let mut seen = HashSet::new();
        for issue in issues {
            if members.contains(&issue.id) && seen.insert(issue.id.clone()) {
                sorted.push(issue.id.clone());
            }
        }
        *children = sorted;
    }

    let issues_by_id: HashMap<&str, &Issue> =
        issues.iter().map(|issue| (issue.id.as_str(), issue)).collect();

    let mut ordered = Vec::with_capacity(issues.len());
    let mut depth_of = HashMap::with_capacity(issues.len());
    let mut visited: HashSet<String> = HashSet::with_capacity(issues.len());

    for issue in issues {
        if issue.is_epic() {
            visit(
                &issue.id,
                &issues_by_id,
                &children_of,
                &mut parent_of,
                &mut ordered,
                &mut depth_of,
                &mut visited,
            );
        }
    }

    // Orphans and non-epic roots, in input order.
    for issue in issues {
        if !visited.contains(&issue.id) {
            visit(
                &issue.id,
                &issues_by_id,
                &children_of,
                &mut parent_of,
                &mut ordered,
                &mut depth_of,
                &mut visited,
            );
        }
    }

    Tree {
        ordered,
        parent_of,
        depth_of,
    }
}

/// Depth-first traversal from one root, as an explicit stack. A node
/// may sit on the stack more than once when edges reconverge; the
/// visited check on pop keeps the first encounter and makes cyclic
/// edges terminate.
fn visit(
    root: &str,
    issues_by_id: &HashMap<&str, &Issue>,
    children_of: &IndexMap<String, Vec<String>>,
    parent_of: &mut HashMap<String, String>,
    ordered: &mut Vec<Issue>,
    depth_of: &mut HashMap<String, usize>,
    visited: &mut HashSet<String>,
) {
    let mut stack: Vec<(String, usize)> = vec![(root.to_string(), 0)];
    while let Some((id, depth)) = stack.pop() {
        if visited.contains(&id) {
            continue;
        }
        let Some(issue) = issues_by_id.get(id.as_str()) else {
            continue;
        };
        visited.insert(id.clone());
        depth_of.insert(id.clone(), depth);
        ordered.push((*issue).clone());

        if let Some(children) = children_of.get(&id) {
            // Reverse push so the stack pops children in list order.
            for child in children.iter().rev() {
                // Guard: the edge pass writes parent_of and children_of
                // in lockstep, so this insert only fires if that
                // invariant is ever relaxed (e.g. children from other
                // edge kinds). A reached child keeps its visitor as
                // parent rather than dangling.
                if !parent_of.contains_key(child) {
                    parent_of.insert(child.clone(), id.clone());
                }
                stack.push((child.clone(), depth + 1));
            }
        }
    }
}

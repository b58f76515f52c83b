use std::collections::{HashMap, HashSet};

use crate::model::Issue;

use super::collapse::is_hidden;
use super::tree::Tree;

/// One visible row: an index into the tree's ordered issues plus its
/// indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub idx: usize,
    pub level: usize,
}

/// An `Entry` decorated with everything the drawer needs to draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerRow {
    pub entry: Entry,
    pub collapsed: bool,
    pub has_children: bool,
    pub prefix: String,
}

/// Project the tree onto the visible entry list. Collapse only removes
/// rows; everything that survives keeps its relative order.
pub fn visible_entries(tree: &Tree, collapsed: &HashSet<String>) -> Vec<Entry> {
    let issues_by_id: HashMap<&str, &Issue> = tree
        .ordered
        .iter()
        .map(|issue| (issue.id.as_str(), issue))
        .collect();
    tree.ordered
        .iter()
        .enumerate()
        .filter(|(_, issue)| !is_hidden(&issue.id, &tree.parent_of, &issues_by_id, collapsed))
        .map(|(idx, issue)| Entry {
            idx,
            level: tree.depth_of.get(&issue.id).copied().unwrap_or(0),
        })
        .collect()
}

/// Decorate the visible entries with fold markers and tree-drawing
/// prefixes. Last-sibling detection runs over the visible list: a
/// parent's final visible child gets the `└─` glyph.
pub fn drawer_rows(tree: &Tree, collapsed: &HashSet<String>) -> Vec<DrawerRow> {
    let entries = visible_entries(tree, collapsed);

    // Total children per parent id, roots bucketed under "".
    let mut child_counts: HashMap<&str, usize> = HashMap::new();
    for issue in &tree.ordered {
        let parent = tree
            .parent_of
            .get(&issue.id)
            .map(String::as_str)
            .unwrap_or("");
        *child_counts.entry(parent).or_default() += 1;
    }

    let mut seen_by_parent: HashMap<&str, usize> = HashMap::new();
    let mut is_last_by_id: HashMap<&str, bool> = HashMap::with_capacity(entries.len());
    for entry in &entries {
        let id = tree.ordered[entry.idx].id.as_str();
        let parent = tree.parent_of.get(id).map(String::as_str).unwrap_or("");
        let seen = seen_by_parent.entry(parent).or_default();
        *seen += 1;
        is_last_by_id.insert(id, *seen >= child_counts.get(parent).copied().unwrap_or(0));
    }

    entries
        .iter()
        .map(|entry| {
            let id = tree.ordered[entry.idx].id.as_str();
            DrawerRow {
                entry: *entry,
                collapsed: collapsed.contains(id),
                has_children: child_counts.get(id).copied().unwrap_or(0) > 0,
                prefix: tree_prefix(id, entry.level, &tree.parent_of, &is_last_by_id),
            }
        })
        .collect()
}

/// Build the per-row tree prefix by walking ancestors deepest-first:
/// a continuation bar for each ancestor with siblings still to come,
/// blanks otherwise, then the branch glyph for the row itself.
fn tree_prefix(
    id: &str,
    level: usize,
    parent_of: &HashMap<String, String>,
    is_last_by_id: &HashMap<&str, bool>,
) -> String {
    if level == 0 {
        return String::new();
    }
    let mut ancestors: Vec<&str> = Vec::with_capacity(level);
    let mut parent = parent_of.get(id);
    while let Some(p) = parent {
        if ancestors.contains(&p.as_str()) {
            break;
        }
        ancestors.push(p.as_str());
        parent = parent_of.get(p.as_str());
    }

    let mut prefix = String::new();
    if ancestors.len() > 1 {
        for ancestor in ancestors[1..].iter().rev() {
            if is_last_by_id.get(ancestor).copied().unwrap_or(false) {
                prefix.push_str("   ");
            } else {
                prefix.push_str("\u{2502}  "); // │
            }
        }
    }
    if is_last_by_id.get(id).copied().unwrap_or(false) {
        prefix.push_str("\u{2514}\u{2500} "); // └─
    } else {
        prefix.push_str("\u{251c}\u{2500} "); // ├─
    }
    prefix
}

use std::collections::{HashMap, HashSet};

use crate::model::Issue;

/// True if any ancestor of `id` is a collapsed epic. Folding is a pure
/// function of the folded ancestor's id; descendants at any depth hide
/// with it. The walk tracks seen ids so a cyclic parent chain (possible
/// with degenerate edge data) ends instead of spinning.
pub fn is_hidden(
    id: &str,
    parent_of: &HashMap<String, String>,
    issues_by_id: &HashMap<&str, &Issue>,
    collapsed: &HashSet<String>,
) -> bool {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut parent = parent_of.get(id);
    while let Some(p) = parent {
        if !seen.insert(p.as_str()) {
            return false;
        }
        if let Some(issue) = issues_by_id.get(p.as_str())
            && issue.is_epic()
            && collapsed.contains(p.as_str())
        {
            return true;
        }
        parent = parent_of.get(p.as_str());
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(id: &str, issue_type: &str) -> Issue {
        Issue {
            id: id.into(),
            issue_type: issue_type.into(),
            ..Default::default()
        }
    }

    fn index(issues: &[Issue]) -> HashMap<&str, &Issue> {
        issues.iter().map(|i| (i.id.as_str(), i)).collect()
    }

    #[test]
    fn hidden_under_collapsed_epic() {
        let issues = vec![issue("e1", "epic"), issue("t1", "task")];
        let by_id = index(&issues);
        let parent_of = HashMap::from([("t1".to_string(), "e1".to_string())]);
        let collapsed = HashSet::from(["e1".to_string()]);
        assert!(is_hidden("t1", &parent_of, &by_id, &collapsed));
        // the epic itself stays visible
        assert!(!is_hidden("e1", &parent_of, &by_id, &collapsed));
    }

    #[test]
    fn hidden_transitively() {
        let issues = vec![issue("e1", "epic"), issue("e2", "epic"), issue("t1", "task")];
        let by_id = index(&issues);
        let parent_of = HashMap::from([
            ("e2".to_string(), "e1".to_string()),
            ("t1".to_string(), "e2".to_string()),
        ]);
        let collapsed = HashSet::from(["e1".to_string()]);
        assert!(is_hidden("t1", &parent_of, &by_id, &collapsed));
        assert!(is_hidden("e2", &parent_of, &by_id, &collapsed));
    }

    #[test]
    fn collapsing_a_non_epic_hides_nothing() {
        let issues = vec![issue("t1", "task"), issue("t2", "task")];
        let by_id = index(&issues);
        let parent_of = HashMap::from([("t2".to_string(), "t1".to_string())]);
        let collapsed = HashSet::from(["t1".to_string()]);
        assert!(!is_hidden("t2", &parent_of, &by_id, &collapsed));
    }

    #[test]
    fn visible_when_nothing_collapsed() {
        let issues = vec![issue("e1", "epic"), issue("t1", "task")];
        let by_id = index(&issues);
        let parent_of = HashMap::from([("t1".to_string(), "e1".to_string())]);
        assert!(!is_hidden("t1", &parent_of, &by_id, &HashSet::new()));
    }

    #[test]
    fn cyclic_parent_chain_terminates() {
        let issues = vec![issue("a", "task"), issue("b", "task")];
        let by_id = index(&issues);
        let parent_of = HashMap::from([
            ("a".to_string(), "b".to_string()),
            ("b".to_string(), "a".to_string()),
        ]);
        assert!(!is_hidden("a", &parent_of, &by_id, &HashSet::new()));
    }
}

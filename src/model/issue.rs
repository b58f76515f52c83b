use serde::Deserialize;

/// The only dependency type the tree builder cares about. A
/// `parent-child` edge means `depends_on_id` is the parent of
/// `issue_id` in the display hierarchy.
pub const PARENT_CHILD: &str = "parent-child";

/// One issue as exported by `bd`. Statuses and issue types are kept as
/// the raw strings bd emits; bd has grown statuses before (deferred,
/// tombstone) and the dashboard should not choke on the next one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Issue {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub issue_type: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl Issue {
    /// Everything that is not explicitly closed counts as open.
    pub fn is_open(&self) -> bool {
        self.status != "closed"
    }

    /// Epics are the only collapsible grouping nodes.
    pub fn is_epic(&self) -> bool {
        self.issue_type == "epic"
    }
}

/// A typed dependency edge between two issues.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Dependency {
    pub issue_id: String,
    pub depends_on_id: String,
    #[serde(rename = "type", default)]
    pub dep_type: String,
}

impl Dependency {
    pub fn is_parent_child(&self) -> bool {
        self.dep_type == PARENT_CHILD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_means_not_closed() {
        let mut issue = Issue {
            status: "open".into(),
            ..Default::default()
        };
        assert!(issue.is_open());
        issue.status = "blocked".into();
        assert!(issue.is_open());
        issue.status = "closed".into();
        assert!(!issue.is_open());
    }

    #[test]
    fn epic_check() {
        let epic = Issue {
            issue_type: "epic".into(),
            ..Default::default()
        };
        let task = Issue {
            issue_type: "task".into(),
            ..Default::default()
        };
        assert!(epic.is_epic());
        assert!(!task.is_epic());
    }

    #[test]
    fn parent_child_check() {
        let edge = Dependency {
            issue_id: "t1".into(),
            depends_on_id: "e1".into(),
            dep_type: "parent-child".into(),
        };
        assert!(edge.is_parent_child());
        let blocks = Dependency {
            dep_type: "blocks".into(),
            ..edge
        };
        assert!(!blocks.is_parent_child());
    }
}

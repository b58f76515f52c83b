use chrono::{DateTime, FixedOffset};

use crate::model::Issue;

/// Split a snapshot into the two dashboard columns: future work (open,
/// ready, in-progress, blocked buckets, each stable-sorted by priority,
/// concatenated) and completed work (closed, newest update first). The
/// per-bucket limit mirrors bd's own list limit; 0 means unlimited.
/// Deferred and other exotic statuses are left out of both columns.
pub fn split_columns(issues: &[Issue], limit: usize) -> (Vec<Issue>, Vec<Issue>) {
    let mut ready = by_statuses(issues, &["open", "ready"]);
    let mut in_progress = by_statuses(issues, &["in_progress"]);
    let mut blocked = by_statuses(issues, &["blocked"]);
    let mut closed = by_statuses(issues, &["closed"]);

    ready.sort_by_key(|issue| issue.priority);
    in_progress.sort_by_key(|issue| issue.priority);
    blocked.sort_by_key(|issue| issue.priority);
    closed.sort_by(|a, b| parse_time(&b.updated_at).cmp(&parse_time(&a.updated_at)));

    apply_limit(&mut ready, limit);
    apply_limit(&mut in_progress, limit);
    apply_limit(&mut blocked, limit);
    apply_limit(&mut closed, limit);

    let mut future = ready;
    future.append(&mut in_progress);
    future.append(&mut blocked);
    (future, closed)
}

fn by_statuses(issues: &[Issue], statuses: &[&str]) -> Vec<Issue> {
    issues
        .iter()
        .filter(|issue| statuses.contains(&issue.status.as_str()))
        .cloned()
        .collect()
}

fn apply_limit(issues: &mut Vec<Issue>, limit: usize) {
    if limit > 0 && issues.len() > limit {
        issues.truncate(limit);
    }
}

fn parse_time(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn issue(id: &str, status: &str, priority: i64, updated_at: &str) -> Issue {
        Issue {
            id: id.into(),
            status: status.into(),
            priority,
            updated_at: updated_at.into(),
            ..Default::default()
        }
    }

    #[test]
    fn future_orders_buckets_then_priority() {
        let issues = vec![
            issue("b1", "blocked", 0, ""),
            issue("o2", "open", 2, ""),
            issue("w1", "in_progress", 1, ""),
            issue("o1", "open", 1, ""),
            issue("r1", "ready", 0, ""),
        ];
        let (future, closed) = split_columns(&issues, 0);
        let ids: Vec<&str> = future.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "o1", "o2", "w1", "b1"]);
        assert!(closed.is_empty());
    }

    #[test]
    fn equal_priority_keeps_input_order() {
        let issues = vec![
            issue("o1", "open", 1, ""),
            issue("o2", "open", 1, ""),
            issue("o3", "open", 1, ""),
        ];
        let (future, _) = split_columns(&issues, 0);
        let ids: Vec<&str> = future.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["o1", "o2", "o3"]);
    }

    #[test]
    fn closed_sorts_newest_first() {
        let issues = vec![
            issue("c1", "closed", 0, "2026-01-01T00:00:00Z"),
            issue("c2", "closed", 0, "2026-03-01T00:00:00Z"),
            issue("c3", "closed", 0, "2026-02-01T00:00:00Z"),
        ];
        let (_, closed) = split_columns(&issues, 0);
        let ids: Vec<&str> = closed.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c2", "c3", "c1"]);
    }

    #[test]
    fn unparseable_timestamps_sort_last() {
        let issues = vec![
            issue("bad", "closed", 0, "not a time"),
            issue("good", "closed", 0, "2026-01-01T00:00:00Z"),
        ];
        let (_, closed) = split_columns(&issues, 0);
        assert_eq!(closed[0].id, "good");
        assert_eq!(closed[1].id, "bad");
    }

    #[test]
    fn limit_applies_per_bucket() {
        let issues = vec![
            issue("o1", "open", 1, ""),
            issue("o2", "open", 2, ""),
            issue("w1", "in_progress", 1, ""),
            issue("w2", "in_progress", 2, ""),
        ];
        let (future, _) = split_columns(&issues, 1);
        let ids: Vec<&str> = future.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["o1", "w1"]);
    }

    #[test]
    fn deferred_is_excluded() {
        let issues = vec![issue("d1", "deferred", 1, ""), issue("o1", "open", 1, "")];
        let (future, closed) = split_columns(&issues, 0);
        assert_eq!(future.len(), 1);
        assert_eq!(future[0].id, "o1");
        assert!(closed.is_empty());
    }
}

use std::path::PathBuf;
use std::process::Command;

use serde::Deserialize;

use crate::model::{Dependency, Issue};

use super::provider::{DataError, DataProvider, Snapshot};

/// Fetches snapshots by shelling out to the `bd` CLI.
pub struct BdProvider {
    dir: Option<PathBuf>,
    limit: usize,
}

#[derive(Debug, Default, Deserialize)]
struct BdStatus {
    #[serde(default)]
    summary: crate::model::SummaryCounts,
}

impl BdProvider {
    pub fn new(dir: Option<PathBuf>, limit: usize) -> Self {
        BdProvider { dir, limit }
    }

    fn run_json(&self, args: &[&str]) -> Result<Vec<u8>, DataError> {
        let mut command = Command::new("bd");
        command.args(args);
        if let Some(dir) = &self.dir {
            command.current_dir(dir);
        }
        let output = command.output()?;
        if !output.status.success() {
            let mut message = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if message.is_empty() {
                message = String::from_utf8_lossy(&output.stdout).trim().to_string();
            }
            if message.is_empty() {
                message = output.status.to_string();
            }
            return Err(DataError::Command {
                command: args.join(" "),
                message,
            });
        }
        Ok(output.stdout)
    }
}

impl DataProvider for BdProvider {
    fn fetch(&self) -> Result<Snapshot, DataError> {
        let status_output = self.run_json(&["status", "--json"])?;
        let status = parse_status(&status_output)?;

        let limit_text;
        let mut args = vec!["list", "--json"];
        if self.limit > 0 {
            limit_text = self.limit.to_string();
            args.push("--limit");
            args.push(&limit_text);
        }
        let list_output = self.run_json(&args)?;
        let issues = parse_issues(&list_output)?;

        let edges = collect_edges(&issues);
        Ok(Snapshot {
            issues,
            edges,
            summary: status.summary,
        })
    }
}

fn parse_status(data: &[u8]) -> Result<BdStatus, DataError> {
    serde_json::from_slice(data).map_err(|e| DataError::Parse {
        what: "status",
        source: e,
    })
}

pub(crate) fn parse_issues(data: &[u8]) -> Result<Vec<Issue>, DataError> {
    serde_json::from_slice(data).map_err(|e| DataError::Parse {
        what: "issues",
        source: e,
    })
}

/// Flatten the per-issue dependency arrays into one edge list.
pub fn collect_edges(issues: &[Issue]) -> Vec<Dependency> {
    issues
        .iter()
        .flat_map(|issue| issue.dependencies.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_issue_list() {
        let input = br#"[
            {
                "id": "bd-1",
                "title": "Test issue",
                "description": "Something to do",
                "status": "open",
                "priority": 2,
                "issue_type": "task",
                "owner": "tester@example.com",
                "updated_at": "2026-02-01T10:00:00Z",
                "created_at": "2026-01-31T10:00:00Z",
                "dependencies": [
                    {"issue_id": "bd-1", "depends_on_id": "bd-9", "type": "parent-child"}
                ]
            }
        ]"#;
        let issues = parse_issues(input).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "bd-1");
        assert_eq!(issues[0].priority, 2);
        assert_eq!(issues[0].dependencies.len(), 1);
        assert!(issues[0].dependencies[0].is_parent_child());
    }

    #[test]
    fn parse_issue_list_with_missing_fields() {
        let issues = parse_issues(br#"[{"id": "bd-2"}]"#).unwrap();
        assert_eq!(issues[0].id, "bd-2");
        assert_eq!(issues[0].title, "");
        assert!(issues[0].dependencies.is_empty());
    }

    #[test]
    fn parse_garbage_is_an_error() {
        assert!(parse_issues(b"not json").is_err());
    }

    #[test]
    fn parse_status_summary() {
        let input = br#"{"summary": {"total_issues": 12, "open_issues": 7, "closed_issues": 5}}"#;
        let status = parse_status(input).unwrap();
        assert_eq!(status.summary.total_issues, 12);
        assert_eq!(status.summary.open_issues, 7);
        assert_eq!(status.summary.ready_issues, 0);
    }

    #[test]
    fn edges_flatten_in_issue_order() {
        let issues = parse_issues(
            br#"[
                {"id": "a", "dependencies": [
                    {"issue_id": "a", "depends_on_id": "x", "type": "parent-child"},
                    {"issue_id": "a", "depends_on_id": "y", "type": "blocks"}
                ]},
                {"id": "b", "dependencies": [
                    {"issue_id": "b", "depends_on_id": "x", "type": "parent-child"}
                ]}
            ]"#,
        )
        .unwrap();
        let edges = collect_edges(&issues);
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].issue_id, "a");
        assert_eq!(edges[2].issue_id, "b");
    }
}

use serde::Deserialize;

/// Aggregate issue counts from `bd status --json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SummaryCounts {
    #[serde(default)]
    pub total_issues: i64,
    #[serde(default)]
    pub open_issues: i64,
    #[serde(default)]
    pub ready_issues: i64,
    #[serde(default)]
    pub in_progress_issues: i64,
    #[serde(default)]
    pub blocked_issues: i64,
    #[serde(default)]
    pub deferred_issues: i64,
    #[serde(default)]
    pub closed_issues: i64,
}

use super::finding::{Finding, Severity};
use serde::{Deserialize, Serialize};

/// Reduction of a finding list into a single health score plus tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// 0-100; 100 means no issues at all.
    pub score: u32,
    pub total: usize,
    pub passed: usize,
    pub criticals: usize,
    pub warnings: usize,
    pub suggestions: usize,
}

/// Tallies findings per severity and derives the health score:
/// `max(0, 100 - 25*criticals - 10*warnings - 3*suggestions)`.
///
/// Counts are plain tallies over the list; repeated instances of the same
/// rule on different nodes each count, except where the rule itself
/// aggregates into a single finding per graph.
pub fn score(findings: &[Finding]) -> ScoreSummary {
    let count = |s: Severity| findings.iter().filter(|f| f.severity == s).count();
    let passed = count(Severity::Pass);
    let criticals = count(Severity::Critical);
    let warnings = count(Severity::Warning);
    let suggestions = count(Severity::Suggestion);

    let raw = 100_i64 - 25 * criticals as i64 - 10 * warnings as i64 - 3 * suggestions as i64;

    ScoreSummary {
        score: raw.max(0) as u32,
        total: findings.len(),
        passed,
        criticals,
        warnings,
        suggestions,
    }
}

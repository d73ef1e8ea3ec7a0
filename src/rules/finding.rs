use super::catalog::RuleId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Methodology family a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Muda: the seven kinds of loss.
    Muda,
    /// 5S: workplace organization.
    #[serde(rename = "5s")]
    FiveS,
    /// PDCA: the improvement cycle.
    Pdca,
    /// Gemba: go and see.
    Gemba,
    /// Jidoka: stop on defect.
    Jidoka,
    /// JIT: just-in-time.
    Jit,
    /// Value-stream flow.
    Flow,
    /// Life-system coverage and balance.
    Life,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Muda => "muda",
            Category::FiveS => "5s",
            Category::Pdca => "pdca",
            Category::Gemba => "gemba",
            Category::Jidoka => "jidoka",
            Category::Jit => "jit",
            Category::Flow => "flow",
            Category::Life => "life",
        };
        f.write_str(s)
    }
}

/// Finding urgency tier. Variant order is the sort precedence:
/// critical first, passed checks last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Suggestion,
    Pass,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Suggestion => "suggestion",
            Severity::Pass => "pass",
        };
        f.write_str(s)
    }
}

/// One diagnostic result emitted by the rule engine.
///
/// `severity` is fixed at creation; scoring treats it as immutable input.
/// `prompt` is present for every non-pass finding (rule-specific where the
/// rule provides one, generated from a template otherwise) and absent for
/// pass findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub rule_id: RuleId,
    pub rule_name: String,
    pub category: Category,
    pub severity: Severity,
    pub message: String,
    /// Node ids implicated by this instance; empty for whole-graph findings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub node_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub principle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// Sorts findings by severity rank, keeping insertion order within a tier.
pub fn sort_by_severity(findings: &mut [Finding]) {
    findings.sort_by_key(|f| f.severity);
}

/// The filter the issue panel applies: an optional category restriction and
/// a toggle hiding passed checks.
pub fn filter_findings<'a>(
    findings: &'a [Finding],
    category: Option<Category>,
    hide_passed: bool,
) -> Vec<&'a Finding> {
    findings
        .iter()
        .filter(|f| category.is_none_or(|c| f.category == c))
        .filter(|f| !(hide_passed && f.severity == Severity::Pass))
        .collect()
}

/// Display metadata for one rule category.
pub struct CategoryInfo {
    pub category: Category,
    pub label: &'static str,
    pub emoji: &'static str,
    pub jp: &'static str,
}

/// Categories in the order the issue panel's filter presents them.
pub const CATEGORY_INFO: [CategoryInfo; 8] = [
    CategoryInfo { category: Category::Life, label: "Жизнь", emoji: "🧬", jp: "生活" },
    CategoryInfo { category: Category::Muda, label: "Потери", emoji: "🗑️", jp: "無駄" },
    CategoryInfo { category: Category::FiveS, label: "Организация", emoji: "🧹", jp: "5S" },
    CategoryInfo { category: Category::Pdca, label: "Цикл улучшений", emoji: "🔄", jp: "PDCA" },
    CategoryInfo { category: Category::Gemba, label: "Проверка", emoji: "👀", jp: "現場" },
    CategoryInfo { category: Category::Jidoka, label: "Автоостановка", emoji: "🛑", jp: "自働化" },
    CategoryInfo { category: Category::Jit, label: "Точно вовремя", emoji: "⏱️", jp: "JIT" },
    CategoryInfo { category: Category::Flow, label: "Поток", emoji: "🌊", jp: "Flow" },
];

//! The kaizen rule engine: catalog, analyzer, scoring and prompt templating.
//!
//! The engine is one independent pass over the same immutable graph the
//! classifier sees. It owns the rule catalog (a closed enum plus a static
//! descriptor table), the life-domain keyword sets and the reduction of
//! findings into a single health score.

mod catalog;
mod domains;
mod engine;
mod finding;
mod prompt;
mod score;

pub use catalog::{RuleDescriptor, RuleId};
pub use domains::{BUSINESS_KEYWORDS, LIFE_AREAS, LifeArea};
pub use engine::analyze;
pub use finding::{CATEGORY_INFO, Category, CategoryInfo, Finding, Severity, filter_findings, sort_by_severity};
pub use prompt::{combined_prompt, generate_prompt};
pub use score::{ScoreSummary, score};

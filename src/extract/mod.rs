pub mod company;
pub mod role;
pub mod salary;
pub mod work_mode;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use work_mode::WorkMode;

/// Sentinel stored when a field cannot be determined. A company literally
/// named "ND" is indistinguishable from a miss; downstream presents every
/// field as an editable pre-fill, so the ambiguity is accepted.
pub const ND: &str = "ND";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedJob {
    pub company_name: String,
    pub role_description: String,
    pub salary: String,
    pub work_mode: WorkMode,
}

impl Default for ParsedJob {
    fn default() -> Self {
        ParsedJob {
            company_name: ND.to_string(),
            role_description: ND.to_string(),
            salary: ND.to_string(),
            work_mode: WorkMode::Unknown,
        }
    }
}

/// Best-effort extraction over a pasted posting.
///
/// Total: any input, including the empty string, yields a fully populated
/// record; a field that no rule can determine becomes the "ND" sentinel.
/// Pure and stateless, so repeated calls on the same text are identical.
pub fn parse_posting(text: &str) -> ParsedJob {
    ParsedJob {
        company_name: company::extract(text).unwrap_or_else(|| ND.to_string()),
        role_description: role::extract(text).unwrap_or_else(|| ND.to_string()),
        salary: salary::extract(text).unwrap_or_else(|| ND.to_string()),
        work_mode: work_mode::detect(text),
    }
}

/// One tagged pattern in a per-field cascade. Capture group 1 holds the
/// candidate value; original casing is preserved.
pub(crate) struct FieldRule {
    pub name: &'static str,
    pub re: Regex,
}

/// Try rules in order; the first whose capture trims non-empty wins. An
/// all-whitespace capture does not count as a match and the cascade moves on.
pub(crate) fn first_capture(rules: &[FieldRule], field: &str, text: &str) -> Option<String> {
    for rule in rules {
        if let Some(caps) = rule.re.captures(text) {
            let value = caps.get(1).map_or("", |m| m.as_str()).trim();
            if !value.is_empty() {
                debug!(field, rule = rule.name, value, "rule hit");
                return Some(value.to_string());
            }
        }
    }
    None
}

// ── Tests ──

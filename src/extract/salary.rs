use std::sync::LazyLock;

use regex::Regex;

use super::{first_capture, FieldRule};

const LABELS_IT: &[&str] = &["ral", "stipendio", "retribuzione"];
const LABELS_EN: &[&str] = &["salary"];

// Amounts: digits plus separators, ranges and the thousands "k" shorthand.
// No newline, so a labelled amount stops at the end of its line.
const AMOUNT_CHARS: &str = "[0-9.,k -]";

static RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    let labels = [LABELS_IT, LABELS_EN].concat().join("|");
    vec![
        // "RAL: 45k", "Stipendio: €28.000"
        FieldRule {
            name: "label",
            re: Regex::new(&format!(r"(?i)\b(?:{labels})\b\s*:?\s*€?\s*({AMOUNT_CHARS}+)"))
                .unwrap(),
        },
        // "€50.000 per year"
        FieldRule {
            name: "currency_prefix",
            re: Regex::new(&format!(r"€({AMOUNT_CHARS}+)")).unwrap(),
        },
        // bare "45k"
        FieldRule {
            name: "k_suffix",
            re: Regex::new(r"(?i)([0-9.,]+k)").unwrap(),
        },
        // "45.000€"
        FieldRule {
            name: "euro_suffix",
            re: Regex::new(r"([0-9]{2,3}\.[0-9]{3})€").unwrap(),
        },
    ]
});

pub fn extract(text: &str) -> Option<String> {
    first_capture(&RULES, "salary", text)
}

// ── Tests ──

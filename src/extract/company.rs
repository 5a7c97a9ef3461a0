use std::sync::LazyLock;

use regex::Regex;

use super::{first_capture, FieldRule};

// Bilingual vocabularies, kept separate so either side can grow on its own.
const LABELS_IT: &[&str] = &["azienda", "presso"];
const LABELS_EN: &[&str] = &["company", "at"];
const HIRING_VERBS_IT: &[&str] = &["cerca", "ricerca"];
const HIRING_VERBS_EN: &[&str] = &["is looking", "hiring"];

// Characters a company name may contain. Stops at newlines and digits, so a
// label capture does not bleed into the following line.
const NAME_CHARS: &str = "[A-Za-z &.-]";

static RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    let labels = [LABELS_IT, LABELS_EN].concat().join("|");
    let verbs = [HIRING_VERBS_IT, HIRING_VERBS_EN].concat().join("|");
    vec![
        // "Azienda: Acme", "at Acme Corp"
        FieldRule {
            name: "label",
            re: Regex::new(&format!(r"(?i)\b(?:{labels})\b\s*:?\s*({NAME_CHARS}+)")).unwrap(),
        },
        // "Acme Corp cerca...", "Globex is looking for..."
        FieldRule {
            name: "hiring_verb",
            re: Regex::new(&format!(r"(?i)^({NAME_CHARS}+?)\s+(?:{verbs})")).unwrap(),
        },
        // "Acme - Senior Developer"
        FieldRule {
            name: "leading_dash",
            re: Regex::new(r"^([A-Za-z &.]+?)\s*-").unwrap(),
        },
    ]
});

pub fn extract(text: &str) -> Option<String> {
    first_capture(&RULES, "company", text)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn italian_label() {
        assert_eq!(
            extract("Azienda: Acme Corp\nWe are hiring a developer with 5 years experience"),
            Some("Acme Corp".to_string())
        );
    }

    #[test]
    fn english_label() {
        assert_eq!(
            extract("Company: Globex\nJoin our growing analytics team"),
            Some("Globex".to_string())
        );
    }

    #[test]
    fn at_label_mid_sentence() {
        assert_eq!(
            extract("Senior Rust Engineer at Ferris Works\nLong term contract"),
            Some("Ferris Works".to_string())
        );
    }

    #[test]
    fn label_is_word_bounded() {
        // "at" inside "sviluppatore" must not fire the label rule
        assert_eq!(
            extract("Acme Corp cerca uno sviluppatore senior con esperienza"),
            Some("Acme Corp".to_string())
        );
    }

    #[test]
    fn english_hiring_verb() {
        assert_eq!(
            extract("Globex Corporation is looking for a Staff Engineer"),
            Some("Globex Corporation".to_string())
        );
    }

    #[test]
    fn leading_dash() {
        assert_eq!(
            extract("Initech - Junior QA Analyst\nPadova, full time"),
            Some("Initech".to_string())
        );
    }

    #[test]
    fn case_insensitive_label_preserves_name_casing() {
        assert_eq!(extract("AZIENDA: Acme\nruolo da definire"), Some("Acme".to_string()));
        assert_eq!(extract("azienda: Acme\nruolo da definire"), Some("Acme".to_string()));
    }

    #[test]
    fn no_match_is_none() {
        assert_eq!(extract("1234 5678"), None);
        assert_eq!(extract(""), None);
    }
}

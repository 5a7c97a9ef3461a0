use std::fmt;

use serde::{Deserialize, Serialize};

// Keyword sets split by language so either vocabulary can be extended and
// tested on its own.
const REMOTE_IT: &[&str] = &["remoto"];
const REMOTE_EN: &[&str] = &["remote"];
const HYBRID_IT: &[&str] = &["ibrido"];
const HYBRID_EN: &[&str] = &["hybrid"];
const ONSITE_IT: &[&str] = &["sede", "ufficio"];
const ONSITE_EN: &[&str] = &["on-site"];

/// Work arrangement. Serialized values are the strings the surrounding
/// product persists, "ND" included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkMode {
    #[serde(rename = "remoto")]
    Remote,
    #[serde(rename = "ibrido")]
    Hybrid,
    #[serde(rename = "in-presenza")]
    OnSite,
    #[serde(rename = "ND")]
    Unknown,
}

impl WorkMode {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkMode::Remote => "remoto",
            WorkMode::Hybrid => "ibrido",
            WorkMode::OnSite => "in-presenza",
            WorkMode::Unknown => "ND",
        }
    }

    pub fn is_known(self) -> bool {
        self != WorkMode::Unknown
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categories are checked in a fixed order, so a posting mentioning both
/// "remoto" and "sede" resolves to remote.
pub fn detect(text: &str) -> WorkMode {
    let lower = text.to_lowercase();
    let hit = |sets: [&[&str]; 2]| sets.iter().any(|set| set.iter().any(|kw| lower.contains(kw)));

    if hit([REMOTE_IT, REMOTE_EN]) {
        WorkMode::Remote
    } else if hit([HYBRID_IT, HYBRID_EN]) {
        WorkMode::Hybrid
    } else if hit([ONSITE_IT, ONSITE_EN]) {
        WorkMode::OnSite
    } else {
        WorkMode::Unknown
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn italian_keywords() {
        assert_eq!(detect("lavoro da remoto"), WorkMode::Remote);
        assert_eq!(detect("modello ibrido, due giorni in ufficio"), WorkMode::Hybrid);
        assert_eq!(detect("si lavora in sede"), WorkMode::OnSite);
        assert_eq!(detect("presenza in ufficio richiesta"), WorkMode::OnSite);
    }

    #[test]
    fn english_keywords() {
        assert_eq!(detect("fully remote team"), WorkMode::Remote);
        assert_eq!(detect("hybrid schedule"), WorkMode::Hybrid);
        assert_eq!(detect("on-site in Berlin"), WorkMode::OnSite);
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert_eq!(detect("FULLY REMOTE"), WorkMode::Remote);
        assert_eq!(detect("Modello IBRIDO"), WorkMode::Hybrid);
    }

    #[test]
    fn remote_wins_over_on_site() {
        assert_eq!(
            detect("lavoro remoto con visite occasionali in sede"),
            WorkMode::Remote
        );
    }

    #[test]
    fn hybrid_wins_over_on_site() {
        assert_eq!(detect("modello ibrido con sede a Milano"), WorkMode::Hybrid);
    }

    #[test]
    fn no_keyword_is_unknown() {
        assert_eq!(detect("nessuna informazione sul luogo di lavoro"), WorkMode::Unknown);
        assert_eq!(detect(""), WorkMode::Unknown);
    }

    #[test]
    fn serde_round_trip_uses_persisted_strings() {
        for (mode, s) in [
            (WorkMode::Remote, "\"remoto\""),
            (WorkMode::Hybrid, "\"ibrido\""),
            (WorkMode::OnSite, "\"in-presenza\""),
            (WorkMode::Unknown, "\"ND\""),
        ] {
            assert_eq!(serde_json::to_string(&mode).unwrap(), s);
            assert_eq!(serde_json::from_str::<WorkMode>(s).unwrap(), mode);
        }
    }

    #[test]
    fn display_matches_persisted_strings() {
        assert_eq!(WorkMode::OnSite.to_string(), "in-presenza");
        assert_eq!(WorkMode::Unknown.to_string(), "ND");
    }
}

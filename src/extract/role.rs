/// Lines at or under this length are greetings, buttons, or spacing noise.
const MIN_LINE_CHARS: usize = 10;

/// Stored summaries are capped; longer lines keep the first 97 chars + "...".
const MAX_SUMMARY_CHARS: usize = 100;

/// Pick the first line long enough to plausibly describe the role.
pub fn extract(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| line.chars().count() > MIN_LINE_CHARS)
        .map(clip)
}

fn clip(line: &str) -> String {
    if line.chars().count() <= MAX_SUMMARY_CHARS {
        return line.to_string();
    }
    let head: String = line.chars().take(MAX_SUMMARY_CHARS - 3).collect();
    format!("{}...", head)
}

// ── Tests ──

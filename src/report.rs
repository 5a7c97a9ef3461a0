use crate::extract::{ParsedJob, WorkMode, ND};

/// Per-field hit counts over a batch of parsed postings. A field counts as
/// determined iff it holds something other than the sentinel.
#[derive(Debug, Default)]
pub struct Coverage {
    pub total: usize,
    pub company: usize,
    pub role: usize,
    pub salary: usize,
    pub remote: usize,
    pub hybrid: usize,
    pub on_site: usize,
}

impl Coverage {
    pub fn collect<'a>(jobs: impl IntoIterator<Item = &'a ParsedJob>) -> Self {
        let mut cov = Coverage::default();
        for job in jobs {
            cov.total += 1;
            if job.company_name != ND {
                cov.company += 1;
            }
            if job.role_description != ND {
                cov.role += 1;
            }
            if job.salary != ND {
                cov.salary += 1;
            }
            match job.work_mode {
                WorkMode::Remote => cov.remote += 1,
                WorkMode::Hybrid => cov.hybrid += 1,
                WorkMode::OnSite => cov.on_site += 1,
                WorkMode::Unknown => {}
            }
        }
        cov
    }

    pub fn mode_determined(&self) -> usize {
        self.remote + self.hybrid + self.on_site
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("## Extraction coverage\n");
        out.push_str(&format!("- Postings: {}\n", self.total));
        for (label, count) in [
            ("Company found", self.company),
            ("Role found", self.role),
            ("Salary found", self.salary),
            ("Work mode found", self.mode_determined()),
        ] {
            out.push_str(&format!(
                "- {}: {} ({:.1}%)\n",
                label,
                count,
                percent(count, self.total)
            ));
        }

        out.push_str("\n### Work mode\n");
        for (label, count) in [
            (WorkMode::Remote.as_str(), self.remote),
            (WorkMode::Hybrid.as_str(), self.hybrid),
            (WorkMode::OnSite.as_str(), self.on_site),
            (WorkMode::Unknown.as_str(), self.total - self.mode_determined()),
        ] {
            out.push_str(&format!(
                "- {}: {} ({:.1}%)\n",
                label,
                count,
                percent(count, self.total)
            ));
        }

        out
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

// ── Tests ──

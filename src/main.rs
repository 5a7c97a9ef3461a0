mod extract;
mod report;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use extract::ParsedJob;

#[derive(Parser)]
#[command(name = "jobpaste", about = "Heuristic field extraction from pasted job postings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from one posting (file, or stdin when omitted)
    Parse {
        /// Posting text file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Emit JSON instead of aligned fields
        #[arg(long)]
        json: bool,
    },
    /// Extract fields from every .txt posting in a directory
    Batch {
        /// Directory of posting files
        dir: PathBuf,
        /// Max postings to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Emit a JSON array instead of the overview table
        #[arg(long)]
        json: bool,
    },
    /// Field coverage report over a directory of postings
    Stats {
        /// Directory of posting files
        dir: PathBuf,
        /// Max postings to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { file, json } => {
            let text = read_input(file.as_deref())?;
            let job = extract::parse_posting(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&job)?);
            } else {
                print_fields(&job);
            }
            Ok(())
        }
        Commands::Batch { dir, limit, json } => {
            let parsed = parse_dir(&dir, limit)?;
            if parsed.is_empty() {
                println!("No .txt postings found in {}", dir.display());
                return Ok(());
            }
            if json {
                let jobs: Vec<&ParsedJob> = parsed.iter().map(|(_, job)| job).collect();
                println!("{}", serde_json::to_string_pretty(&jobs)?);
            } else {
                print_overview(&parsed);
            }
            Ok(())
        }
        Commands::Stats { dir, limit } => {
            let parsed = parse_dir(&dir, limit)?;
            if parsed.is_empty() {
                println!("No .txt postings found in {}", dir.display());
                return Ok(());
            }
            let cov = report::Coverage::collect(parsed.iter().map(|(_, job)| job));
            println!("{}", cov.render());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read posting from stdin")?;
            Ok(buf)
        }
    }
}

/// Parse every .txt file in `dir` (sorted, non-recursive). Unreadable files
/// are logged and skipped rather than failing the batch.
fn parse_dir(dir: &Path, limit: Option<usize>) -> Result<Vec<(String, ParsedJob)>> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();
    if let Some(n) = limit {
        paths.truncate(n);
    }

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")?
            .progress_chars("=> "),
    );

    let mut parsed = Vec::with_capacity(paths.len());
    for chunk in paths.chunks(500) {
        let results: Vec<_> = chunk
            .par_iter()
            .map(|path| {
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                match fs::read_to_string(path) {
                    Ok(text) => Some((name, extract::parse_posting(&text))),
                    Err(e) => {
                        warn!("Skipping {}: {}", path.display(), e);
                        None
                    }
                }
            })
            .collect();
        parsed.extend(results.into_iter().flatten());
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    Ok(parsed)
}

fn print_fields(job: &ParsedJob) {
    println!("Company:  {}", job.company_name);
    println!("Role:     {}", job.role_description);
    println!("Salary:   {}", job.salary);
    println!("Mode:     {}", job.work_mode);
}

fn print_overview(parsed: &[(String, ParsedJob)]) {
    println!(
        "{:>3} | {:<24} | {:<24} | {:<16} | {:<11}",
        "#", "Posting", "Company", "Salary", "Mode"
    );
    println!("{}", "-".repeat(92));

    for (i, (name, job)) in parsed.iter().enumerate() {
        println!(
            "{:>3} | {:<24} | {:<24} | {:<16} | {:<11}",
            i + 1,
            truncate(name, 24),
            truncate(&job.company_name, 24),
            truncate(&job.salary, 16),
            job.work_mode
        );
    }

    // Role summaries in a separate section to keep the table narrow
    println!("\n--- Roles ---");
    for (name, job) in parsed {
        println!("  {}: {}", truncate(name, 24), job.role_description);
    }

    let cov = report::Coverage::collect(parsed.iter().map(|(_, job)| job));
    println!(
        "\n{} postings | company {} | role {} | salary {} | mode {}",
        cov.total,
        cov.company,
        cov.role,
        cov.salary,
        cov.mode_determined()
    );
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

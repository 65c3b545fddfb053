//! Batch processing command for multiple documents.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use factex_core::models::document::ExtractionResult;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file JSON results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    result: Option<ExtractionResult>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::process::load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No input files matched: {}", args.input);
    }

    println!("Processing {} files", files.len());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?
            .progress_chars("##-"),
    );

    let mut results = Vec::with_capacity(files.len());
    for path in &files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        pb.set_message(name);

        let start = Instant::now();
        match super::process::extract_file(path, &config) {
            Ok(result) => results.push(FileResult {
                path: path.clone(),
                result: Some(result),
                error: None,
                processing_time_ms: start.elapsed().as_millis() as u64,
            }),
            Err(e) => {
                if !args.continue_on_error {
                    pb.finish_and_clear();
                    return Err(e);
                }
                warn!("Failed to process {}: {}", path.display(), e);
                results.push(FileResult {
                    path: path.clone(),
                    result: None,
                    error: Some(e.to_string()),
                    processing_time_ms: start.elapsed().as_millis() as u64,
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
        write_results(&results, dir)?;
    }

    if args.summary {
        write_summary(&results, args.output_dir.as_deref())?;
    }

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    println!(
        "{} {} processed, {} failed",
        style("✓").green(),
        results.len() - failed,
        failed
    );

    Ok(())
}

/// Write one JSON file per processed input, without the raw text.
fn write_results(results: &[FileResult], dir: &Path) -> anyhow::Result<()> {
    for file_result in results {
        let Some(result) = &file_result.result else {
            continue;
        };

        let stem = file_result
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "result".to_string());

        let mut value = serde_json::to_value(result)?;
        if let Some(object) = value.as_object_mut() {
            object.remove("raw_text");
        }

        let out_path = dir.join(format!("{}.json", stem));
        fs::write(out_path, serde_json::to_string_pretty(&value)?)?;
    }

    Ok(())
}

fn write_summary(results: &[FileResult], output_dir: Option<&Path>) -> anyhow::Result<()> {
    let dir = output_dir.unwrap_or_else(|| Path::new("."));
    let path = dir.join(format!(
        "summary_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    ));

    let mut wtr = csv::Writer::from_path(&path)?;
    wtr.write_record([
        "file", "kind", "locale", "title", "items", "total", "time_ms", "error",
    ])?;

    for file_result in results {
        let file = file_result.path.display().to_string();
        let time_ms = file_result.processing_time_ms.to_string();

        match &file_result.result {
            Some(result) => {
                let item_count = result.items.len().to_string();
                let total = result.total.to_string();
                wtr.write_record([
                    file.as_str(),
                    result.kind.as_str(),
                    result.locale.as_str(),
                    result.title.as_str(),
                    item_count.as_str(),
                    total.as_str(),
                    time_ms.as_str(),
                    "",
                ])?;
            }
            None => wtr.write_record([
                file.as_str(),
                "",
                "",
                "",
                "",
                "",
                time_ms.as_str(),
                file_result.error.as_deref().unwrap_or(""),
            ])?,
        }
    }

    wtr.flush()?;
    println!("Summary written to {}", path.display());

    Ok(())
}

use crate::config;
use crate::errors::{IndexwiseError, Result};
use crate::output::json::Metadata;
use crate::output::OutputFormat;
use crate::parse::{EcmaFrontend, FileEntries};
use crate::rules::{self, Finding};
use crate::vfs::RealFs;
use crate::walk;
use clap::Args;
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Repository root to check (the upper bound of every index search)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Config file (defaults to <PATH>/indexwise.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run only this rule
    #[arg(long, value_parser = parse_rule)]
    pub rule: Option<String>,

    /// Include glob patterns
    #[arg(long)]
    pub include: Vec<String>,

    /// Exclude glob patterns
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Suppress progress output
    #[arg(long)]
    pub quiet: bool,
}

fn parse_rule(s: &str) -> std::result::Result<String, String> {
    match s {
        rules::CLOSEST_INDEX | rules::REQUIRE_NAME => Ok(s.to_string()),
        _ => Err(format!(
            "unknown rule: {s} (expected {} or {})",
            rules::CLOSEST_INDEX,
            rules::REQUIRE_NAME
        )),
    }
}

/// Result of parsing a single file (collected from parallel workers).
struct FileParseResult {
    /// Absolute path, under the canonicalized root.
    file: PathBuf,
    /// Root-relative path used in findings.
    relative: PathBuf,
    entries: FileEntries,
}

pub fn run(args: &CheckArgs) -> Result<usize> {
    let start = Instant::now();

    let root = args
        .path
        .canonicalize()
        .map_err(|_| IndexwiseError::NoFiles {
            path: args.path.clone(),
        })?;

    let cfg = config::load(&root, args.config.as_deref())?;
    if let Some(ref file) = cfg.loaded_file {
        tracing::debug!("loaded config from {}", file.display());
    }

    let quiet = args.quiet || cfg.quiet;
    let format = match args.format {
        Some(f) => f,
        None => match cfg.format.as_deref() {
            Some(s) => s
                .parse()
                .map_err(|e: String| IndexwiseError::Config(e))?,
            None => OutputFormat::default(),
        },
    };

    let include = if args.include.is_empty() {
        &cfg.include
    } else {
        &args.include
    };
    let exclude = if args.exclude.is_empty() {
        &cfg.exclude
    } else {
        &args.exclude
    };

    let run_closest_index = cfg.closest_index.enabled
        && args.rule.as_deref().is_none_or(|r| r == rules::CLOSEST_INDEX);
    let run_require_name = cfg.require_name.enabled
        && !cfg.require_name.table.is_empty()
        && args.rule.as_deref().is_none_or(|r| r == rules::REQUIRE_NAME);

    let files = walk::discover_files(&root, include, exclude)?;
    if files.is_empty() {
        return Err(IndexwiseError::NoFiles { path: root });
    }

    let files_skipped = AtomicUsize::new(0);

    // Progress bar for parsing phase
    let progress = if !quiet {
        let pb = indicatif::ProgressBar::new(files.len() as u64);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    // Parallel parse: each thread creates its own Parser (Parser is not Send)
    let parse_results: Vec<FileParseResult> = files
        .par_iter()
        .filter_map(|file_path| {
            let source = match std::fs::read(file_path) {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", file_path.display(), e);
                    files_skipped.fetch_add(1, Ordering::Relaxed);
                    return None;
                }
            };

            let frontend = EcmaFrontend::new();
            let entries = frontend.extract(&source, file_path);
            let relative = file_path
                .strip_prefix(&root)
                .unwrap_or(file_path)
                .to_path_buf();

            if let Some(ref pb) = progress {
                pb.inc(1);
            }

            Some(FileParseResult {
                file: file_path.clone(),
                relative,
                entries,
            })
        })
        .collect();

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let files_checked = parse_results.len();
    let files_skipped = files_skipped.load(Ordering::Relaxed);

    // Sequential rule pass: filesystem probes stay synchronous and
    // uncached, so results reflect the tree as it is right now.
    let fs = RealFs;
    let mut findings: Vec<Finding> = Vec::new();
    let mut imports_checked = 0usize;

    for result in &parse_results {
        if run_closest_index {
            imports_checked += result.entries.imports.len();
            findings.extend(rules::closest_index::check_file(
                &fs,
                &result.file,
                &result.relative,
                &result.entries.imports,
                &root,
            ));
        }
        if run_require_name {
            findings.extend(
                cfg.require_name
                    .table
                    .check_file(&result.relative, &result.entries.bindings),
            );
        }
    }

    findings.sort_by(|a, b| {
        a.file
            .cmp(&b.file)
            .then(a.line.cmp(&b.line))
            .then(a.column.cmp(&b.column))
    });

    let elapsed_ms = start.elapsed().as_millis() as u64;
    let metadata = Metadata {
        root: root.clone(),
        files_checked,
        files_skipped,
        imports_checked,
        finding_count: findings.len(),
        elapsed_ms,
    };

    let mut stdout = std::io::stdout();
    match format {
        OutputFormat::Text => {
            crate::output::text::write_check_text(&mut stdout, &findings, &metadata)?;
        }
        OutputFormat::Json => {
            crate::output::json::write_check_json(&mut stdout, &findings, &metadata)?;
        }
        OutputFormat::Sarif => {
            crate::output::sarif::write_sarif(&mut stdout, &findings)?;
        }
    }

    if !quiet {
        eprintln!(
            "Checked {} files in {:.2}s",
            files_checked,
            elapsed_ms as f64 / 1000.0
        );
    }

    Ok(findings.len())
}

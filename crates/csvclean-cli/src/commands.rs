//! Command drivers for the csvclean CLI.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use csvclean_core::clean_table;
use csvclean_ingest::{IngestError, list_csv_files, read_table, resolve_selection, write_cleaned};
use csvclean_model::CleanMetrics;

use crate::cli::{CleanArgs, ListArgs};

/// Result of a completed clean run.
#[derive(Debug, Clone)]
pub struct CleanRunResult {
    pub source: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub metrics: CleanMetrics,
}

/// Run the clean command.
///
/// Returns `Ok(None)` for the interactive no-op outcomes (no candidate
/// files, invalid selection); those are reported to the user but are not
/// failures, and the pipeline is not invoked.
pub fn run_clean(args: &CleanArgs) -> Result<Option<CleanRunResult>> {
    let source = match &args.file {
        Some(file) => file.clone(),
        None => match pick_source_interactive(&args.dir)? {
            Some(path) => path,
            None => return Ok(None),
        },
    };

    info!(file = %source.display(), "processing file");
    let table = read_table(&source).with_context(|| format!("read {}", source.display()))?;
    let exclude: BTreeSet<String> = args.exclude.iter().cloned().collect();
    let outcome =
        clean_table(&table, &exclude).with_context(|| format!("clean {}", source.display()))?;

    let output = if args.dry_run {
        None
    } else {
        let path = write_cleaned(&outcome.table, &source, args.output_dir.as_deref())
            .with_context(|| format!("write cleaned copy of {}", source.display()))?;
        Some(path)
    };

    Ok(Some(CleanRunResult {
        source,
        output,
        metrics: outcome.metrics,
    }))
}

/// Run the list command.
pub fn run_list(args: &ListArgs) -> Result<()> {
    let files = list_csv_files(&args.dir)?;
    if files.is_empty() {
        println!("No CSV files found in {}.", args.dir.display());
        return Ok(());
    }
    for file in &files {
        println!("{}", file.display());
    }
    Ok(())
}

/// List candidates and resolve a choice typed on stdin.
fn pick_source_interactive(dir: &Path) -> Result<Option<PathBuf>> {
    let files = list_csv_files(dir)?;
    if files.is_empty() {
        println!("No CSV files found in {}.", dir.display());
        return Ok(None);
    }

    println!("Available CSV files:");
    for (idx, file) in files.iter().enumerate() {
        println!(
            "{}. {}",
            idx + 1,
            file.file_name().map_or_else(
                || file.display().to_string(),
                |name| name.to_string_lossy().into_owned()
            )
        );
    }
    print!("Enter the number of the file to clean (1-{}): ", files.len());
    io::stdout().flush().context("flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read selection")?;
    let Ok(choice) = line.trim().parse::<usize>() else {
        println!("Invalid input. Please enter a number.");
        return Ok(None);
    };

    match resolve_selection(&files, choice) {
        Ok(path) => Ok(Some(path.to_path_buf())),
        Err(IngestError::InvalidSelection { .. }) => {
            println!("Invalid choice.");
            Ok(None)
        }
        Err(error) => Err(error.into()),
    }
}

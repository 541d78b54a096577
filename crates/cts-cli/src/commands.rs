use std::collections::BTreeSet;
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span, warn};

use cts_cli::pipeline::convert_export;
use cts_ingest::RepeatSeparator;
use cts_model::ColumnSchema;
use cts_output::write_import_files;
use cts_persistence::{load_extract, load_imported_ids, save_extract};
use cts_submit::{Credentials, ImportClient, SubmitError, prune_imported, split_by_artist_count};

use crate::cli::{ConvertArgs, SubmitArgs};
use crate::summary::apply_table_style;
use crate::types::{ConvertResult, SubmitFailure, SubmitResult};

/// Environment variable holding the imports service base URL.
const URL_ENV: &str = "CTS_URL";

/// Environment variable holding the imports service account name.
const USER_ENV: &str = "CTS_USER";

/// Environment variable holding the imports service password.
const PASSWORD_ENV: &str = "CTS_PASSWORD";

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let span = info_span!("convert", export = %args.export_file.display());
    let _guard = span.enter();

    let separator = args
        .repeat_separator
        .map_or_else(RepeatSeparator::default, RepeatSeparator::new);

    let outcome = convert_export(&args.export_file, separator)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_extract_path(&args.export_file));
    save_extract(&outcome.extract, &output)
        .with_context(|| format!("save extract to {}", output.display()))?;
    info!(output = %output.display(), "extract saved");

    Ok(ConvertResult {
        source: args.export_file.clone(),
        output,
        stats: outcome.stats,
    })
}

pub fn run_submit(args: &SubmitArgs) -> Result<SubmitResult> {
    let span = info_span!("submit", extract = %args.extract_file.display());
    let _guard = span.enter();

    let extract = load_extract(&args.extract_file)?;
    let total = extract.records.len();

    let imported = match &args.imported {
        Some(path) => load_imported_ids(path)?,
        None => BTreeSet::new(),
    };
    let remaining = prune_imported(extract.records, &imported);
    let already_imported = total - remaining.len();

    // Single-artist records first, so the service sees the richer version
    // of each person before any biography-less repeat appearance.
    let (single, multi) = split_by_artist_count(remaining);
    let ordered: Vec<_> = single.into_iter().chain(multi).collect();

    if args.dry_run {
        let output_dir = args.output_dir.clone().unwrap_or_else(|| {
            args.extract_file
                .parent()
                .map_or_else(|| PathBuf::from("imports"), |dir| dir.join("imports"))
        });
        let paths = write_import_files(&output_dir, &ordered)?;
        info!(
            documents = paths.len(),
            output_dir = %output_dir.display(),
            "dry run complete"
        );
        return Ok(SubmitResult {
            total,
            already_imported,
            submitted: paths.len(),
            failures: Vec::new(),
            dry_run_dir: Some(output_dir),
        });
    }

    let url = match args.url.clone() {
        Some(url) => url,
        None => match env::var(URL_ENV) {
            Ok(url) => url,
            Err(_) => bail!("no service URL: pass --url or set {URL_ENV}"),
        },
    };
    let credentials = credentials_from_env()?;
    let client = ImportClient::new(&url, credentials)?;

    let bar = ProgressBar::new(ordered.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        "{bar:40.cyan/blue} {pos}/{len} {msg}",
    )?);

    let mut submitted = 0usize;
    let mut failures = Vec::new();
    for record in &ordered {
        bar.set_message(record.object_id().to_string());
        match client.submit(record) {
            Ok(()) => submitted += 1,
            Err(error @ SubmitError::Network(_)) => {
                // A dead service fails every record the same way; stop early.
                bar.abandon();
                return Err(error.into());
            }
            Err(error) => {
                warn!(object_id = record.object_id(), %error, "record not accepted");
                failures.push(SubmitFailure {
                    object: record.object_id().to_string(),
                    reason: error.to_string(),
                });
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    info!(submitted, failed = failures.len(), "submission complete");
    Ok(SubmitResult {
        total,
        already_imported,
        submitted,
        failures,
        dry_run_dir: None,
    })
}

pub fn run_columns() -> Result<()> {
    let schema = ColumnSchema::standard();
    let mut table = Table::new();
    table.set_header(vec!["#", "Column", "Repeats"]);
    apply_table_style(&mut table);
    for (position, spec) in schema.iter().enumerate() {
        table.add_row(vec![
            position.to_string(),
            spec.name.to_string(),
            if spec.repeating { "✓" } else { "" }.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Default extract location: alongside the export, with `.extract.json`
/// appended to the full file name.
fn default_extract_path(export_file: &std::path::Path) -> PathBuf {
    let mut name = export_file.as_os_str().to_owned();
    name.push(".extract.json");
    PathBuf::from(name)
}

fn credentials_from_env() -> Result<Credentials> {
    let user = env::var(USER_ENV).with_context(|| format!("{USER_ENV} not set"))?;
    let password = env::var(PASSWORD_ENV).with_context(|| format!("{PASSWORD_ENV} not set"))?;
    Ok(Credentials { user, password })
}

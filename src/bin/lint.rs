//! `dex-lint`: validate the data documents.
//!
//! Each subcommand checks one document set; `all` runs everything.
//! Findings are accumulated across every input file and reported
//! together, so the process exits non-zero only after all files have
//! been checked. A file that fails to parse becomes a finding too.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};

use dexdata::lint::{self, LintReport};
use dexdata::{Value, loader};

#[derive(Parser)]
#[command(name = "dex-lint", version, about = "Lint the creature catalog data")]
struct Cli {
    /// Directory holding types.yml, moves.yml, and species/
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check the type records
    Types,
    /// Check the move records
    Moves,
    /// Check every species file
    Species,
    /// Run all checks
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = &cli.data_dir;
    let mut report = LintReport::new();

    match cli.command {
        Command::Types => {
            if let Some(doc) = load_or_report(&data_dir.join("types.yml"), &mut report) {
                lint::lint_types(&doc, &mut report);
            }
        }
        Command::Moves => {
            let type_slugs = type_slugs(data_dir, &mut report);
            run_moves(data_dir, &type_slugs, &mut report);
        }
        Command::Species => {
            let type_slugs = type_slugs(data_dir, &mut report);
            run_species(data_dir, &type_slugs, &mut report);
        }
        Command::All => {
            let types_doc = load_or_report(&data_dir.join("types.yml"), &mut report);
            let type_slugs = match &types_doc {
                Some(doc) => {
                    lint::lint_types(doc, &mut report);
                    lint::slug_set(doc)
                }
                None => HashSet::new(),
            };
            run_moves(data_dir, &type_slugs, &mut report);
            run_species(data_dir, &type_slugs, &mut report);
        }
    }

    if report.is_clean() {
        println!("Lint OK.");
        Ok(())
    } else {
        eprintln!("Lint failed:");
        for finding in report.findings() {
            eprintln!("- {}", finding);
        }
        process::exit(1);
    }
}

fn run_moves(data_dir: &Path, type_slugs: &HashSet<String>, report: &mut LintReport) {
    if let Some(doc) = load_or_report(&data_dir.join("moves.yml"), report) {
        lint::lint_moves(&doc, type_slugs, report);
    }
}

fn run_species(data_dir: &Path, type_slugs: &HashSet<String>, report: &mut LintReport) {
    // Move slugs are only a reference set here; a broken moves.yml is
    // reported by the moves check, not twice.
    let move_slugs = loader::load_file(data_dir.join("moves.yml"))
        .map(|doc| lint::slug_set(&doc))
        .unwrap_or_default();

    let species_dir = data_dir.join("species");
    let files = match loader::list_data_files(&species_dir) {
        Ok(files) => files,
        Err(err) => {
            report.push(err.to_string());
            return;
        }
    };

    let mut loaded: Vec<(String, Value)> = Vec::new();
    for path in files {
        let base = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if let Some(doc) = load_or_report(&path, report) {
            loaded.push((base, doc));
        }
    }
    lint::lint_species(&loaded, type_slugs, &move_slugs, report);
}

/// The known type slugs, for referential checks. A broken types.yml is
/// its own finding; checks then run against an empty set.
fn type_slugs(data_dir: &Path, report: &mut LintReport) -> HashSet<String> {
    match loader::load_file(data_dir.join("types.yml")) {
        Ok(doc) => lint::slug_set(&doc),
        Err(err) => {
            report.push(err.to_string());
            HashSet::new()
        }
    }
}

fn load_or_report(path: &Path, report: &mut LintReport) -> Option<Value> {
    match loader::load_file(path) {
        Ok(doc) => Some(doc),
        Err(err) => {
            report.push(err.to_string());
            None
        }
    }
}

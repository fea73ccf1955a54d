//! `dex-build`: build the catalog artifacts and page.
//!
//! Loads the data documents, resolves cross-references, and writes the
//! output tree: JSON artifacts, type CSS, copied public assets, and the
//! rendered page. Any parse or validation failure aborts the build.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use dexdata::catalog::{self, Catalog};
use dexdata::export;
use dexdata::site;

#[derive(Parser)]
#[command(name = "dex-build", version, about = "Build the creature catalog site")]
struct Cli {
    /// Directory holding types.yml, moves.yml, and species/
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Output directory; recreated on every build
    #[arg(long, default_value = "dist")]
    out_dir: PathBuf,

    /// Static assets and the page template
    #[arg(long, default_value = "public")]
    public_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = Catalog::load(&cli.data_dir).context("Failed to load data documents")?;
    let index = catalog::name_index(&catalog.species);
    let padded = catalog::pad_species(catalog.species.clone());
    let resolved = catalog::attach_signature_moves(
        catalog::resolve_relations(padded, &index),
        &catalog.moves,
    );

    if cli.out_dir.exists() {
        fs::remove_dir_all(&cli.out_dir)
            .with_context(|| format!("Failed to clear {}", cli.out_dir.display()))?;
    }
    fs::create_dir_all(cli.out_dir.join("data"))
        .with_context(|| format!("Failed to create {}", cli.out_dir.display()))?;

    export::write_json(
        cli.out_dir.join("data").join("types.json"),
        &export::slice_to_json(&catalog.types),
    )?;
    export::write_json(
        cli.out_dir.join("data").join("species.json"),
        &export::slice_to_json(&resolved),
    )?;

    if cli.public_dir.exists() {
        copy_tree(&cli.public_dir, &cli.out_dir).context("Failed to copy public assets")?;
    }

    let css = site::type_css(&catalog.types);
    if !css.is_empty() {
        let css_dir = cli.out_dir.join("css");
        fs::create_dir_all(&css_dir)?;
        fs::write(css_dir.join("types.css"), css + "\n")?;
    }

    let asset_version = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock before epoch")?
        .as_millis()
        .to_string();
    let audio_versions = site::scan_audio_versions(&cli.public_dir);

    let template_path = cli.public_dir.join("index.html");
    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("Missing page template at {}", template_path.display()))?;
    let config = site::build_client_config(
        &catalog.types,
        &catalog.moves,
        audio_versions,
        &asset_version,
    );
    let config_json = serde_json::to_string(&config)?;
    let html = site::render_page(&template, &config_json, &asset_version);
    fs::write(cli.out_dir.join("index.html"), html)?;

    println!("Build complete. Open {}/index.html", cli.out_dir.display());
    Ok(())
}

fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        }
    }
    Ok(())
}

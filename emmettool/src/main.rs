// Copyright 2026 The emmetconv Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use clap::Parser;
use emmetutils::{SoftLineBreakStrategy, SongDocument, convert, preprocess};
use eyre::{Report, WrapErr};
use log::info;
use std::{
    fs::{self, File},
    io::{self, BufReader},
    path::{Path, PathBuf},
};

/// Written before the serialized song, matching what OpenLyrics tools expect at the top of a
/// file.
const XML_DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>\n";

fn main() -> Result<(), Report> {
    pretty_env_logger::init();

    match Args::parse() {
        Args::Openlyrics {
            from_dir,
            to_dir,
            openlp,
        } => convert_directory(&from_dir, &to_dir, openlp),
    }
}

#[derive(Clone, Debug, Parser)]
enum Args {
    /// Converts a directory of emmet YAML song files to OpenLyrics format.
    Openlyrics {
        /// Directory containing the source song files.
        #[arg(long)]
        from_dir: PathBuf,
        /// Directory for the generated files; deleted first if it already exists.
        #[arg(long)]
        to_dir: PathBuf,
        /// Adds adjustments for easier song management in OpenLP.
        #[arg(long)]
        openlp: bool,
    },
}

/// Converts every song file under `from_dir`, writing the results to a freshly created
/// `to_dir`.
fn convert_directory(from_dir: &Path, to_dir: &Path, openlp: bool) -> Result<(), Report> {
    create_out_dir(to_dir).wrap_err_with(|| format!("creating {}", to_dir.display()))?;

    for path in song_files(from_dir)? {
        let mut document: SongDocument =
            serde_yaml::from_reader(BufReader::new(File::open(&path)?))
                .wrap_err_with(|| format!("parsing {}", path.display()))?;
        preprocess(&mut document, SoftLineBreakStrategy::Ignore);
        if let Some(converted) = convert(&document, openlp)? {
            let xml = quick_xml::se::to_string(&converted.song)?;
            fs::write(
                to_dir.join(&converted.filename),
                format!("{XML_DECLARATION}{xml}"),
            )?;
            info!("wrote {}", converted.filename);
        } else {
            info!("skipping {}, it has no primary book entry", path.display());
        }
    }
    Ok(())
}

/// Returns the YAML song files under `from_dir` in sorted order.
fn song_files(from_dir: &Path) -> Result<Vec<PathBuf>, Report> {
    let mut paths = Vec::new();
    for entry in
        fs::read_dir(from_dir).wrap_err_with(|| format!("reading {}", from_dir.display()))?
    {
        let path = entry?.path();
        if path
            .extension()
            .is_some_and(|extension| extension == "yaml" || extension == "yml")
        {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Recreates `dir` as an empty directory, discarding whatever was there before.
fn create_out_dir(dir: &Path) -> Result<(), io::Error> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)
}

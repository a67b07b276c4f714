use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use igval::{GraphLoader, IsomorphismValidator, ValidatorConfig};

const DATASET_DIR: &str = "datasets";

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

fn parse_args() -> Result<Vec<PathBuf>> {
    let files: Vec<PathBuf> = env::args().skip(1).map(PathBuf::from).collect();
    if !files.is_empty() {
        return Ok(files);
    }

    let entries = fs::read_dir(DATASET_DIR)
        .with_context(|| format!("list dataset directory {:?}", DATASET_DIR))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(OsStr::to_str)
                    .map(|ext| ext.eq_ignore_ascii_case("txt"))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    if files.is_empty() {
        anyhow::bail!("No matrix pair files available under {:?}", DATASET_DIR);
    }
    Ok(files)
}

fn main() -> Result<()> {
    init_logging();
    let files = parse_args()?;
    let validator = IsomorphismValidator::new(ValidatorConfig::default());

    for file in &files {
        validate_file(&validator, file)?;
    }
    Ok(())
}

fn validate_file(validator: &IsomorphismValidator, path: &Path) -> Result<()> {
    let name = path
        .file_name()
        .unwrap_or_else(|| OsStr::new("<unknown>"))
        .to_string_lossy();

    let (left, right) = GraphLoader::pair_from_path(path)?;
    info!(
        "{}: graph 1 nodes {}, edges {}; graph 2 nodes {}, edges {}",
        name,
        left.node_count(),
        left.edge_count(),
        right.node_count(),
        right.edge_count()
    );

    let report = validator
        .validate(&left, &right)
        .with_context(|| format!("validate graph pair from {:?}", path))?;

    info!(
        "{}: refinement labeling: graphs are {}isomorphic",
        name,
        negation(report.heuristic_isomorphic)
    );
    info!(
        "{}: permutation search: graphs are {}isomorphic",
        name,
        negation(report.exact_isomorphic)
    );
    println!(
        "{}: graphs are {}isomorphic",
        name,
        negation(report.verdict)
    );
    Ok(())
}

fn negation(isomorphic: bool) -> &'static str {
    if isomorphic {
        ""
    } else {
        "not "
    }
}

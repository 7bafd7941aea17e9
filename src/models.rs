use std::collections::HashSet;
use std::fs;

use camino::Utf8Path;

use crate::domain::Sketch;
use crate::error::FinderError;

const MISSING_SHOWN: usize = 10;

/// List the entry names of the gene model directory.
///
/// Only the names matter: each reference sketch id is expected to appear as
/// an entry here. Entry contents are never read.
pub fn list_model_entries(models_path: &Utf8Path) -> Result<HashSet<String>, FinderError> {
    let entries = fs::read_dir(models_path)
        .map_err(|err| FinderError::Filesystem(format!("read {models_path}: {err}")))?;

    let mut names = HashSet::new();
    for entry in entries {
        let entry = entry.map_err(|err| FinderError::Filesystem(err.to_string()))?;
        names.insert(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Check that every reference sketch has a gene model entry.
///
/// Missing ids are collected in sketch order; the error reports the first
/// ten. Succeeds silently when nothing is missing.
pub fn check_models_exist(
    models: &HashSet<String>,
    sketches: &[Sketch],
    models_path: &Utf8Path,
) -> Result<(), FinderError> {
    let missing: Vec<String> = sketches
        .iter()
        .filter(|sketch| !models.contains(&sketch.sketch_id))
        .map(|sketch| sketch.sketch_id.clone())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }
    Err(FinderError::MissingModels {
        models_path: models_path.to_owned(),
        missing: missing.into_iter().take(MISSING_SHOWN).collect(),
    })
}

use camino::Utf8Path;
use tracing::info;

use crate::domain::{MashHit, SelectionMode};
use crate::error::FinderError;
use crate::mash::MashClient;
use crate::models;
use crate::parse;
use crate::select;

#[derive(Debug, Clone, Copy)]
pub struct SelectOptions {
    pub mode: SelectionMode,
    pub n: usize,
    pub max_dist: f64,
    pub check: bool,
}

#[derive(Clone)]
pub struct App<M: MashClient> {
    mash: M,
}

impl<M: MashClient> App<M> {
    pub fn new(mash: M) -> Self {
        Self { mash }
    }

    /// Select the best-matching reference model(s) for `query`.
    ///
    /// With `check` set, first verifies that every reference sketch has a
    /// gene model entry; a gap aborts before any distance computation. The
    /// distance run itself is already filtered to `max_dist` by mash, so the
    /// result is only sorted and truncated here, never re-filtered.
    pub fn select_models(
        &self,
        query: &Utf8Path,
        models_path: &Utf8Path,
        sketches_path: &Utf8Path,
        options: SelectOptions,
    ) -> Result<Vec<MashHit>, FinderError> {
        if options.check {
            let entries = models::list_model_entries(models_path)?;
            let raw = self.mash.sketch_info(sketches_path)?;
            let sketches = parse::parse_mash_info(&raw)?;
            info!("found {} reference sketches", sketches.len());
            models::check_models_exist(&entries, &sketches, models_path)?;
        }

        let raw = self.mash.distances(query, sketches_path, options.max_dist)?;
        let hits = parse::parse_mash_dist(&raw)?;
        Ok(select::best_hits(hits, options.mode, options.n))
    }
}

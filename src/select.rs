use crate::domain::{MashHit, SelectionMode};

/// Rank hits by ascending mash distance and apply the selection policy.
///
/// The sort is stable, so hits with equal distances keep their input order.
/// Standard mode returns every hit whose distance equals the lowest one
/// exactly; ties are value-equal distances, not an epsilon neighbourhood.
/// BestN returns the first `n` sorted hits, clamped to what is available.
pub fn best_hits(hits: Vec<MashHit>, mode: SelectionMode, n: usize) -> Vec<MashHit> {
    if hits.is_empty() {
        return Vec::new();
    }

    let mut sorted = hits;
    sorted.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    match mode {
        SelectionMode::Standard => {
            let best = sorted[0].distance;
            let tied = sorted.iter().take_while(|hit| hit.distance == best).count();
            sorted.truncate(tied);
            sorted
        }
        SelectionMode::BestN => {
            sorted.truncate(n);
            sorted
        }
    }
}

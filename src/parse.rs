use crate::domain::{MashHit, Sketch};
use crate::error::FinderError;

/// Parse the tabular output of `mash info -t`.
///
/// The first line is a column header and is discarded. Every following line
/// carries exactly four tab-separated fields: hash count, sequence length,
/// sketch id, comment. Blank input yields an empty listing; any malformed
/// line aborts the whole parse.
pub fn parse_mash_info(text: &str) -> Result<Vec<Sketch>, FinderError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut sketches = Vec::new();
    for line in text.trim_end().lines().skip(1) {
        let fields: Vec<&str> = line.split('\t').collect();
        let [hashes, length, sketch_id, comment] = fields[..] else {
            return Err(FinderError::InfoFormat(format!(
                "expected 4 tab-separated fields, got {}",
                fields.len()
            )));
        };
        sketches.push(Sketch {
            hashes: parse_count(hashes, FinderError::InfoFormat)?,
            length: parse_count(length, FinderError::InfoFormat)?,
            sketch_id: sketch_id.to_string(),
            comment: comment.to_string(),
        });
    }
    Ok(sketches)
}

/// Parse the output of `mash dist`.
///
/// No header. Each line carries exactly five tab-separated fields: reference
/// id, query id, mash distance, p-value, and a `matching/total` hash ratio.
/// Blank input yields an empty listing; any malformed line aborts the whole
/// parse.
pub fn parse_mash_dist(text: &str) -> Result<Vec<MashHit>, FinderError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut hits = Vec::new();
    for line in text.trim_end().lines() {
        let fields: Vec<&str> = line.split('\t').collect();
        let [ref_id, query_id, distance, p_value, hash_ratio] = fields[..] else {
            return Err(FinderError::DistFormat(format!(
                "expected 5 tab-separated fields, got {}",
                fields.len()
            )));
        };
        let ratio_parts: Vec<&str> = hash_ratio.split('/').collect();
        let [matching, total] = ratio_parts[..] else {
            return Err(FinderError::DistFormat(format!(
                "hash ratio is not matching/total: {hash_ratio}"
            )));
        };
        hits.push(MashHit {
            ref_id: ref_id.to_string(),
            query_id: query_id.to_string(),
            distance: parse_float(distance)?,
            p_value: parse_float(p_value)?,
            matching_hashes: parse_count(matching, FinderError::DistFormat)?,
            total_hashes: parse_count(total, FinderError::DistFormat)?,
        });
    }
    Ok(hits)
}

fn parse_count(
    field: &str,
    wrap: impl FnOnce(String) -> FinderError,
) -> Result<u64, FinderError> {
    field
        .parse::<u64>()
        .map_err(|_| wrap(format!("not an integer: {field}")))
}

fn parse_float(field: &str) -> Result<f64, FinderError> {
    field
        .parse::<f64>()
        .map_err(|_| FinderError::DistFormat(format!("not a number: {field}")))
}

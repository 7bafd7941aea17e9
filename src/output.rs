use std::io::{self, Write};

use tracing::info;

use crate::domain::MashHit;

const HEADER: [&str; 4] = ["Hit", "Mash_distance", "Matching hashes", "p value"];

/// Write the selected hits as a tab-separated table.
///
/// An empty selection writes nothing, not even the header.
pub fn write_hits<W: Write>(out: &mut W, hits: &[MashHit]) -> io::Result<()> {
    if hits.is_empty() {
        info!("no hits found");
        return Ok(());
    }
    info!("found {} hit(s)", hits.len());

    writeln!(out, "{}", HEADER.join("\t"))?;
    for hit in hits {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            hit.ref_id,
            hit.distance,
            hit.hash_ratio(),
            hit.p_value
        )?;
    }
    Ok(())
}

//! Sequential linear scan.

use crate::corpus::GameRecord;
use crate::image::SampleView;
use crate::metric::signature_distance;
use crate::search::MatchResult;
use crate::trace::{trace_event, trace_span};
use crate::util::SigMatchResult;

/// Returns the record closest to `query` among `names`, resolved via `lookup`.
///
/// Names are visited in the order given and `lookup` is called once per
/// name. An empty `names` yields [`MatchResult::no_match`] without calling
/// `lookup`. The first lookup error is returned immediately.
pub fn find_best_match<S, F>(
    query: SampleView<'_>,
    names: &[S],
    mut lookup: F,
) -> SigMatchResult<MatchResult>
where
    S: AsRef<str>,
    F: FnMut(&str) -> SigMatchResult<GameRecord>,
{
    let _span = trace_span!("find_best_match", candidates = names.len()).entered();

    let mut best = MatchResult::no_match();
    for (idx, name) in names.iter().enumerate() {
        let record = lookup(name.as_ref())?;
        let distance = signature_distance(query, record.signature.view());
        trace_event!(DEBUG, "candidate", index = idx, distance = distance);
        if best.best.is_none() || distance < best.distance {
            trace_event!(INFO, "new_best", index = idx, distance = distance);
            best = MatchResult {
                best: Some(record),
                distance,
            };
        }
    }

    trace_event!(
        INFO,
        "scan_done",
        matched = best.is_match(),
        distance = best.distance
    );
    Ok(best)
}

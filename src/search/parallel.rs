//! Rayon-parallel corpus scan (feature-gated).
//!
//! Candidates are resolved and scored concurrently. The reduction orders by
//! `(distance, corpus index)`, so the winner is the same record the
//! sequential scan would pick regardless of completion order.

use crate::corpus::GameRecord;
use crate::image::SampleView;
use crate::metric::signature_distance;
use crate::search::MatchResult;
use crate::trace::{trace_event, trace_span};
use crate::util::SigMatchResult;
use rayon::prelude::*;

struct Scored {
    index: usize,
    distance: f32,
    record: GameRecord,
}

fn prefer(a: Scored, b: Scored) -> Scored {
    let b_wins = b.distance < a.distance || (b.distance == a.distance && b.index < a.index);
    if b_wins {
        b
    } else {
        a
    }
}

/// Parallel counterpart of [`find_best_match`](crate::find_best_match).
///
/// Returns the same record as the sequential scan. If any lookup fails the
/// scan fails; which error is reported is unspecified when several fail.
pub fn find_best_match_par<S, F>(
    query: SampleView<'_>,
    names: &[S],
    lookup: F,
) -> SigMatchResult<MatchResult>
where
    S: AsRef<str> + Sync,
    F: Fn(&str) -> SigMatchResult<GameRecord> + Sync,
{
    let _span = trace_span!(
        "find_best_match",
        candidates = names.len(),
        parallel = true
    )
    .entered();

    let best = names
        .par_iter()
        .enumerate()
        .map(|(index, name)| -> SigMatchResult<Scored> {
            let record = lookup(name.as_ref())?;
            let distance = signature_distance(query, record.signature.view());
            trace_event!(DEBUG, "candidate", index = index, distance = distance);
            Ok(Scored {
                index,
                distance,
                record,
            })
        })
        .try_reduce_with(|a, b| Ok(prefer(a, b)));

    let result = match best {
        None => MatchResult::no_match(),
        Some(scored) => {
            let scored = scored?;
            trace_event!(INFO, "new_best", index = scored.index, distance = scored.distance);
            MatchResult {
                best: Some(scored.record),
                distance: scored.distance,
            }
        }
    };
    Ok(result)
}

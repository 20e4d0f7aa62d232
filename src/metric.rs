//! Signed mean-difference metric between two signatures.
//!
//! The grid with the larger width is the *primary* grid (ties go to the first
//! argument). Every primary sample is paired with the secondary sample at the
//! remapped coordinate, and the signed differences `secondary - primary` are
//! summed and divided by the primary area.
//!
//! The per-sample term is signed, not absolute: deviations of opposite sign
//! cancel, so two signatures that differ symmetrically around the same mean
//! can score near zero, and since the matcher keeps the lowest value a
//! non-identical candidate can outrank an exact one.
//! The metric is also not symmetric, since the sampling grid depends on which
//! argument is primary.

use crate::image::SampleView;
use crate::remap::{remap, remap_table};

/// Raw accumulation of one pairwise comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Comparison {
    /// Sum of `secondary - primary` over the primary grid.
    pub total: i64,
    /// Number of primary samples visited (the divisor).
    pub samples: usize,
}

impl Comparison {
    /// Returns the signed mean difference.
    pub fn distance(&self) -> f32 {
        (self.total as f64 / self.samples as f64) as f32
    }
}

/// Orders a pair so the wider grid comes first.
#[inline]
fn orient<'a>(a: SampleView<'a>, b: SampleView<'a>) -> (SampleView<'a>, SampleView<'a>) {
    if a.width() >= b.width() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Accumulates the signed difference sum between `a` and `b`.
pub fn compare(a: SampleView<'_>, b: SampleView<'_>) -> Comparison {
    let (primary, secondary) = orient(a, b);
    let (pw, ph) = (primary.width(), primary.height());
    let (sw, sh) = (secondary.width(), secondary.height());

    let cols = remap_table(pw, sw);
    let p_data = primary.as_slice();
    let s_data = secondary.as_slice();
    let p_stride = pw as usize;
    let s_stride = sw as usize;

    let mut total = 0i64;
    for y in 0..ph {
        let sy = remap(y, ph, sh) as usize;
        let p_row = &p_data[y as usize * p_stride..][..p_stride];
        let s_row = &s_data[sy * s_stride..][..s_stride];
        let row_sum: i64 = p_row
            .iter()
            .zip(cols.iter())
            .map(|(&p, &sx)| i64::from(s_row[sx]) - i64::from(p))
            .sum();
        total += row_sum;
    }

    Comparison {
        total,
        samples: p_data.len(),
    }
}

/// Computes the signed mean difference between two signatures.
pub fn signature_distance(a: SampleView<'_>, b: SampleView<'_>) -> f32 {
    compare(a, b).distance()
}

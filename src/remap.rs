//! Proportional coordinate remapping between grids of different extents.
//!
//! Instead of resampling one signature to the other's resolution, the metric
//! translates each coordinate of the larger grid onto the smaller one on the
//! fly. The mapping is `floor(coord * target / source)`, evaluated in integer
//! arithmetic so equal extents map every coordinate to itself.

/// Maps `coord` in `[0, source)` to the proportional index in `[0, target)`.
///
/// The result is clamped to `target - 1`, so it is always a valid index even
/// when `coord` lies outside the source extent. Returns 0 when either extent
/// is zero.
#[inline]
pub fn remap(coord: u32, source: u32, target: u32) -> u32 {
    if source == 0 || target == 0 {
        return 0;
    }
    if source == target {
        return coord.min(target - 1);
    }
    let scaled = u64::from(coord) * u64::from(target) / u64::from(source);
    scaled.min(u64::from(target - 1)) as u32
}

/// Precomputes `remap(i, source, target)` for every `i` in `0..source`.
pub(crate) fn remap_table(source: u32, target: u32) -> Vec<usize> {
    (0..source)
        .map(|coord| remap(coord, source, target) as usize)
        .collect()
}

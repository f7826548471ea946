/// 2D point type in page coordinates.
pub type Point2 = nalgebra::Point2<f64>;

/// Tile size of the reference deployment, in page units.
pub const DEFAULT_TILE_SIZE: f64 = 70.0;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Rounds `value` to the nearest multiple of `alignment`.
///
/// Half-way values round toward positive infinity, so `-35` aligned to `70`
/// gives `0` rather than `-70`.
#[must_use]
pub fn align_to(value: f64, alignment: f64) -> f64 {
    (value / alignment + 0.5).floor() * alignment
}

/// Number of whole tiles covered by `length`, rounded to the nearest tile.
///
/// Negative lengths yield zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn tile_count(length: f64, tile_size: f64) -> usize {
    let count = (length / tile_size + 0.5).floor();
    if count <= 0.0 {
        0
    } else {
        count as usize
    }
}

use super::{axis, interpolate_sorted, point};
use crate::error::DataError;
use crate::tables::Grid2D;

/// `threshold` 이상인 가장 작은 열 헤더의 위치.
///
/// 그런 열이 없으면 `fallback_to_last` 일 때 마지막 열, 아니면 `ColumnOutOfRange`.
pub fn select_column_by_threshold(
    grid: &Grid2D,
    threshold: f64,
    fallback_to_last: bool,
) -> Result<usize, DataError> {
    match grid.cols().iter().position(|&c| c >= threshold) {
        Some(i) => Ok(i),
        None if fallback_to_last => Ok(grid.cols().len() - 1),
        None => Err(DataError::ColumnOutOfRange(threshold)),
    }
}

/// 선택한 열의 값을 행 헤더에 대해 `y` 에서 보간한다.
pub fn max_column_interpolate(
    grid: &Grid2D,
    threshold: f64,
    y: f64,
    use_log: bool,
    extrapolate: bool,
    fallback_to_last: bool,
) -> Result<f64, DataError> {
    let c = select_column_by_threshold(grid, threshold, fallback_to_last)?;
    let labels = axis(grid.rows(), use_log);
    let (xs, zs): (Vec<f64>, Vec<f64>) = labels
        .into_iter()
        .zip(grid.column(c))
        .filter_map(|(x, z)| z.map(|z| (x, z)))
        .unzip();
    interpolate_sorted(&xs, &zs, point(y, use_log), extrapolate)
}

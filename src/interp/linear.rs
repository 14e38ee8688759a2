use super::search_left;
use crate::error::DataError;
use crate::tables::Grid1D;

/// 1차원 격자 선형 보간. 범위 밖은 `extrapolate` 일 때만 양 끝 기울기로 연장한다.
pub fn interpolate_1d(grid: &Grid1D, x: f64, extrapolate: bool) -> Result<f64, DataError> {
    interpolate_sorted(grid.xs(), grid.ys(), x, extrapolate)
}

/// 오름차순(중복 허용) `xs` 에 대한 선형 보간.
pub fn interpolate_sorted(
    xs: &[f64],
    ys: &[f64],
    x: f64,
    extrapolate: bool,
) -> Result<f64, DataError> {
    let n = xs.len().min(ys.len());
    if n == 0 || x.is_nan() {
        return Err(DataError::out_of_range("interpolation axis"));
    }
    if n == 1 {
        return if x == xs[0] {
            Ok(ys[0])
        } else {
            Err(DataError::out_of_range("interpolation axis"))
        };
    }
    if !extrapolate && (x < xs[0] || x > xs[n - 1]) {
        return Err(DataError::out_of_range("interpolation axis"));
    }

    let hi = search_left(&xs[..n], x).clamp(1, n - 1);
    let lo = hi - 1;
    let dx = xs[hi] - xs[lo];
    if dx == 0.0 {
        return Ok(ys[lo]);
    }
    let frac = (x - xs[lo]) / dx;
    Ok(ys[lo] + frac * (ys[hi] - ys[lo]))
}

/// 정렬되지 않은 (x, y) 쌍을 x 기준으로 안정 정렬한 뒤 보간한다.
pub fn interpolate_pairs(
    mut pairs: Vec<(f64, f64)>,
    x: f64,
    extrapolate: bool,
) -> Result<f64, DataError> {
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    let (xs, ys): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
    interpolate_sorted(&xs, &ys, x, extrapolate)
}

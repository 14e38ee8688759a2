use super::{axis, interpolate_sorted, log10_or_floor, point, search_left};
use crate::error::DataError;
use crate::tables::Grid2D;

/// 2차원 보간 설정. 각 축과 값의 로그 변환, 열 축 외삽 여부.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interp2d {
    pub log_col: bool,
    pub log_row: bool,
    pub log_data: bool,
    pub extrapolate: bool,
}

impl Interp2d {
    pub const LINEAR: Interp2d = Interp2d {
        log_col: false,
        log_row: false,
        log_data: false,
        extrapolate: false,
    };

    pub fn extrapolating(mut self, extrapolate: bool) -> Self {
        self.extrapolate = extrapolate;
        self
    }
}

/// 격자를 (열 값, 행 값) 에서 보간한다.
///
/// 행 축은 `extrapolate` 와 무관하게 범위를 벗어나면 `OutOfRange` 이다.
/// 외삽 시에는 모든 열 헤더에서 행 방향 보간값을 만든 뒤 그 곡선을 열 방향으로 보간/외삽한다.
pub fn interpolate_2d(grid: &Grid2D, col: f64, row: f64, opts: Interp2d) -> Result<f64, DataError> {
    let cols = axis(grid.cols(), opts.log_col);
    let rows = axis(grid.rows(), opts.log_row);
    let col = point(col, opts.log_col);
    let row = point(row, opts.log_row);

    if row.is_nan() || row < rows[0] || row > rows[rows.len() - 1] {
        return Err(DataError::out_of_range("table row"));
    }
    let (r_lo, r_hi, w) = bracket(&rows, row);
    let value = |r: usize, c: usize| {
        grid.cell(r, c)
            .map(|z| if opts.log_data { log10_or_floor(z) } else { z })
    };

    let z = if opts.extrapolate {
        let mut xs = Vec::with_capacity(cols.len());
        let mut zs = Vec::with_capacity(cols.len());
        for (c, &x) in cols.iter().enumerate() {
            if let Some(z) = blend(&[(value(r_lo, c), 1.0 - w), (value(r_hi, c), w)]) {
                xs.push(x);
                zs.push(z);
            }
        }
        if xs.len() < 2 {
            return Err(DataError::out_of_range("table cell"));
        }
        interpolate_sorted(&xs, &zs, col, true)?
    } else {
        if col.is_nan() || col < cols[0] || col > cols[cols.len() - 1] {
            return Err(DataError::out_of_range("table column"));
        }
        let (c_lo, c_hi, u) = bracket(&cols, col);
        blend(&[
            (value(r_lo, c_lo), (1.0 - w) * (1.0 - u)),
            (value(r_lo, c_hi), (1.0 - w) * u),
            (value(r_hi, c_lo), w * (1.0 - u)),
            (value(r_hi, c_hi), w * u),
        ])
        .ok_or_else(|| DataError::out_of_range("table cell"))?
    };

    Ok(if opts.log_data { 10f64.powf(z) } else { z })
}

/// 오름차순 축에서 `v` 를 감싸는 두 위치와 상위 가중치.
pub(crate) fn bracket(axis: &[f64], v: f64) -> (usize, usize, f64) {
    if axis.len() == 1 {
        return (0, 0, 0.0);
    }
    let hi = search_left(axis, v).clamp(1, axis.len() - 1);
    let lo = hi - 1;
    (lo, hi, (v - axis[lo]) / (axis[hi] - axis[lo]))
}

/// 가중합. 가중치가 0 인 칸은 비어 있어도 된다.
pub(crate) fn blend(terms: &[(Option<f64>, f64)]) -> Option<f64> {
    let mut sum = 0.0;
    for &(z, weight) in terms {
        if weight == 0.0 {
            continue;
        }
        sum += z? * weight;
    }
    Some(sum)
}

use super::bilinear::blend;
use super::{interpolate_pairs, is_close, log10_or_floor, search_left};
use crate::error::DataError;
use crate::tables::Grid2D;

/// 행 값에서 목표 값 `target` 을 주는 열 값을 찾는다. (예: 온도, 응력 → 파단 시간)
///
/// 행 값의 양옆 행을 선형 보간해 열별 값 `v` 를 만든다.
/// `target` 이 `v[0]` 과 거의 같으면 평탄 구간으로 보고 순위로 열을 고른다.
/// 그 밖에는 `v` 에 대해 (로그) 열 헤더를 선형 보간/외삽한다.
pub fn inverse_column_lookup(
    grid: &Grid2D,
    row: f64,
    target: f64,
    extrapolate: bool,
    use_log: bool,
) -> Result<f64, DataError> {
    let rows = grid.rows();
    if row.is_nan() || row < rows[0] || row > rows[rows.len() - 1] {
        return Err(DataError::out_of_range("table row"));
    }

    let profile = row_profile(grid, row);
    let Some(&(_, first)) = profile.first() else {
        return Err(DataError::out_of_range("table cell"));
    };

    if is_close(target, first) {
        return Ok(rank_tie_break(&profile, target));
    }

    let pairs = profile
        .iter()
        .map(|&(header, v)| (v, if use_log { log10_or_floor(header) } else { header }))
        .collect();
    let x = interpolate_pairs(pairs, target, extrapolate)?;
    Ok(if use_log { 10f64.powf(x) } else { x })
}

/// (열 헤더, 보간 값) 목록. 값이 없는 열은 빠진다.
fn row_profile(grid: &Grid2D, row: f64) -> Vec<(f64, f64)> {
    let rows = grid.rows();
    let last = rows.len() - 1;
    let (lo, hi, w_lo) = if is_close(row, rows[0]) {
        (0, 0, 1.0)
    } else if is_close(row, rows[last]) {
        (last, last, 1.0)
    } else {
        let hi = search_left(rows, row).clamp(1, last);
        (hi - 1, hi, (rows[hi] - row) / (rows[hi] - rows[hi - 1]))
    };

    grid.cols()
        .iter()
        .enumerate()
        .filter_map(|(c, &header)| {
            let v = if lo == hi {
                grid.cell(lo, c)
            } else {
                blend(&[(grid.cell(lo, c), w_lo), (grid.cell(hi, c), 1.0 - w_lo)])
            }?;
            Some((header, v))
        })
        .collect()
}

/// 값을 안정 정렬한 뒤 `target` 의 오른쪽 삽입 위치 바로 앞 항목의 열 헤더.
/// 삽입 위치가 0 이면 마지막 항목으로 돌아간다.
fn rank_tie_break(profile: &[(f64, f64)], target: f64) -> f64 {
    let mut order: Vec<usize> = (0..profile.len()).collect();
    order.sort_by(|&a, &b| profile[a].1.total_cmp(&profile[b].1));
    let k = order.partition_point(|&i| profile[i].1 <= target);
    let pick = if k == 0 { order.len() - 1 } else { k - 1 };
    profile[order[pick]].0
}

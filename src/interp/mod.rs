//! 코드 테이블 보간/외삽과 역조회.
//!
//! 로그 축에서 0 이하 값은 -1e6 으로 대체한다.

pub mod bilinear;
pub mod column;
pub mod inverse;
pub mod linear;

pub use bilinear::{interpolate_2d, Interp2d};
pub use column::{max_column_interpolate, select_column_by_threshold};
pub use inverse::inverse_column_lookup;
pub use linear::{interpolate_1d, interpolate_pairs, interpolate_sorted};

/// 로그 변환에서 0 이하 값을 대신하는 값.
pub const LOG_FLOOR: f64 = -1.0e6;

const CLOSE_ATOL: f64 = 1.0e-8;
const CLOSE_RTOL: f64 = 1.0e-5;

/// `|a - b| <= 1e-8 + 1e-5 * |b|` 이면 참. 기준값은 `b` 이다.
pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= CLOSE_ATOL + CLOSE_RTOL * b.abs()
}

/// 양수면 log10, 아니면 [`LOG_FLOOR`].
pub fn log10_or_floor(v: f64) -> f64 {
    if v > 0.0 {
        v.log10()
    } else {
        LOG_FLOOR
    }
}

pub(crate) fn axis(values: &[f64], log: bool) -> Vec<f64> {
    if log {
        values.iter().copied().map(log10_or_floor).collect()
    } else {
        values.to_vec()
    }
}

pub(crate) fn point(value: f64, log: bool) -> f64 {
    if log {
        log10_or_floor(value)
    } else {
        value
    }
}

/// `v` 이상인 첫 위치 (왼쪽 삽입 위치).
pub(crate) fn search_left(sorted: &[f64], v: f64) -> usize {
    sorted.partition_point(|&x| x < v)
}

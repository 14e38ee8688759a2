//! 등시 곡선, 고온 인장 곡선, 이완 해석.

pub mod curve;
pub mod generator;
pub mod inversion;
pub mod offset;
pub mod relaxation;

pub use curve::{Curve, CurveKind, CurvePoint, CurvePoints};
pub use generator::{CurveGenerator, TimeBounds};
pub use offset::{offset, DEFAULT_OFFSET};
pub use relaxation::{OdeOptions, RateSettings};

/// 기본 변형률 격자의 최대값.
pub const DEFAULT_STRAIN_MAX: f64 = 0.022;
/// 기본 변형률 격자의 점 개수.
pub const DEFAULT_STRAIN_POINTS: usize = 50;

/// `[start, end]` 를 `n` 개 점으로 균등 분할한다. 양 끝 포함.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// 기본 변형률 격자 0 ~ 0.022, 50 점.
pub fn default_strains() -> Vec<f64> {
    linspace(0.0, DEFAULT_STRAIN_MAX, DEFAULT_STRAIN_POINTS)
}

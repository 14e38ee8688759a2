//! 설계 피로 곡선: 사이클 수 ↔ 변형률 범위.

use crate::error::DataError;
use crate::interp::max_column_interpolate;
use crate::material::MaterialId;
use crate::solver::brentq;
use crate::tables::{DataKind, TableStore};

/// 파손 사이클 역산 구간.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for CycleBounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0e12,
        }
    }
}

/// 최대 온도 `max_t_c` 에서 `cycles` 사이클에 파손되는 변형률 범위.
///
/// 최대 온도보다 크거나 같은 첫 열을 쓰며, 그런 열이 없으면 `ColumnOutOfRange`.
pub fn strain_to_failure(
    store: &TableStore,
    material: MaterialId,
    max_t_c: f64,
    cycles: f64,
    extrapolate: bool,
) -> Result<f64, DataError> {
    let table = store.load_2d(material, DataKind::Fatigue)?;
    max_column_interpolate(&table, max_t_c, cycles, true, extrapolate, false).map_err(|e| match e {
        DataError::ColumnOutOfRange(_) => e,
        _ => DataError::out_of_range("cycles"),
    })
}

/// 변형률 범위 `strain_range` 에서 파손까지의 사이클 수.
///
/// 최대 온도가 모든 열보다 높으면 마지막 열을 쓴다.
pub fn cycles_to_failure(
    store: &TableStore,
    material: MaterialId,
    max_t_c: f64,
    strain_range: f64,
    extrapolate: bool,
    bounds: CycleBounds,
) -> Result<f64, DataError> {
    let table = store.load_2d(material, DataKind::Fatigue)?;
    brentq(
        |n| Ok(strain_range - max_column_interpolate(&table, max_t_c, n, true, extrapolate, true)?),
        bounds.min,
        bounds.max,
    )
    .map_err(|_| DataError::out_of_range("temperature or strain range"))
}

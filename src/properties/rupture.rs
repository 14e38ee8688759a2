//! 최소 파단 응력 S_r 과 그 역조회(파단 시간).

use crate::error::DataError;
use crate::interp::{interpolate_2d, inverse_column_lookup, Interp2d};
use crate::material::MaterialId;
use crate::tables::{DataKind, TableStore};

// 시간 축과 응력 값은 로그, 온도 축은 선형
const SR_INTERP: Interp2d = Interp2d {
    log_col: true,
    log_row: false,
    log_data: true,
    extrapolate: false,
};

/// 온도 `t_c`, 시간 `time_h` 에서의 S_r (MPa).
pub fn rupture_stress(
    store: &TableStore,
    material: MaterialId,
    t_c: f64,
    time_h: f64,
    extrapolate: bool,
) -> Result<f64, DataError> {
    let table = store.load_2d(material, DataKind::RuptureStress)?;
    interpolate_2d(&table, time_h, t_c, SR_INTERP.extrapolating(extrapolate))
}

/// 온도 `t_c` 에서 응력 `stress` 로 파단되는 시간 (h).
pub fn rupture_time(
    store: &TableStore,
    material: MaterialId,
    t_c: f64,
    stress: f64,
    extrapolate: bool,
) -> Result<f64, DataError> {
    let table = store.load_2d(material, DataKind::RuptureStress)?;
    inverse_column_lookup(&table, t_c, stress, extrapolate, true)
}

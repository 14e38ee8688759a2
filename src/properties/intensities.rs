//! 1차 응력 허용 강도 S_m, S_t, S_mt, S_o.

use super::strength::{ultimate_tensile_stress, yield_stress, Aging};
use crate::error::DataError;
use crate::interp::{interpolate_1d, interpolate_2d, inverse_column_lookup, Interp2d};
use crate::material::MaterialId;
use crate::tables::{DataKind, TableStore};

/// 상온 (°C).
pub const ROOM_TEMPERATURE: f64 = 20.0;

// 시간 축과 값은 로그, 온도 축은 선형
const ST_INTERP: Interp2d = Interp2d {
    log_col: true,
    log_row: false,
    log_data: true,
    extrapolate: false,
};

/// 시간 무관 허용 강도 S_m.
///
/// 상온/해당 온도 인장강도의 1/3, 상온 항복강도의 2/3, 해당 온도 항복강도의 0.9
/// (304, 316, 800H, A617) 또는 2/3 (그 밖) 중 최솟값이다.
/// `aging` 의 감소 계수 온도는 네 항 모두 `t_c` (또는 지정한 온도) 를 쓴다.
pub fn s_m(
    store: &TableStore,
    material: MaterialId,
    t_c: f64,
    aging: Option<Aging>,
) -> Result<f64, DataError> {
    let aging = aging.map(|a| Aging {
        reduce_t_c: Some(a.reduce_t_c.unwrap_or(t_c)),
        ..a
    });
    let hot_yield = match material {
        MaterialId::Ss304 | MaterialId::Ss316 | MaterialId::Alloy800H | MaterialId::A617 => 0.9,
        _ => 2.0 / 3.0,
    };
    let values = [
        ultimate_tensile_stress(store, material, ROOM_TEMPERATURE, aging)? / 3.0,
        ultimate_tensile_stress(store, material, t_c, aging)? / 3.0,
        2.0 * yield_stress(store, material, ROOM_TEMPERATURE, aging)? / 3.0,
        hot_yield * yield_stress(store, material, t_c, aging)?,
    ];
    Ok(values.into_iter().fold(f64::INFINITY, f64::min))
}

/// 시간 의존 허용 강도 S_t. 1 h 미만은 1 h 로 본다.
pub fn s_t(
    store: &TableStore,
    material: MaterialId,
    t_c: f64,
    time_h: f64,
    extrapolate: bool,
) -> Result<f64, DataError> {
    let table = store.load_2d(material, DataKind::AllowableSt)?;
    interpolate_2d(&table, time_h.max(1.0), t_c, ST_INTERP.extrapolating(extrapolate))
        .map_err(|_| DataError::out_of_range("temperature or time"))
}

/// 온도 `t_c` 에서 S_t 가 `stress` 가 되는 시간 (h).
pub fn time_s_t(
    store: &TableStore,
    material: MaterialId,
    t_c: f64,
    stress: f64,
    extrapolate: bool,
) -> Result<f64, DataError> {
    let table = store.load_2d(material, DataKind::AllowableSt)?;
    inverse_column_lookup(&table, t_c, stress, extrapolate, true)
}

/// S_mt = min(S_m, S_t).
pub fn s_mt(
    store: &TableStore,
    material: MaterialId,
    t_c: f64,
    time_h: f64,
    extrapolate: bool,
    aging: Option<Aging>,
) -> Result<f64, DataError> {
    let sm = s_m(store, material, t_c, aging)?;
    let st = s_t(store, material, t_c, time_h, extrapolate)?;
    Ok(sm.min(st))
}

/// 설계 허용 강도 S_o. 테이블 밖은 `OutOfRange("temperature")`.
pub fn s_o(store: &TableStore, material: MaterialId, t_c: f64) -> Result<f64, DataError> {
    let table = store.load_1d(material, DataKind::AllowableSo)?;
    interpolate_1d(&table, t_c, false).map_err(|_| DataError::out_of_range("temperature"))
}

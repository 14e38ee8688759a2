//! 열팽창 계수, 열전도도, 열확산 계수.

use crate::error::DataError;
use crate::interp::interpolate_1d;
use crate::material::MaterialId;
use crate::tables::{DataKind, TableStore};

const MICRO: f64 = 1.0e-6;

fn lookup(
    store: &TableStore,
    material: MaterialId,
    kind: DataKind,
    t_c: f64,
    extrapolate: bool,
) -> Result<f64, DataError> {
    let table = store.load_1d(material, kind)?;
    interpolate_1d(&table, t_c, extrapolate).map_err(|_| DataError::out_of_range("temperature"))
}

/// 순간 열팽창 계수 (1/°C).
pub fn cte(store: &TableStore, material: MaterialId, t_c: f64, extrapolate: bool) -> Result<f64, DataError> {
    Ok(lookup(store, material, DataKind::Cte, t_c, extrapolate)? * MICRO)
}

/// 열전도도 (W/m·K).
pub fn ctc(store: &TableStore, material: MaterialId, t_c: f64, extrapolate: bool) -> Result<f64, DataError> {
    lookup(store, material, DataKind::Ctc, t_c, extrapolate)
}

/// 열확산 계수 (m²/s). 테이블은 mm²/s 로 저장한다.
pub fn ctd(store: &TableStore, material: MaterialId, t_c: f64, extrapolate: bool) -> Result<f64, DataError> {
    Ok(lookup(store, material, DataKind::Ctd, t_c, extrapolate)? * MICRO)
}

//! 항복강도, 인장강도와 장시간 사용에 따른 강도 감소 계수.

use crate::error::DataError;
use crate::interp::{interpolate_1d, interpolate_2d, Interp2d};
use crate::material::MaterialId;
use crate::tables::{DataKind, TableStore};

/// 강도 감소 계수를 적용할 사용 이력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aging {
    /// 사용 시간 또는 등가 사용 시간 (h)
    pub time_h: f64,
    /// 감소 계수용 온도. `None` 이면 평가 온도를 쓴다.
    pub reduce_t_c: Option<f64>,
}

impl Aging {
    pub fn at(time_h: f64) -> Self {
        Self {
            time_h,
            reduce_t_c: None,
        }
    }

    fn temperature(&self, t_c: f64) -> f64 {
        self.reduce_t_c.unwrap_or(t_c)
    }
}

/// 온도 `t_c` 의 항복강도 S_y (MPa). `aging` 이 있으면 감소 계수를 곱한다.
pub fn yield_stress(
    store: &TableStore,
    material: MaterialId,
    t_c: f64,
    aging: Option<Aging>,
) -> Result<f64, DataError> {
    let table = store.load_1d(material, DataKind::Yield)?;
    let factor = match aging {
        Some(a) => yield_strength_reduction_factor(store, material, a.time_h, a.temperature(t_c))?,
        None => 1.0,
    };
    let sy = interpolate_1d(&table, t_c, false).map_err(|_| DataError::out_of_range("temperature"))?;
    Ok(factor * sy)
}

/// 온도 `t_c` 의 인장강도 S_u (MPa). `aging` 이 있으면 감소 계수를 곱한다.
pub fn ultimate_tensile_stress(
    store: &TableStore,
    material: MaterialId,
    t_c: f64,
    aging: Option<Aging>,
) -> Result<f64, DataError> {
    let table = store.load_1d(material, DataKind::Ultimate)?;
    let factor = match aging {
        Some(a) => tensile_strength_reduction_factor(store, material, a.time_h, a.temperature(t_c))?,
        None => 1.0,
    };
    let su = interpolate_1d(&table, t_c, false).map_err(|_| DataError::out_of_range("temperature"))?;
    Ok(factor * su)
}

/// 항복강도 감소 계수.
///
/// 800H 는 730 °C 이상에서 0.9, 2.25Cr-1Mo 는 425 °C 이상·1 h 이상에서 표를 쓴다.
pub fn yield_strength_reduction_factor(
    store: &TableStore,
    material: MaterialId,
    time_h: f64,
    t_c: f64,
) -> Result<f64, DataError> {
    match material {
        MaterialId::Alloy800H if t_c >= 730.0 => Ok(0.9),
        MaterialId::Cr2Mo if t_c >= 425.0 && time_h >= 1.0 => {
            reduction_table(store, material, DataKind::ReductionYield, time_h, t_c)
        }
        MaterialId::A740H => Err(DataError::MissingData(material.code().to_string())),
        _ => Ok(1.0),
    }
}

/// 인장강도 감소 계수.
///
/// 304/316 은 480 °C 이상에서 0.8, 800H 는 730 °C 이상에서 0.9 이다.
/// 2.25Cr-1Mo(425 °C 이상)와 gr91(480 °C 이상)은 1 h 이상에서 표를 쓴다.
pub fn tensile_strength_reduction_factor(
    store: &TableStore,
    material: MaterialId,
    time_h: f64,
    t_c: f64,
) -> Result<f64, DataError> {
    match material {
        MaterialId::Ss304 | MaterialId::Ss316 if t_c >= 480.0 => Ok(0.8),
        MaterialId::Alloy800H if t_c >= 730.0 => Ok(0.9),
        MaterialId::Cr2Mo if t_c >= 425.0 && time_h >= 1.0 => {
            reduction_table(store, material, DataKind::ReductionTensile, time_h, t_c)
        }
        MaterialId::Gr91 if t_c >= 480.0 && time_h >= 1.0 => {
            reduction_table(store, material, DataKind::ReductionTensile, time_h, t_c)
        }
        MaterialId::A740H => Err(DataError::MissingData(material.code().to_string())),
        _ => Ok(1.0),
    }
}

fn reduction_table(
    store: &TableStore,
    material: MaterialId,
    kind: DataKind,
    time_h: f64,
    t_c: f64,
) -> Result<f64, DataError> {
    let table = store.load_2d(material, kind)?;
    interpolate_2d(&table, time_h, t_c, Interp2d::LINEAR)
}

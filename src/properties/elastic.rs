//! 온도별 탄성계수와 포아송비.

use std::sync::Arc;

use crate::error::DataError;
use crate::interp::interpolate_1d;
use crate::material::MaterialId;
use crate::tables::{DataKind, Grid1D, TableStore};

const GPA_TO_MPA: f64 = 1000.0;

/// 재료의 탄성계수 테이블(GPa 저장, MPa 반환).
#[derive(Debug, Clone)]
pub struct YoungsModulus {
    table: Arc<Grid1D>,
}

impl YoungsModulus {
    pub fn load(store: &TableStore, material: MaterialId) -> Result<Self, DataError> {
        Ok(Self {
            table: store.load_1d(material, DataKind::Youngs)?,
        })
    }

    /// 온도 `t_c` (°C) 에서의 탄성계수 (MPa).
    pub fn at(&self, t_c: f64, extrapolate: bool) -> Result<f64, DataError> {
        interpolate_1d(&self.table, t_c, extrapolate)
            .map(|e| e * GPA_TO_MPA)
            .map_err(|_| DataError::out_of_range("temperature"))
    }
}

/// 탄성계수 (MPa). 테이블 범위 밖은 `extrapolate` 가 아니면 `OutOfRange("temperature")`.
pub fn youngs(
    store: &TableStore,
    material: MaterialId,
    t_c: f64,
    extrapolate: bool,
) -> Result<f64, DataError> {
    YoungsModulus::load(store, material)?.at(t_c, extrapolate)
}

/// 온도 무관 포아송비.
pub fn poissons(material: MaterialId) -> f64 {
    material.poissons()
}

/// 전단 탄성계수 μ = E / (2(1 + ν)).
pub fn shear_modulus(youngs_mpa: f64, poissons: f64) -> f64 {
    youngs_mpa / (2.0 * (1.0 + poissons))
}

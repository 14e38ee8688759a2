use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::curve::{Curve, CurveKind, CurvePoint};
use super::inversion;
use super::relaxation::{self, RateSettings};
use crate::error::DataError;
use crate::material::MaterialId;
use crate::models::{select_model, ConstitutiveModel};
use crate::properties::elastic::YoungsModulus;
use crate::solver::brentq;
use crate::tables::TableStore;

/// 변형률 → 시간 역산 구간 (h).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for TimeBounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 300_000.0,
        }
    }
}

/// 재료별 구성 모델과 테이블 저장소를 묶어 곡선과 이완 이력을 만든다.
#[derive(Debug, Clone)]
pub struct CurveGenerator {
    store: Arc<TableStore>,
}

impl Default for CurveGenerator {
    fn default() -> Self {
        Self::new(Arc::new(TableStore::bundled()))
    }
}

impl CurveGenerator {
    pub fn new(store: Arc<TableStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TableStore {
        &self.store
    }

    pub fn model(&self, material: MaterialId) -> Result<Box<dyn ConstitutiveModel>, DataError> {
        select_model(&self.store, material)
    }

    /// 고온 인장 곡선 위의 한 점.
    pub fn hot_tensile(
        &self,
        material: MaterialId,
        strain: f64,
        t_c: f64,
    ) -> Result<CurvePoint, DataError> {
        let model = self.model(material)?;
        let stress = inversion::hot_tensile(model.as_ref(), strain, t_c)?;
        Ok(CurvePoint {
            strain,
            stress,
            temperature: t_c,
            time: 0.0,
        })
    }

    /// 등시 곡선 위의 한 점.
    pub fn isochronous(
        &self,
        material: MaterialId,
        strain: f64,
        t_c: f64,
        time_h: f64,
    ) -> Result<CurvePoint, DataError> {
        let model = self.model(material)?;
        let stress = inversion::isochronous(model.as_ref(), strain, t_c, time_h)?;
        Ok(CurvePoint {
            strain,
            stress,
            temperature: t_c,
            time: time_h,
        })
    }

    /// 고온 인장 곡선. 점은 [`Curve::points`] 로 필요할 때 계산된다.
    pub fn hot_tensile_curve(
        &self,
        material: MaterialId,
        t_c: f64,
        strains: Vec<f64>,
    ) -> Result<Curve, DataError> {
        Ok(Curve::new(
            self.model(material)?,
            t_c,
            CurveKind::HotTensile,
            strains,
        ))
    }

    /// 설계 수명 `time_h` 에서의 등시 곡선.
    pub fn isochronous_curve(
        &self,
        material: MaterialId,
        t_c: f64,
        time_h: f64,
        strains: Vec<f64>,
    ) -> Result<Curve, DataError> {
        Ok(Curve::new(
            self.model(material)?,
            t_c,
            CurveKind::Isochronous { time_h },
            strains,
        ))
    }

    /// 주어진 온도, 시간, 응력에서의 총 변형률.
    pub fn total_strain(
        &self,
        material: MaterialId,
        t_c: f64,
        time_h: f64,
        stress: f64,
    ) -> Result<f64, DataError> {
        self.model(material)?.total(stress, t_c, time_h)
    }

    /// 응력 `stress` 에서 총 변형률이 `strain` 에 도달하는 시간.
    pub fn time_from_stress_strain(
        &self,
        material: MaterialId,
        t_c: f64,
        stress: f64,
        strain: f64,
        bounds: TimeBounds,
    ) -> Result<f64, DataError> {
        let model = self.model(material)?;
        brentq(
            |t| Ok(model.total(stress, t_c, t)? - strain),
            bounds.min,
            bounds.max,
        )
        .map_err(|e| e.into_data_error("time"))
    }

    /// 일정 변형률 등시 곡선법 이완 해석.
    pub fn relaxation_by_isochronous(
        &self,
        material: MaterialId,
        t_c: f64,
        strain: f64,
        times: &[f64],
    ) -> Result<Vec<f64>, DataError> {
        let model = self.model(material)?;
        relaxation::by_isochronous(model.as_ref(), t_c, strain, times)
    }

    /// 초기 응력 기준 등시 곡선법 이완 해석.
    pub fn relaxation_by_isochronous_stress(
        &self,
        material: MaterialId,
        t_c: f64,
        stress: f64,
        times: &[f64],
    ) -> Result<Vec<f64>, DataError> {
        let model = self.model(material)?;
        relaxation::by_isochronous_stress(model.as_ref(), t_c, stress, times)
    }

    /// 크리프 속도 적분 이완 해석.
    pub fn relaxation_by_rate(
        &self,
        material: MaterialId,
        t_c: f64,
        stress: f64,
        times: &[f64],
        settings: RateSettings,
    ) -> Result<Vec<f64>, DataError> {
        let model = self.model(material)?;
        let youngs = YoungsModulus::load(&self.store, material)?;
        relaxation::by_rate(model.as_ref(), &youngs, t_c, stress, times, settings)
    }
}

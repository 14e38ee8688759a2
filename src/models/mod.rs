//! 재료별 탄성/소성/크리프 변형률 구성 방정식.
//!
//! 응력은 MPa, 온도는 °C, 시간은 시간(h), 변형률은 공칭(mm/mm) 단위이다.

pub mod a617;
pub mod a740h;
pub mod alloy800h;
pub mod blackburn;
pub mod cr_mo;
pub mod gr91;

pub use a617::A617Model;
pub use a740h::A740HModel;
pub use alloy800h::Alloy800HModel;
pub use blackburn::{Blackburn304H, Blackburn316H};
pub use cr_mo::CrMoModel;
pub use gr91::Gr91Model;

use crate::error::DataError;
use crate::interp::interpolate_sorted;
use crate::material::MaterialId;
use crate::tables::TableStore;

/// 극한강도를 넘는 응력에서 돌려주는 큰 소성 변형률.
pub const SATURATED_STRAIN: f64 = 1.0;

/// 한 재료의 구성 방정식.
///
/// `elastic`, `plastic`, `creep` 만 구현하면 `tensile`, `total` 은 공통 정의를 쓴다.
pub trait ConstitutiveModel: Send + Sync {
    fn material(&self) -> MaterialId;

    /// 탄성 변형률.
    fn elastic(&self, stress: f64, t_c: f64) -> Result<f64, DataError>;

    /// 소성 변형률. 항복 전 0, 극한 초과 시 [`SATURATED_STRAIN`].
    fn plastic(&self, stress: f64, t_c: f64) -> Result<f64, DataError>;

    /// 크리프 변형률.
    fn creep(&self, stress: f64, t_c: f64, time_h: f64) -> Result<f64, DataError>;

    /// 응력 역산 구간 [하한, 상한] (MPa).
    fn bracket(&self) -> (f64, f64) {
        (0.0, 800.0)
    }

    /// 참이면 응력 0 에서 인장 변형률을 바로 0 으로 본다.
    fn unstrained_at_zero_stress(&self) -> bool {
        false
    }

    /// 탄성 + 소성 변형률.
    fn tensile(&self, stress: f64, t_c: f64) -> Result<f64, DataError> {
        if self.unstrained_at_zero_stress() && stress == 0.0 {
            return Ok(0.0);
        }
        Ok(self.elastic(stress, t_c)? + self.plastic(stress, t_c)?)
    }

    /// 탄성 + 소성 + 크리프 변형률.
    fn total(&self, stress: f64, t_c: f64, time_h: f64) -> Result<f64, DataError> {
        Ok(self.tensile(stress, t_c)? + self.creep(stress, t_c, time_h)?)
    }
}

/// 재료에 맞는 모델을 만든다. 탄성계수 테이블이 필요한 모델은 여기서 테이블을 읽는다.
pub fn select_model(
    store: &TableStore,
    material: MaterialId,
) -> Result<Box<dyn ConstitutiveModel>, DataError> {
    let model: Box<dyn ConstitutiveModel> = match material {
        MaterialId::Ss304 => Box::new(Blackburn304H),
        MaterialId::Ss316 => Box::new(Blackburn316H),
        MaterialId::Gr91 => Box::new(Gr91Model),
        MaterialId::A617 => Box::new(A617Model::load(store)?),
        MaterialId::Alloy800H => Box::new(Alloy800HModel::load(store)?),
        MaterialId::A740H => Box::new(A740HModel::load(store)?),
        MaterialId::Cr2Mo => Box::new(CrMoModel::load(store)?),
    };
    Ok(model)
}

/// 모델 내장 계수표의 온도 보간. 범위 밖은 `OutOfRange("temperature")`.
pub(crate) fn coefficient(temps: &[f64], values: &[f64], t_c: f64) -> Result<f64, DataError> {
    interpolate_sorted(temps, values, t_c, false).map_err(|_| DataError::out_of_range("temperature"))
}

/// 외삽을 허용하는 계수표 보간.
pub(crate) fn coefficient_extrapolated(temps: &[f64], values: &[f64], t_c: f64) -> f64 {
    // 외삽 모드의 보간은 비어 있지 않은 표에서 실패하지 않는다.
    interpolate_sorted(temps, values, t_c, true).unwrap_or(f64::NAN)
}

pub(crate) fn check_window(t_c: f64, lo: f64, hi: f64) -> Result<(), DataError> {
    if t_c < lo || t_c > hi {
        Err(DataError::out_of_range("temperature"))
    } else {
        Ok(())
    }
}

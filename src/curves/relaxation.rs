//! 일정 변형률에서의 응력 이완 해석.

use std::cell::RefCell;

use ode_solvers::dopri5::Dopri5;
use ode_solvers::{System, Vector1};

use super::inversion::{hot_tensile, isochronous};
use crate::error::DataError;
use crate::interp::is_close;
use crate::models::ConstitutiveModel;
use crate::properties::elastic::YoungsModulus;

/// 등시 곡선법: 각 시각의 등시 곡선에서 `strain` 에 해당하는 응력.
///
/// 첫 시각이 0 이면 첫 응력은 고온 인장 곡선에서 구한다.
pub fn by_isochronous(
    model: &dyn ConstitutiveModel,
    t_c: f64,
    strain: f64,
    times: &[f64],
) -> Result<Vec<f64>, DataError> {
    let Some((&first, rest)) = times.split_first() else {
        return Ok(Vec::new());
    };
    let mut stresses = Vec::with_capacity(times.len());
    stresses.push(if is_close(first, 0.0) {
        hot_tensile(model, strain, t_c)?
    } else {
        isochronous(model, strain, t_c, first)?
    });
    for &t in rest {
        stresses.push(isochronous(model, strain, t_c, t)?);
    }
    Ok(stresses)
}

/// 초기 응력에서 시작하는 등시 곡선법. 기준 변형률은 `tensile(stress, T)` 이다.
pub fn by_isochronous_stress(
    model: &dyn ConstitutiveModel,
    t_c: f64,
    stress: f64,
    times: &[f64],
) -> Result<Vec<f64>, DataError> {
    let strain = model.tensile(stress, t_c)?;
    by_isochronous(model, t_c, strain, times)
}

/// DoPri5 허용오차.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OdeOptions {
    pub rtol: f64,
    pub atol: f64,
}

impl Default for OdeOptions {
    fn default() -> Self {
        Self {
            rtol: 1.49e-8,
            atol: 1.49e-8,
        }
    }
}

/// 속도 적분 설정.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSettings {
    /// 크리프 변형률 차분 간격 (h)
    pub dt: f64,
    /// 크리프 유효 여부를 확인할 때 쓰는 변형률
    pub check_strain: f64,
    pub ode: OdeOptions,
}

impl Default for RateSettings {
    fn default() -> Self {
        Self {
            dt: 0.1,
            check_strain: 0.01,
            ode: OdeOptions::default(),
        }
    }
}

type Stress = Vector1<f64>;

// 조밀 출력 시각이 적분 끝에 걸리지 않도록 구간을 이만큼 늘린다.
const OVERSHOOT: f64 = 1.0e-6;

/// dσ/dt = −E(T)·(ε_c(σ, t+dt) − ε_c(σ, t))/dt.
///
/// `System` 은 실패를 돌려줄 수 없으므로 첫 평가 오류를 `failure` 에 남기고 속도 0 으로 진행한다.
#[derive(Clone, Copy)]
struct RelaxationRate<'a> {
    model: &'a dyn ConstitutiveModel,
    t_c: f64,
    modulus: f64,
    dt: f64,
    failure: &'a RefCell<Option<DataError>>,
}

impl RelaxationRate<'_> {
    fn rate(&self, t: f64, stress: f64) -> Result<f64, DataError> {
        let d_creep =
            self.model.creep(stress, self.t_c, t + self.dt)? - self.model.creep(stress, self.t_c, t)?;
        Ok(-self.modulus * d_creep / self.dt)
    }

    /// `from` 에서 `stress` 로 시작해 `to` 의 응력까지 적분한다.
    fn advance(self, from: f64, to: f64, stress: f64, ode: OdeOptions) -> Result<f64, DataError> {
        if to <= from {
            return Ok(stress);
        }
        let span = to - from;
        let mut stepper = Dopri5::new(
            self,
            from,
            to + span * OVERSHOOT,
            span,
            Stress::new(stress),
            ode.rtol,
            ode.atol,
        );
        let result = stepper.integrate();
        if let Some(e) = self.failure.borrow_mut().take() {
            return Err(e);
        }
        result.map_err(|_| DataError::out_of_range("time"))?;

        match (stepper.x_out().last(), stepper.y_out().last()) {
            (Some(&x), Some(y)) if (x - to).abs() <= 2.0 * span * OVERSHOOT && y[0].is_finite() => {
                Ok(y[0])
            }
            _ => Err(DataError::out_of_range("time")),
        }
    }
}

impl System<f64, Stress> for RelaxationRate<'_> {
    fn system(&self, t: f64, y: &Stress, dy: &mut Stress) {
        dy[0] = match self.rate(t, y[0]) {
            Ok(v) => v,
            Err(e) => {
                let mut failure = self.failure.borrow_mut();
                if failure.is_none() {
                    *failure = Some(e);
                }
                0.0
            }
        };
    }
}

/// 크리프 속도 적분법: 응력 이완 속도식을 t = 0 부터 DoPri5 로 적분한다.
///
/// 첫 시각의 등시 곡선이 범위를 벗어나면(크리프 온도 영역 밖) 모든 시각에 초기 응력을 돌려준다.
/// 결과는 요청한 시각과 1:1 로 대응한다.
pub fn by_rate(
    model: &dyn ConstitutiveModel,
    youngs: &YoungsModulus,
    t_c: f64,
    stress: f64,
    times: &[f64],
    settings: RateSettings,
) -> Result<Vec<f64>, DataError> {
    let Some(&first) = times.first() else {
        return Ok(Vec::new());
    };
    if times.iter().any(|&t| t < 0.0) || times.windows(2).any(|w| w[1] < w[0]) {
        return Err(DataError::out_of_range("time"));
    }

    match isochronous(model, settings.check_strain, t_c, first) {
        Err(DataError::OutOfRange(_)) => return Ok(vec![stress; times.len()]),
        Err(e) => return Err(e),
        Ok(_) => {}
    }

    let failure = RefCell::new(None);
    let rate = RelaxationRate {
        model,
        t_c,
        modulus: youngs.at(t_c, true)?,
        dt: settings.dt,
        failure: &failure,
    };

    let mut history = Vec::with_capacity(times.len());
    let (mut t, mut s) = (0.0, stress);
    for &next in times {
        s = rate.advance(t, next, s, settings.ode)?;
        t = next;
        history.push(s);
    }
    Ok(history)
}

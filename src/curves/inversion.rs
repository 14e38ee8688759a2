//! 변형률 → 응력 역산.

use crate::error::DataError;
use crate::models::ConstitutiveModel;
use crate::solver::{secant, Bracket, SolveError};

/// 고온 인장 곡선 위의 응력: `tensile(σ, T) = strain` 의 해.
///
/// 모델 구간 양 끝의 부호가 같으면 구간 중앙에서 할선법을 한 번 시도한다.
pub fn hot_tensile(model: &dyn ConstitutiveModel, strain: f64, t_c: f64) -> Result<f64, DataError> {
    let mut residual = |s: f64| -> Result<f64, DataError> { Ok(strain - model.tensile(s, t_c)?) };
    let (lb, ub) = model.bracket();
    let solved = match Bracket::new(&mut residual, lb, ub) {
        Ok(bracket) => bracket.solve(&mut residual),
        Err(SolveError::NotBracketed { .. }) => secant(residual, (lb + ub) / 2.0),
        Err(e) => Err(e),
    };
    solved.map_err(|e| e.into_data_error("stress"))
}

/// 등시 곡선 위의 응력: `total(σ, T, time) = strain` 의 해. 대체 경로는 없다.
pub fn isochronous(
    model: &dyn ConstitutiveModel,
    strain: f64,
    t_c: f64,
    time_h: f64,
) -> Result<f64, DataError> {
    let mut residual =
        |s: f64| -> Result<f64, DataError> { Ok(strain - model.total(s, t_c, time_h)?) };
    let (lb, ub) = model.bracket();
    Bracket::new(&mut residual, lb, ub)
        .and_then(|bracket| bracket.solve(&mut residual))
        .map_err(|e| e.into_data_error("stress"))
}

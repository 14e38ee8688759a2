use crate::error::DataError;
use crate::interp::interpolate_sorted;
use crate::solver::brentq;

/// 0.2 % 오프셋.
pub const DEFAULT_OFFSET: f64 = 0.002;

/// 응력-변형률 곡선과 오프셋 탄성선의 교점 (변형률, 응력).
///
/// 탄성 기울기는 두 번째 점에서 잡는다. 변형률은 오름차순이어야 한다.
pub fn offset(strains: &[f64], stresses: &[f64], offset: f64) -> Result<(f64, f64), DataError> {
    if strains.len() < 2 || strains.len() != stresses.len() || strains[1] == 0.0 {
        return Err(DataError::out_of_range("strain"));
    }
    let modulus = stresses[1] / strains[1];
    let curve = |x: f64| interpolate_sorted(strains, stresses, x, false);
    let max_strain = strains.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let x = brentq(
        |x| Ok(modulus * x - modulus * offset - curve(x)?),
        0.0,
        max_strain,
    )
    .map_err(|e| e.into_data_error("strain"))?;
    Ok((x, curve(x)?))
}

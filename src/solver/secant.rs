use roots::find_root_secant;

use super::{Guarded, SolveError, Tolerance};
use crate::error::DataError;

const SECANT: Tolerance = Tolerance {
    xtol: 1.48e-8,
    rtol: 0.0,
    max_iter: 50,
};
const STEP: f64 = 1.0e-4;

/// 초기값 `x0` 에서 시작하는 할선법. 둘째 점은 `x0·(1 + 1e-4) ± 1e-4` 이다.
///
/// 두 점의 함수값이 같아지면(기울기 0) 중점을 돌려주지 않고 `NonFinite` 로 실패한다.
pub fn secant<F>(mut f: F, x0: f64) -> Result<f64, SolveError>
where
    F: FnMut(f64) -> Result<f64, DataError>,
{
    let mut x1 = x0 * (1.0 + STEP);
    x1 += if x1 >= 0.0 { STEP } else { -STEP };

    let mut guarded = Guarded::new(&mut f);
    let mut tolerance = SECANT;
    let mut eval = |x: f64| guarded.eval(x);
    let found = find_root_secant(x0, x1, &mut eval, &mut tolerance);
    guarded.finish(found, SECANT.max_iter)
}

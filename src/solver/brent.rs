use roots::find_root_brent;

use super::{Guarded, SolveError, Tolerance};
use crate::error::DataError;

const BRENT: Tolerance = Tolerance {
    xtol: 2.0e-12,
    rtol: 4.0 * f64::EPSILON,
    max_iter: 100,
};

/// 부호 변화가 확인된 구간. 양 끝 함수값을 함께 보관한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lo: f64,
    hi: f64,
    f_lo: f64,
    f_hi: f64,
}

impl Bracket {
    /// 양 끝을 평가해 부호 변화(또는 끝점의 근)를 확인한다.
    pub fn new<F>(f: &mut F, lo: f64, hi: f64) -> Result<Self, SolveError>
    where
        F: FnMut(f64) -> Result<f64, DataError>,
    {
        let f_lo = f(lo)?;
        let f_hi = f(hi)?;
        if f_lo.is_nan() || f_hi.is_nan() {
            return Err(SolveError::NonFinite);
        }
        if f_lo * f_hi > 0.0 {
            return Err(SolveError::NotBracketed { f_lo, f_hi });
        }
        Ok(Self { lo, hi, f_lo, f_hi })
    }

    /// Brent 법으로 구간 안의 근을 찾는다.
    pub fn solve<F>(self, f: &mut F) -> Result<f64, SolveError>
    where
        F: FnMut(f64) -> Result<f64, DataError>,
    {
        if self.f_lo == 0.0 {
            return Ok(self.lo);
        }
        if self.f_hi == 0.0 {
            return Ok(self.hi);
        }
        let mut guarded = Guarded::new(f);
        let mut tolerance = BRENT;
        let mut eval = |x: f64| guarded.eval(x);
        let found = find_root_brent(self.lo, self.hi, &mut eval, &mut tolerance);
        guarded.finish(found, BRENT.max_iter)
    }
}

/// `[lo, hi]` 에서 `f(x) = 0` 의 근을 찾는다. 부호 변화가 없으면 `NotBracketed`.
pub fn brentq<F>(mut f: F, lo: f64, hi: f64) -> Result<f64, SolveError>
where
    F: FnMut(f64) -> Result<f64, DataError>,
{
    Bracket::new(&mut f, lo, hi)?.solve(&mut f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cubic_root() {
        let root = brentq(|x| Ok(x * x * x - 2.0 * x - 5.0), 2.0, 3.0).expect("root");
        assert!((root - 2.094_551_481_542_326_5).abs() < 1e-10);
    }

    #[test]
    fn same_sign_is_rejected_before_iterating() {
        let mut calls = 0;
        let err = brentq(
            |x| {
                calls += 1;
                Ok(x * x + 1.0)
            },
            -1.0,
            1.0,
        )
        .unwrap_err();
        assert!(matches!(err, SolveError::NotBracketed { .. }));
        assert_eq!(calls, 2);
    }

    #[test]
    fn endpoint_root_is_returned() {
        let root = brentq(|x| Ok(x - 1.0), 1.0, 4.0).expect("root");
        assert_eq!(root, 1.0);
    }

    #[test]
    fn evaluation_error_propagates() {
        let err = brentq(|_| Err(DataError::out_of_range("temperature")), 0.0, 1.0).unwrap_err();
        assert_eq!(err, SolveError::Eval(DataError::out_of_range("temperature")));
    }

    #[test]
    fn error_inside_bracket_propagates() {
        let err = brentq(
            |x| {
                if x > 0.0 && x < 1.0 {
                    Err(DataError::out_of_range("stress"))
                } else {
                    Ok(x - 0.5)
                }
            },
            0.0,
            1.0,
        )
        .unwrap_err();
        assert_eq!(err, SolveError::Eval(DataError::out_of_range("stress")));
    }
}

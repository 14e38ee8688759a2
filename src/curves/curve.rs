use super::inversion;
use crate::error::DataError;
use crate::models::ConstitutiveModel;

/// 곡선 위의 한 점. 변형률은 해당 응력에서의 탄성 + 소성 (+ 크리프) 합이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub strain: f64,
    /// MPa
    pub stress: f64,
    /// °C
    pub temperature: f64,
    /// h, 고온 인장 곡선은 0
    pub time: f64,
}

/// 곡선 종류.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveKind {
    HotTensile,
    Isochronous { time_h: f64 },
}

/// 한 온도(와 시간)에서의 응력-변형률 곡선. 점은 요청할 때 계산한다.
pub struct Curve {
    model: Box<dyn ConstitutiveModel>,
    temperature: f64,
    kind: CurveKind,
    strains: Vec<f64>,
}

impl std::fmt::Debug for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Curve")
            .field("material", &self.model.material())
            .field("temperature", &self.temperature)
            .field("kind", &self.kind)
            .field("points", &self.strains.len())
            .finish()
    }
}

impl Curve {
    pub fn new(
        model: Box<dyn ConstitutiveModel>,
        temperature: f64,
        kind: CurveKind,
        strains: Vec<f64>,
    ) -> Self {
        Self {
            model,
            temperature,
            kind,
            strains,
        }
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn strains(&self) -> &[f64] {
        &self.strains
    }

    pub fn model(&self) -> &dyn ConstitutiveModel {
        self.model.as_ref()
    }

    /// 처음부터 다시 도는 점 반복자. 여러 번 만들어도 된다.
    pub fn points(&self) -> CurvePoints<'_> {
        CurvePoints {
            curve: self,
            next: 0,
        }
    }

    /// 모든 점을 계산해 (변형률, 응력) 으로 돌려준다. 한 점이라도 실패하면 오류.
    pub fn evaluate(&self) -> Result<(Vec<f64>, Vec<f64>), DataError> {
        let stresses = self
            .points()
            .map(|p| p.map(|p| p.stress))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((self.strains.clone(), stresses))
    }

    fn point(&self, strain: f64) -> Result<CurvePoint, DataError> {
        let (stress, time) = match self.kind {
            CurveKind::HotTensile => (
                inversion::hot_tensile(self.model.as_ref(), strain, self.temperature)?,
                0.0,
            ),
            CurveKind::Isochronous { time_h } => (
                inversion::isochronous(self.model.as_ref(), strain, self.temperature, time_h)?,
                time_h,
            ),
        };
        Ok(CurvePoint {
            strain,
            stress,
            temperature: self.temperature,
            time,
        })
    }
}

/// [`Curve::points`] 반복자.
#[derive(Debug, Clone)]
pub struct CurvePoints<'a> {
    curve: &'a Curve,
    next: usize,
}

impl Iterator for CurvePoints<'_> {
    type Item = Result<CurvePoint, DataError>;

    fn next(&mut self) -> Option<Self::Item> {
        let strain = *self.curve.strains.get(self.next)?;
        self.next += 1;
        Some(self.curve.point(strain))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.curve.strains.len() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for CurvePoints<'_> {}

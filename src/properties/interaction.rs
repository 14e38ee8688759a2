//! 크리프-피로 손상 상호작용 포락선.
//!
//! 포락선은 (0, 1) → 꺾이는 점 → (1, 0) 의 두 선분이다. 가로축은 피로 손상 D_f,
//! 세로축은 크리프 손상 D_c 이다.

use crate::error::DataError;
use crate::interp::is_close;
use crate::material::MaterialId;
use crate::tables::{DataKind, TableStore};

/// 재료의 손상 포락선.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    knee: (f64, f64),
}

impl Envelope {
    pub fn new(fatigue: f64, creep: f64) -> Self {
        Self {
            knee: (fatigue, creep),
        }
    }

    pub fn load(store: &TableStore, material: MaterialId) -> Result<Self, DataError> {
        let table = store.load_1d(material, DataKind::Interaction)?;
        Ok(Self::new(table.xs()[0], table.ys()[0]))
    }

    pub fn knee(&self) -> (f64, f64) {
        self.knee
    }

    /// 피로 손상 `damage_fatigue` 에서 허용되는 크리프 손상.
    pub fn allowable_creep(&self, damage_fatigue: f64) -> Result<f64, DataError> {
        check_damage(damage_fatigue)?;
        let (x2, y2) = self.knee;
        Ok(if damage_fatigue < x2 {
            (y2 - 1.0) / x2 * damage_fatigue + 1.0
        } else {
            -y2 / (1.0 - x2) * (damage_fatigue - x2) + y2
        })
    }

    /// 크리프 손상 `damage_creep` 에서 허용되는 피로 손상.
    pub fn allowable_fatigue(&self, damage_creep: f64) -> Result<f64, DataError> {
        check_damage(damage_creep)?;
        let (x2, y2) = self.knee;
        Ok(if damage_creep > y2 {
            x2 / (y2 - 1.0) * (damage_creep - 1.0)
        } else {
            (1.0 - x2) / -y2 * (damage_creep - y2) + x2
        })
    }

    /// 손상 점이 포락선 안(경계 포함)에 있는지.
    pub fn contains(&self, damage_fatigue: f64, damage_creep: f64) -> Result<bool, DataError> {
        check_damage(damage_creep)?;
        Ok(damage_creep <= self.allowable_creep(damage_fatigue)?)
    }

    /// 포락선까지의 거리. 안쪽이면 양수, 바깥이면 음수.
    pub fn distance(&self, damage_fatigue: f64, damage_creep: f64) -> Result<f64, DataError> {
        let sign = if self.contains(damage_fatigue, damage_creep)? {
            1.0
        } else {
            -1.0
        };
        let p = (damage_fatigue, damage_creep);
        let d = segment_distance((0.0, 1.0), self.knee, p)
            .min(segment_distance(self.knee, (1.0, 0.0), p));
        Ok(sign * d)
    }
}

fn check_damage(damage: f64) -> Result<(), DataError> {
    if damage < 0.0 || damage.is_nan() {
        Err(DataError::out_of_range("damage fraction"))
    } else {
        Ok(())
    }
}

/// 선분 p1-p2 와 점 p 사이의 거리.
fn segment_distance(p1: (f64, f64), p2: (f64, f64), p: (f64, f64)) -> f64 {
    let (dx, dy) = (p2.0 - p1.0, p2.1 - p1.1);
    let l2 = dx * dx + dy * dy;
    if is_close(l2, 0.0) {
        return (p.0 - p1.0).hypot(p.1 - p1.1);
    }
    let t = (((p.0 - p1.0) * dx + (p.1 - p1.1) * dy) / l2).clamp(0.0, 1.0);
    (p.0 - (p1.0 + t * dx)).hypot(p.1 - (p1.1 + t * dy))
}

/// 피로 손상에서 허용 크리프 손상.
pub fn interaction_fatigue(
    store: &TableStore,
    material: MaterialId,
    damage_fatigue: f64,
) -> Result<f64, DataError> {
    Envelope::load(store, material)?.allowable_creep(damage_fatigue)
}

/// 크리프 손상에서 허용 피로 손상.
pub fn interaction_creep(
    store: &TableStore,
    material: MaterialId,
    damage_creep: f64,
) -> Result<f64, DataError> {
    Envelope::load(store, material)?.allowable_fatigue(damage_creep)
}

pub fn inside_envelope(
    store: &TableStore,
    material: MaterialId,
    damage_fatigue: f64,
    damage_creep: f64,
) -> Result<bool, DataError> {
    Envelope::load(store, material)?.contains(damage_fatigue, damage_creep)
}

pub fn distance_envelope(
    store: &TableStore,
    material: MaterialId,
    damage_fatigue: f64,
    damage_creep: f64,
) -> Result<f64, DataError> {
    Envelope::load(store, material)?.distance(damage_fatigue, damage_creep)
}

//! (재료, 데이터 종류) 별 테이블을 한 번만 읽어 캐시하는 저장소.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use super::{parse_table_1d, parse_table_2d, Grid1D, Grid2D};
use crate::error::DataError;
use crate::material::MaterialId;

/// 테이블 데이터 종류. 값은 데이터 디렉터리 이름이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    /// 온도별 탄성계수 (GPa)
    Youngs,
    /// 온도 × 시간별 파단 응력 S_r (MPa)
    RuptureStress,
    /// 사이클 × 최대 온도별 피로 변형률 범위
    Fatigue,
    /// 온도별 항복강도 S_y (MPa)
    Yield,
    /// 온도별 인장강도 S_u (MPa)
    Ultimate,
    /// 온도 × 시간별 허용 응력 강도 S_t (MPa)
    AllowableSt,
    /// 온도별 설계 허용 응력 강도 S_o (MPa)
    AllowableSo,
    /// 시간 × 온도별 항복강도 감소 계수
    ReductionYield,
    /// 시간 × 온도별 인장강도 감소 계수
    ReductionTensile,
    /// 순간 열팽창 계수 (1e-6/°C)
    Cte,
    /// 열전도도 (W/m·K)
    Ctc,
    /// 열확산 계수 (mm²/s)
    Ctd,
    /// 크리프-피로 손상 포락선의 꺾이는 점 (D_f, D_c)
    Interaction,
}

impl DataKind {
    pub fn dir_name(self) -> &'static str {
        match self {
            DataKind::Youngs => "youngs",
            DataKind::RuptureStress => "Sr",
            DataKind::Fatigue => "fatigue",
            DataKind::Yield => "yield",
            DataKind::Ultimate => "ultimate",
            DataKind::AllowableSt => "St",
            DataKind::AllowableSo => "So",
            DataKind::ReductionYield => "reduction_yield",
            DataKind::ReductionTensile => "reduction_tensile",
            DataKind::Cte => "cte",
            DataKind::Ctc => "ctc",
            DataKind::Ctd => "ctd",
            DataKind::Interaction => "interaction",
        }
    }
}

/// 테이블 원문을 공급하는 곳.
pub trait TableSource: Send + Sync {
    fn read(&self, material: MaterialId, kind: DataKind) -> std::io::Result<String>;
}

/// 바이너리에 포함된 기본 테이블.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledSource;

impl BundledSource {
    fn text(material: MaterialId, kind: DataKind) -> Option<&'static str> {
        use DataKind::*;
        use MaterialId::*;
        let text = match (kind, material) {
            (Youngs, Ss304) => include_str!("../../data/youngs/304"),
            (Youngs, Ss316) => include_str!("../../data/youngs/316"),
            (Youngs, Cr2Mo) => include_str!("../../data/youngs/2.25Cr-1Mo"),
            (Youngs, Gr91) => include_str!("../../data/youngs/gr91"),
            (Youngs, Alloy800H) => include_str!("../../data/youngs/800H"),
            (Youngs, A617) => include_str!("../../data/youngs/A617"),
            (Youngs, A740H) => include_str!("../../data/youngs/A740H"),
            (RuptureStress, Ss316) => include_str!("../../data/Sr/316"),
            (RuptureStress, A617) => include_str!("../../data/Sr/A617"),
            (Fatigue, Ss304) => include_str!("../../data/fatigue/304"),
            (Yield, Ss316) => include_str!("../../data/yield/316"),
            (Yield, A617) => include_str!("../../data/yield/A617"),
            (Ultimate, Ss316) => include_str!("../../data/ultimate/316"),
            (Ultimate, A617) => include_str!("../../data/ultimate/A617"),
            (AllowableSt, Ss316) => include_str!("../../data/St/316"),
            (AllowableSt, A617) => include_str!("../../data/St/A617"),
            (AllowableSo, Ss316) => include_str!("../../data/So/316"),
            (AllowableSo, A617) => include_str!("../../data/So/A617"),
            (Cte, Ss316) => include_str!("../../data/cte/316"),
            (Cte, A617) => include_str!("../../data/cte/A617"),
            (Ctc, Ss316) => include_str!("../../data/ctc/316"),
            (Ctc, A617) => include_str!("../../data/ctc/A617"),
            (Ctd, Ss316) => include_str!("../../data/ctd/316"),
            (Ctd, A617) => include_str!("../../data/ctd/A617"),
            (Interaction, Ss304) => include_str!("../../data/interaction/304"),
            (Interaction, Ss316) => include_str!("../../data/interaction/316"),
            (Interaction, Cr2Mo) => include_str!("../../data/interaction/2.25Cr-1Mo"),
            (Interaction, Gr91) => include_str!("../../data/interaction/gr91"),
            (Interaction, Alloy800H) => include_str!("../../data/interaction/800H"),
            (Interaction, A617) => include_str!("../../data/interaction/A617"),
            _ => return None,
        };
        Some(text)
    }
}

impl TableSource for BundledSource {
    fn read(&self, material: MaterialId, kind: DataKind) -> std::io::Result<String> {
        Self::text(material, kind)
            .map(str::to_string)
            .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
    }
}

/// `<root>/<종류>/<재료코드>` 파일을 읽는다.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, material: MaterialId, kind: DataKind) -> PathBuf {
        self.root.join(kind.dir_name()).join(material.code())
    }
}

impl TableSource for DirectorySource {
    fn read(&self, material: MaterialId, kind: DataKind) -> std::io::Result<String> {
        std::fs::read_to_string(self.path_for(material, kind))
    }
}

type Key = (MaterialId, DataKind);

/// 읽기 전용 테이블 캐시. 실패한 조회는 캐시하지 않는다.
pub struct TableStore {
    source: Box<dyn TableSource>,
    grids_1d: RwLock<HashMap<Key, Arc<Grid1D>>>,
    grids_2d: RwLock<HashMap<Key, Arc<Grid2D>>>,
}

impl std::fmt::Debug for TableStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableStore").finish_non_exhaustive()
    }
}

impl Default for TableStore {
    fn default() -> Self {
        Self::bundled()
    }
}

impl TableStore {
    pub fn new(source: impl TableSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            grids_1d: RwLock::new(HashMap::new()),
            grids_2d: RwLock::new(HashMap::new()),
        }
    }

    /// 내장 테이블을 쓰는 저장소.
    pub fn bundled() -> Self {
        Self::new(BundledSource)
    }

    /// 디렉터리의 테이블을 쓰는 저장소.
    pub fn from_dir(root: &Path) -> Self {
        Self::new(DirectorySource::new(root))
    }

    /// 1차원 테이블을 돌려준다. 없거나 형식이 잘못되면 `MissingData`.
    pub fn load_1d(&self, material: MaterialId, kind: DataKind) -> Result<Arc<Grid1D>, DataError> {
        cached(&self.grids_1d, (material, kind), || {
            let text = self.read(material, kind)?;
            parse_table_1d(&text).map_err(|_| missing(material))
        })
    }

    /// 2차원 테이블을 돌려준다. 없거나 형식이 잘못되면 `MissingData`.
    pub fn load_2d(&self, material: MaterialId, kind: DataKind) -> Result<Arc<Grid2D>, DataError> {
        cached(&self.grids_2d, (material, kind), || {
            let text = self.read(material, kind)?;
            parse_table_2d(&text).map_err(|_| missing(material))
        })
    }

    /// 재료 코드 문자열로 2차원 테이블을 조회한다. 코드는 데이터 접근 전에 검증한다.
    pub fn load_2d_by_code(&self, code: &str, kind: DataKind) -> Result<Arc<Grid2D>, DataError> {
        let material = MaterialId::from_code(code)?;
        self.load_2d(material, kind)
    }

    /// 재료 코드 문자열로 1차원 테이블을 조회한다.
    pub fn load_1d_by_code(&self, code: &str, kind: DataKind) -> Result<Arc<Grid1D>, DataError> {
        let material = MaterialId::from_code(code)?;
        self.load_1d(material, kind)
    }

    fn read(&self, material: MaterialId, kind: DataKind) -> Result<String, DataError> {
        self.source
            .read(material, kind)
            .map_err(|_| missing(material))
    }
}

fn missing(material: MaterialId) -> DataError {
    DataError::MissingData(material.code().to_string())
}

fn cached<G>(
    cache: &RwLock<HashMap<Key, Arc<G>>>,
    key: Key,
    load: impl FnOnce() -> Result<G, DataError>,
) -> Result<Arc<G>, DataError> {
    if let Some(grid) = cache
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return Ok(Arc::clone(grid));
    }
    let grid = Arc::new(load()?);
    let mut guard = cache.write().unwrap_or_else(PoisonError::into_inner);
    // 동시에 채워졌다면 먼저 들어간 값을 쓴다.
    Ok(Arc::clone(guard.entry(key).or_insert(grid)))
}

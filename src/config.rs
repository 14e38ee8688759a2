use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::curves::{linspace, RateSettings, TimeBounds, DEFAULT_STRAIN_MAX, DEFAULT_STRAIN_POINTS};
use crate::tables::TableStore;
use crate::units::{StressUnit, TemperatureUnit};

const CONFIG_FILE: &str = "config.toml";

/// 기본 변형률 격자 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveDefaults {
    pub strain_max: f64,
    pub strain_points: usize,
}

impl Default for CurveDefaults {
    fn default() -> Self {
        Self {
            strain_max: DEFAULT_STRAIN_MAX,
            strain_points: DEFAULT_STRAIN_POINTS,
        }
    }
}

/// 속도 적분 이완 해석 기본값.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelaxationDefaults {
    /// 크리프 변형률 차분 간격 (h)
    pub dt: f64,
    /// 크리프 유효 여부 확인용 변형률
    pub check_strain: f64,
}

impl Default for RelaxationDefaults {
    fn default() -> Self {
        let base = RateSettings::default();
        Self {
            dt: base.dt,
            check_strain: base.check_strain,
        }
    }
}

/// 입력/출력에 쓰는 단위.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayUnits {
    pub temperature: TemperatureUnit,
    pub stress: StressUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            stress: StressUnit::MegaPascal,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 지정하면 내장 테이블 대신 `<data_dir>/<종류>/<재료>` 파일을 읽는다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    pub units: DisplayUnits,
    pub curve: CurveDefaults,
    pub relaxation: RelaxationDefaults,
    pub time_bounds: TimeBounds,
}

impl Config {
    /// 설정에 맞는 테이블 저장소.
    pub fn table_store(&self) -> TableStore {
        match &self.data_dir {
            Some(dir) => TableStore::from_dir(dir),
            None => TableStore::bundled(),
        }
    }

    /// 기본 변형률 격자.
    pub fn strains(&self) -> Vec<f64> {
        linspace(0.0, self.curve.strain_max, self.curve.strain_points)
    }

    pub fn rate_settings(&self) -> RateSettings {
        RateSettings {
            dt: self.relaxation.dt,
            check_strain: self.relaxation.check_strain,
            ..RateSettings::default()
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        Ok(cfg)
    }
}

/// 지정한 TOML 파일에서 설정을 읽는다. 빠진 항목은 기본값을 쓴다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

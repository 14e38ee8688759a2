//! 명령행 인자 정의. 온도와 응력은 설정의 표시 단위로 입력한다.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "isochronous_toolbox",
    version,
    about = "고온 재료의 등시 곡선, 고온 인장 곡선, 이완 해석"
)]
pub struct Cli {
    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 테이블 디렉터리 (설정보다 우선)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 지원 재료 목록
    Materials,

    /// 고온 인장 곡선 (또는 한 변형률의 응력)
    HotTensile {
        material: String,
        temperature: f64,
        /// 한 점만 계산할 변형률
        #[arg(long)]
        strain: Option<f64>,
        /// 곡선 최대 변형률
        #[arg(long)]
        max_strain: Option<f64>,
        /// 곡선 점 개수
        #[arg(long)]
        points: Option<usize>,
    },

    /// 등시 곡선 (또는 한 변형률의 응력)
    Isochronous {
        material: String,
        temperature: f64,
        /// 시간 (h)
        time: f64,
        #[arg(long)]
        strain: Option<f64>,
        #[arg(long)]
        max_strain: Option<f64>,
        #[arg(long)]
        points: Option<usize>,
        /// 0.2% 오프셋 항복점도 출력
        #[arg(long)]
        offset: bool,
    },

    /// 응력과 변형률에 도달하는 시간
    Time {
        material: String,
        temperature: f64,
        stress: f64,
        strain: f64,
    },

    /// 주어진 시간, 응력에서의 총 변형률
    Strain {
        material: String,
        temperature: f64,
        time: f64,
        stress: f64,
    },

    /// 등시 곡선법 이완 해석 (--strain 또는 --stress 중 하나)
    RelaxIsochronous {
        material: String,
        temperature: f64,
        #[arg(long, conflicts_with = "stress")]
        strain: Option<f64>,
        #[arg(long)]
        stress: Option<f64>,
        /// 시간 목록 (h)
        #[arg(required = true, num_args = 1..)]
        times: Vec<f64>,
    },

    /// 크리프 속도 적분 이완 해석
    RelaxRate {
        material: String,
        temperature: f64,
        stress: f64,
        #[arg(required = true, num_args = 1..)]
        times: Vec<f64>,
        /// 크리프 차분 간격 (h)
        #[arg(long)]
        dt: Option<f64>,
    },

    /// 탄성계수
    Youngs {
        material: String,
        temperature: f64,
        #[arg(long)]
        extrapolate: bool,
    },

    /// 최소 파단 응력 S_r
    RuptureStress {
        material: String,
        temperature: f64,
        time: f64,
        #[arg(long)]
        extrapolate: bool,
    },

    /// 파단 시간
    RuptureTime {
        material: String,
        temperature: f64,
        stress: f64,
        #[arg(long)]
        no_extrapolate: bool,
    },

    /// 사이클 수에 대한 피로 변형률 범위
    FatigueStrain {
        material: String,
        max_temperature: f64,
        cycles: f64,
        #[arg(long)]
        no_extrapolate: bool,
    },

    /// 변형률 범위에 대한 피로 파손 사이클 수
    FatigueCycles {
        material: String,
        max_temperature: f64,
        strain_range: f64,
        #[arg(long)]
        no_extrapolate: bool,
    },

    /// 허용 응력 강도 S_m (시간을 주면 S_t, S_mt 도)
    Allowable {
        material: String,
        temperature: f64,
        /// 시간 (h)
        #[arg(long)]
        time: Option<f64>,
        /// 시간에 따른 강도 감소 계수 적용
        #[arg(long, requires = "time")]
        reduce: bool,
        #[arg(long)]
        extrapolate: bool,
    },

    /// 설계 허용 응력 강도 S_o
    AllowableSo { material: String, temperature: f64 },

    /// S_t 가 주어진 응력이 되는 시간
    AllowableTime {
        material: String,
        temperature: f64,
        stress: f64,
        #[arg(long)]
        no_extrapolate: bool,
    },

    /// 열팽창 계수, 열전도도, 열확산 계수
    Thermal {
        material: String,
        temperature: f64,
        #[arg(long)]
        extrapolate: bool,
    },

    /// 크리프-피로 손상 포락선 검사
    Interaction {
        material: String,
        damage_fatigue: f64,
        damage_creep: f64,
    },
}

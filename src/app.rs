use std::sync::Arc;

use crate::cli::{Cli, Command};
use crate::config::{Config, ConfigError};
use crate::curves::{self, Curve, CurveGenerator};
use crate::error::DataError;
use crate::material::MaterialId;
use crate::properties::{self, Aging, CycleBounds, Envelope};
use crate::tables::TableStore;
use crate::units::stress::{from_mpa, to_mpa};
use crate::units::temperature::to_celsius;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 재료 데이터/계산 오류
    Data(DataError),
    /// 잘못된 인자 조합
    Usage(&'static str),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Data(e) => write!(f, "계산 오류: {e}"),
            AppError::Usage(msg) => write!(f, "잘못된 사용: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<DataError> for AppError {
    fn from(value: DataError) -> Self {
        AppError::Data(value)
    }
}

/// 입력 단위 변환과 결과 출력을 맡는다.
struct Session<'a> {
    cfg: &'a Config,
    generator: CurveGenerator,
}

impl Session<'_> {
    fn temperature(&self, value: f64) -> f64 {
        to_celsius(value, self.cfg.units.temperature)
    }

    fn stress_in(&self, value: f64) -> f64 {
        to_mpa(value, self.cfg.units.stress)
    }

    fn stress_out(&self, value_mpa: f64) -> f64 {
        from_mpa(value_mpa, self.cfg.units.stress)
    }

    fn strains(&self, max_strain: Option<f64>, points: Option<usize>) -> Vec<f64> {
        curves::linspace(
            0.0,
            max_strain.unwrap_or(self.cfg.curve.strain_max),
            points.unwrap_or(self.cfg.curve.strain_points),
        )
    }

    fn store(&self) -> &TableStore {
        self.generator.store()
    }

    fn print_curve(&self, curve: &Curve) -> Result<(Vec<f64>, Vec<f64>), AppError> {
        println!("strain\tstress");
        let mut strains = Vec::with_capacity(curve.strains().len());
        let mut stresses = Vec::with_capacity(curve.strains().len());
        for point in curve.points() {
            let point = point?;
            println!("{:.6}\t{:.3}", point.strain, self.stress_out(point.stress));
            strains.push(point.strain);
            stresses.push(point.stress);
        }
        Ok((strains, stresses))
    }

    fn print_history(&self, times: &[f64], stresses: &[f64]) {
        println!("time\tstress");
        for (t, s) in times.iter().zip(stresses) {
            println!("{t}\t{:.3}", self.stress_out(*s));
        }
    }
}

/// 명령 하나를 실행하고 결과를 표준 출력에 쓴다.
pub fn run(cfg: &Config, cli: Cli) -> Result<(), AppError> {
    let store = match cli.data_dir {
        Some(dir) => TableStore::from_dir(&dir),
        None => cfg.table_store(),
    };
    let session = Session {
        cfg,
        generator: CurveGenerator::new(Arc::new(store)),
    };
    let material = |code: &str| MaterialId::from_code(code);

    match cli.command {
        Command::Materials => {
            for m in MaterialId::all() {
                println!("{:<12}{}", m.code(), m.name());
            }
        }
        Command::HotTensile {
            material: code,
            temperature,
            strain,
            max_strain,
            points,
        } => {
            let mat = material(&code)?;
            let t_c = session.temperature(temperature);
            match strain {
                Some(e) => {
                    let p = session.generator.hot_tensile(mat, e, t_c)?;
                    println!("{:.3}", session.stress_out(p.stress));
                }
                None => {
                    let curve = session.generator.hot_tensile_curve(
                        mat,
                        t_c,
                        session.strains(max_strain, points),
                    )?;
                    session.print_curve(&curve)?;
                }
            }
        }
        Command::Isochronous {
            material: code,
            temperature,
            time,
            strain,
            max_strain,
            points,
            offset,
        } => {
            let mat = material(&code)?;
            let t_c = session.temperature(temperature);
            match strain {
                Some(e) => {
                    let p = session.generator.isochronous(mat, e, t_c, time)?;
                    println!("{:.3}", session.stress_out(p.stress));
                }
                None => {
                    let curve = session.generator.isochronous_curve(
                        mat,
                        t_c,
                        time,
                        session.strains(max_strain, points),
                    )?;
                    let (strains, stresses) = session.print_curve(&curve)?;
                    if offset {
                        let (e, s) = curves::offset(&strains, &stresses, curves::DEFAULT_OFFSET)?;
                        println!("offset\t{e:.6}\t{:.3}", session.stress_out(s));
                    }
                }
            }
        }
        Command::Time {
            material: code,
            temperature,
            stress,
            strain,
        } => {
            let t = session.generator.time_from_stress_strain(
                material(&code)?,
                session.temperature(temperature),
                session.stress_in(stress),
                strain,
                cfg.time_bounds,
            )?;
            println!("{t:.3}");
        }
        Command::Strain {
            material: code,
            temperature,
            time,
            stress,
        } => {
            let e = session.generator.total_strain(
                material(&code)?,
                session.temperature(temperature),
                time,
                session.stress_in(stress),
            )?;
            println!("{e:.6}");
        }
        Command::RelaxIsochronous {
            material: code,
            temperature,
            strain,
            stress,
            times,
        } => {
            let mat = material(&code)?;
            let t_c = session.temperature(temperature);
            let history = match (strain, stress) {
                (Some(e), None) => session
                    .generator
                    .relaxation_by_isochronous(mat, t_c, e, &times)?,
                (None, Some(s)) => session.generator.relaxation_by_isochronous_stress(
                    mat,
                    t_c,
                    session.stress_in(s),
                    &times,
                )?,
                _ => return Err(AppError::Usage("--strain 또는 --stress 중 하나가 필요함")),
            };
            session.print_history(&times, &history);
        }
        Command::RelaxRate {
            material: code,
            temperature,
            stress,
            times,
            dt,
        } => {
            let mut settings = cfg.rate_settings();
            if let Some(dt) = dt {
                settings.dt = dt;
            }
            let history = session.generator.relaxation_by_rate(
                material(&code)?,
                session.temperature(temperature),
                session.stress_in(stress),
                &times,
                settings,
            )?;
            session.print_history(&times, &history);
        }
        Command::Youngs {
            material: code,
            temperature,
            extrapolate,
        } => {
            let e = properties::youngs(
                session.store(),
                material(&code)?,
                session.temperature(temperature),
                extrapolate,
            )?;
            println!("{:.1}", session.stress_out(e));
        }
        Command::RuptureStress {
            material: code,
            temperature,
            time,
            extrapolate,
        } => {
            let s = properties::rupture_stress(
                session.store(),
                material(&code)?,
                session.temperature(temperature),
                time,
                extrapolate,
            )?;
            println!("{:.3}", session.stress_out(s));
        }
        Command::RuptureTime {
            material: code,
            temperature,
            stress,
            no_extrapolate,
        } => {
            let t = properties::rupture_time(
                session.store(),
                material(&code)?,
                session.temperature(temperature),
                session.stress_in(stress),
                !no_extrapolate,
            )?;
            println!("{t:.3}");
        }
        Command::FatigueStrain {
            material: code,
            max_temperature,
            cycles,
            no_extrapolate,
        } => {
            let e = properties::strain_to_failure(
                session.store(),
                material(&code)?,
                session.temperature(max_temperature),
                cycles,
                !no_extrapolate,
            )?;
            println!("{e:.6}");
        }
        Command::FatigueCycles {
            material: code,
            max_temperature,
            strain_range,
            no_extrapolate,
        } => {
            let n = properties::cycles_to_failure(
                session.store(),
                material(&code)?,
                session.temperature(max_temperature),
                strain_range,
                !no_extrapolate,
                CycleBounds::default(),
            )?;
            println!("{n:.1}");
        }
        Command::Allowable {
            material: code,
            temperature,
            time,
            reduce,
            extrapolate,
        } => {
            let mat = material(&code)?;
            let t_c = session.temperature(temperature);
            let aging = match time {
                Some(t) if reduce => Some(Aging::at(t)),
                _ => None,
            };
            let sm = properties::s_m(session.store(), mat, t_c, aging)?;
            println!("S_m\t{:.3}", session.stress_out(sm));
            if let Some(t) = time {
                let st = properties::s_t(session.store(), mat, t_c, t, extrapolate)?;
                println!("S_t\t{:.3}", session.stress_out(st));
                println!("S_mt\t{:.3}", session.stress_out(sm.min(st)));
            }
        }
        Command::AllowableSo {
            material: code,
            temperature,
        } => {
            let so = properties::s_o(
                session.store(),
                material(&code)?,
                session.temperature(temperature),
            )?;
            println!("{:.3}", session.stress_out(so));
        }
        Command::AllowableTime {
            material: code,
            temperature,
            stress,
            no_extrapolate,
        } => {
            let t = properties::time_s_t(
                session.store(),
                material(&code)?,
                session.temperature(temperature),
                session.stress_in(stress),
                !no_extrapolate,
            )?;
            println!("{t:.3}");
        }
        Command::Thermal {
            material: code,
            temperature,
            extrapolate,
        } => {
            let mat = material(&code)?;
            let t_c = session.temperature(temperature);
            println!("cte\t{:.4e}", properties::cte(session.store(), mat, t_c, extrapolate)?);
            println!("ctc\t{:.3}", properties::ctc(session.store(), mat, t_c, extrapolate)?);
            println!("ctd\t{:.4e}", properties::ctd(session.store(), mat, t_c, extrapolate)?);
        }
        Command::Interaction {
            material: code,
            damage_fatigue,
            damage_creep,
        } => {
            let envelope = Envelope::load(session.store(), material(&code)?)?;
            println!(
                "allowable_creep\t{:.4}",
                envelope.allowable_creep(damage_fatigue)?
            );
            println!("inside\t{}", envelope.contains(damage_fatigue, damage_creep)?);
            println!(
                "distance\t{:.4}",
                envelope.distance(damage_fatigue, damage_creep)?
            );
        }
    }
    Ok(())
}

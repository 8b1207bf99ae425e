use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::config::{self, Config, EquilibriumSource, DEFAULT_CONFIG_PATH};
use crate::design::design_column;
use crate::equilibrium::InterpolationMethod;
use crate::error::DesignError;
use crate::report;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] config::ConfigError),
    /// 설계 계산 오류
    #[error("설계 계산 오류: {0}")]
    Design(#[from] DesignError),
}

/// McCabe-Thiele 이원 증류탑 설계 도구
#[derive(Debug, Parser)]
#[command(name = "mccabe_thiele_toolbox", version)]
#[command(about = "McCabe-Thiele 작도로 이원 증류탑의 환류비, 단수, 공급단, 직경을 계산한다")]
pub struct Cli {
    /// 설계 설정 파일 (없으면 기본값으로 생성)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// 기본 설정 파일만 쓰고 종료
    #[arg(long)]
    pub init: bool,

    /// 공급 조성 x_F
    #[arg(long)]
    pub feed: Option<f64>,

    /// 유출물 조성 x_D
    #[arg(long)]
    pub distillate: Option<f64>,

    /// 탑저 조성 x_W
    #[arg(long)]
    pub bottoms: Option<f64>,

    /// 공급 열적 상태 q
    #[arg(long)]
    pub q: Option<f64>,

    /// R = multiplier × R_min
    #[arg(long)]
    pub reflux_multiplier: Option<f64>,

    /// 단수 상한
    #[arg(long)]
    pub max_stages: Option<usize>,

    /// 보간 방식 (natural-cubic, monotone-cubic)
    #[arg(long, value_parser = parse_interpolation)]
    pub interpolation: Option<InterpolationMethod>,

    /// 표 대신 일정 상대휘발도로 평형 곡선 생성
    #[arg(long)]
    pub relative_volatility: Option<f64>,

    /// 계단 꼭짓점 표 출력
    #[arg(long)]
    pub vertices: bool,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

fn parse_interpolation(s: &str) -> Result<InterpolationMethod, String> {
    match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "natural-cubic" | "natural" => Ok(InterpolationMethod::NaturalCubic),
        "monotone-cubic" | "monotone" | "pchip" => Ok(InterpolationMethod::MonotoneCubic),
        other => Err(format!("지원하지 않는 보간 방식입니다: {other}")),
    }
}

impl Cli {
    /// 명령행 값으로 설정 항목을 덮어쓴다.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(v) = self.feed {
            cfg.feed.composition = v;
        }
        if let Some(v) = self.q {
            cfg.feed.thermal_condition = v;
        }
        if let Some(v) = self.distillate {
            cfg.products.distillate = v;
        }
        if let Some(v) = self.bottoms {
            cfg.products.bottoms = v;
        }
        if let Some(v) = self.reflux_multiplier {
            cfg.reflux.multiplier = v;
        }
        if let Some(v) = self.max_stages {
            cfg.stepping.max_stages = v;
        }
        if let Some(v) = self.interpolation {
            cfg.equilibrium.interpolation = v;
        }
        if let Some(alpha) = self.relative_volatility {
            let samples = match cfg.equilibrium.source {
                EquilibriumSource::RelativeVolatility { samples, .. } => samples,
                EquilibriumSource::Table { .. } => 21,
            };
            cfg.equilibrium.source = EquilibriumSource::RelativeVolatility { alpha, samples };
        }
    }
}

/// 설정을 읽고 설계를 계산해 결과를 출력한다.
pub fn run(cli: &Cli) -> Result<(), AppError> {
    if cli.init {
        Config::default().save(&cli.config)?;
        println!("기본 설정을 {} 에 저장했습니다.", cli.config.display());
        return Ok(());
    }

    let mut cfg = config::load_or_default(&cli.config)?;
    cli.apply_overrides(&mut cfg);
    info!(path = %cli.config.display(), "설정 로드");

    let input = cfg.design_input()?;
    let outcome = design_column(&input)?;
    info!(
        stages = outcome.design.stage_count,
        feed_stage = outcome.design.feed_stage,
        "설계 계산 완료"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_summary(&mut out, &outcome)?;
    if cli.vertices {
        report::write_stages(&mut out, &outcome)?;
    }
    out.flush()?;
    Ok(())
}

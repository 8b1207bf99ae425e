use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::column::{ColumnSizingInput, TraySpacing, VaporFlow, DEFAULT_MAX_STAGES};
use crate::design::DesignInput;
use crate::equilibrium::{
    relative_volatility_points, EquilibriumPoint, InterpolationMethod, BENZENE_TOLUENE_1ATM,
};
use crate::error::DesignResult;

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "design.toml";

/// 공급 조건.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSection {
    /// 경성분 몰분율 x_F
    pub composition: f64,
    /// q (1=포화액, 0=포화증기)
    pub thermal_condition: f64,
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            composition: 0.4,
            thermal_condition: 1.0,
        }
    }
}

/// 제품 조성.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductSection {
    pub distillate: f64,
    pub bottoms: f64,
}

impl Default for ProductSection {
    fn default() -> Self {
        Self {
            distillate: 0.98,
            bottoms: 0.02,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefluxSection {
    /// R = multiplier × R_min
    pub multiplier: f64,
}

impl Default for RefluxSection {
    fn default() -> Self {
        Self { multiplier: 1.5 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteppingSection {
    pub max_stages: usize,
}

impl Default for SteppingSection {
    fn default() -> Self {
        Self {
            max_stages: DEFAULT_MAX_STAGES,
        }
    }
}

fn default_samples() -> usize {
    21
}

/// 평형 데이터 출처.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EquilibriumSource {
    /// (x, y) 표
    Table { points: Vec<[f64; 2]> },
    /// 일정 상대휘발도
    RelativeVolatility {
        alpha: f64,
        #[serde(default = "default_samples")]
        samples: usize,
    },
}

impl Default for EquilibriumSource {
    fn default() -> Self {
        EquilibriumSource::Table {
            points: BENZENE_TOLUENE_1ATM.iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}

impl EquilibriumSource {
    pub fn points(&self) -> DesignResult<Vec<EquilibriumPoint>> {
        match self {
            EquilibriumSource::Table { points } => {
                Ok(points.iter().copied().map(EquilibriumPoint::from).collect())
            }
            EquilibriumSource::RelativeVolatility { alpha, samples } => {
                relative_volatility_points(*alpha, *samples)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EquilibriumSection {
    pub interpolation: InterpolationMethod,
    pub source: EquilibriumSource,
}

/// 탑 사이징 조건 (SI 단위).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingSection {
    pub vapor_density_kg_per_m3: f64,
    pub vapor_velocity_m_per_s: f64,
    pub flow: VaporFlow,
    pub tray_spacing: TraySpacing,
}

impl Default for SizingSection {
    fn default() -> Self {
        Self {
            vapor_density_kg_per_m3: 2.0,
            vapor_velocity_m_per_s: 0.8,
            // 100 kmol/h 기준 근사
            flow: VaporFlow::Volumetric {
                m3_per_s: 100.0 / 3600.0,
            },
            tray_spacing: TraySpacing::default(),
        }
    }
}

/// 설계 설정 파일 전체.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedSection,
    pub products: ProductSection,
    pub reflux: RefluxSection,
    pub stepping: SteppingSection,
    pub equilibrium: EquilibriumSection,
    pub sizing: SizingSection,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 읽는다. 파일이 없으면 오류.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load(path)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 파이프라인에 넘길 불변 입력으로 변환한다.
    pub fn design_input(&self) -> DesignResult<DesignInput> {
        Ok(DesignInput {
            feed_composition: self.feed.composition,
            thermal_condition: self.feed.thermal_condition,
            distillate: self.products.distillate,
            bottoms: self.products.bottoms,
            reflux_multiplier: self.reflux.multiplier,
            max_stages: self.stepping.max_stages,
            equilibrium: self.equilibrium.source.points()?,
            interpolation: self.equilibrium.interpolation,
            sizing: ColumnSizingInput {
                vapor_density_kg_per_m3: self.sizing.vapor_density_kg_per_m3,
                vapor_velocity_m_per_s: self.sizing.vapor_velocity_m_per_s,
                flow: self.sizing.flow,
                tray_spacing: self.sizing.tray_spacing,
            },
        })
    }
}

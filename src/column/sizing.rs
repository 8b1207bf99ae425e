use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DesignError, DesignResult};

/// 증기 유량 입력 형태. 모든 값은 SI 단위로 미리 환산되어 있어야 한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VaporFlow {
    /// 체적 유량 [m³/s]
    Volumetric { m3_per_s: f64 },
    /// 질량 유량 [kg/s]. 증기 밀도로 체적 유량을 구한다.
    Mass { kg_per_s: f64 },
}

/// 단 간격 결정 방식.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraySpacing {
    /// 고정 간격 [m]
    Fixed { spacing_m: f64 },
    /// 탑 직경에 따른 관용 간격표
    ByDiameter,
}

impl Default for TraySpacing {
    fn default() -> Self {
        TraySpacing::Fixed { spacing_m: 0.6 }
    }
}

/// 직경 상한 [m]과 그 이하에서 쓰는 단 간격 [m].
const SPACING_TABLE: [(f64, f64); 2] = [(1.0, 0.45), (3.0, 0.60)];
/// 표의 마지막 직경을 넘으면 쓰는 간격 [m]
const SPACING_LARGE_M: f64 = 0.75;

/// 직경에 맞는 단 간격을 표에서 고른다.
pub fn spacing_for_diameter(diameter_m: f64) -> f64 {
    SPACING_TABLE
        .iter()
        .find(|(limit, _)| diameter_m <= *limit)
        .map(|(_, spacing)| *spacing)
        .unwrap_or(SPACING_LARGE_M)
}

/// 탑 사이징 입력값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSizingInput {
    pub vapor_density_kg_per_m3: f64,
    pub vapor_velocity_m_per_s: f64,
    pub flow: VaporFlow,
    pub tray_spacing: TraySpacing,
}

/// 탑 사이징 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSizing {
    pub volumetric_flow_m3_per_s: f64,
    pub cross_section_m2: f64,
    pub diameter_m: f64,
    pub tray_spacing_m: f64,
    /// 단 수 × 단 간격
    pub tray_stack_height_m: f64,
}

fn require_positive(name: &'static str, value: f64) -> DesignResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(DesignError::parameter(name, value, "0보다 커야 합니다."))
    }
}

/// 연속 방정식 D = sqrt(4Q / (πv))로 탑 직경을 계산한다.
pub fn size_column(input: &ColumnSizingInput, stage_count: usize) -> DesignResult<ColumnSizing> {
    require_positive("vapor_density", input.vapor_density_kg_per_m3)?;
    require_positive("vapor_velocity", input.vapor_velocity_m_per_s)?;

    let volumetric_flow = match input.flow {
        VaporFlow::Volumetric { m3_per_s } => {
            require_positive("volumetric_flow", m3_per_s)?;
            m3_per_s
        }
        VaporFlow::Mass { kg_per_s } => {
            require_positive("mass_flow", kg_per_s)?;
            kg_per_s / input.vapor_density_kg_per_m3
        }
    };

    let area = volumetric_flow / input.vapor_velocity_m_per_s;
    let diameter = (4.0 * area / std::f64::consts::PI).sqrt();

    let spacing = match input.tray_spacing {
        TraySpacing::Fixed { spacing_m } => {
            require_positive("tray_spacing", spacing_m)?;
            spacing_m
        }
        TraySpacing::ByDiameter => spacing_for_diameter(diameter),
    };

    debug!(diameter_m = diameter, tray_spacing_m = spacing, "탑 사이징");
    Ok(ColumnSizing {
        volumetric_flow_m3_per_s: volumetric_flow,
        cross_section_m2: area,
        diameter_m: diameter,
        tray_spacing_m: spacing,
        tray_stack_height_m: stage_count as f64 * spacing,
    })
}

//! 설계 파이프라인.
//!
//! 평형 모델 → 최소 환류 → 운전 환류 → 조작선 → 계단 작도 → 사이징 순으로
//! 계산한다. 전역 상태가 없으므로 입력이 같으면 결과도 비트 단위로 같다.

use tracing::{debug, info_span};

use crate::column::{
    build_operating_lines, minimum_reflux, operating_reflux, size_column, ColumnSizing,
    ColumnSizingInput, FeedLine, OperatingLines, Staircase, StageStepper, Vertex,
};
use crate::equilibrium::{EquilibriumModel, EquilibriumPoint, InterpolationMethod};
use crate::error::{DesignError, DesignResult};

/// 한 번의 설계 계산에 필요한 모든 입력. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignInput {
    /// 공급 조성 x_F
    pub feed_composition: f64,
    /// 공급 열적 상태 q (1=포화액, 0=포화증기)
    pub thermal_condition: f64,
    /// 유출물 조성 x_D
    pub distillate: f64,
    /// 탑저 조성 x_W
    pub bottoms: f64,
    /// R = multiplier × R_min
    pub reflux_multiplier: f64,
    pub max_stages: usize,
    pub equilibrium: Vec<EquilibriumPoint>,
    pub interpolation: InterpolationMethod,
    pub sizing: ColumnSizingInput,
}

/// 최종 설계 요약.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDesign {
    pub minimum_reflux: f64,
    pub reflux: f64,
    pub stage_count: usize,
    pub feed_stage: usize,
    pub diameter_m: f64,
    pub tray_spacing_m: f64,
}

/// 설계 요약과 선도 작성용 중간 결과.
#[derive(Debug, Clone)]
pub struct DesignOutcome {
    pub design: ColumnDesign,
    pub model: EquilibriumModel,
    pub feed_line: FeedLine,
    pub pinch: Vertex,
    pub lines: OperatingLines,
    pub staircase: Staircase,
    pub sizing: ColumnSizing,
}

fn require_fraction(name: &'static str, value: f64) -> DesignResult<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(DesignError::parameter(
            name,
            value,
            "몰분율은 0과 1 사이여야 합니다.",
        ))
    }
}

impl DesignInput {
    /// 조성 관계 x_W < x_F < x_D 와 환류 배수를 계산 전에 검사한다.
    pub fn validate(&self) -> DesignResult<()> {
        require_fraction("x_F", self.feed_composition)?;
        require_fraction("x_D", self.distillate)?;
        require_fraction("x_W", self.bottoms)?;
        if self.distillate <= self.bottoms {
            return Err(DesignError::parameter(
                "x_D",
                self.distillate,
                "유출물 조성은 탑저 조성보다 커야 합니다.",
            ));
        }
        if !(self.feed_composition > self.bottoms && self.feed_composition < self.distillate) {
            return Err(DesignError::parameter(
                "x_F",
                self.feed_composition,
                "공급 조성은 탑저 조성과 유출물 조성 사이여야 합니다.",
            ));
        }
        if !(self.reflux_multiplier > 1.0) {
            return Err(DesignError::parameter(
                "R_multiplier",
                self.reflux_multiplier,
                "환류 배수는 1보다 커야 합니다.",
            ));
        }
        Ok(())
    }
}

/// 입력 하나로 전체 설계를 계산한다.
pub fn design_column(input: &DesignInput) -> DesignResult<DesignOutcome> {
    let _span = info_span!("design_column").entered();
    input.validate()?;

    let model = EquilibriumModel::build(input.equilibrium.iter().copied(), input.interpolation)?;
    let feed_line = FeedLine::new(input.feed_composition, input.thermal_condition)?;

    let min = minimum_reflux(&feed_line, &model, input.distillate)?;
    let reflux = operating_reflux(min.ratio, input.reflux_multiplier)?;
    debug!(r_min = min.ratio, r = reflux, "환류비");

    let lines = build_operating_lines(reflux, input.distillate, input.bottoms, &feed_line)?;
    let staircase = StageStepper::new(input.distillate, input.bottoms)
        .with_max_stages(input.max_stages)
        .run(&model, &lines)?;
    let sizing = size_column(&input.sizing, staircase.stage_count())?;

    let design = ColumnDesign {
        minimum_reflux: min.ratio,
        reflux,
        stage_count: staircase.stage_count(),
        feed_stage: staircase.feed_stage,
        diameter_m: sizing.diameter_m,
        tray_spacing_m: sizing.tray_spacing_m,
    };
    debug!(
        stages = design.stage_count,
        feed_stage = design.feed_stage,
        "설계 완료"
    );

    Ok(DesignOutcome {
        design,
        model,
        feed_line,
        pinch: min.pinch,
        lines,
        staircase,
        sizing,
    })
}

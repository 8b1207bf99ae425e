//! McCabe-Thiele 계단 작도.
//!
//! (x_D, x_D)에서 시작해 평형 곡선(수평 이동)과 활성 조작선(수직 이동)을
//! 번갈아 밟으며 x가 x_W 이하가 될 때까지 단을 센다. 반복 횟수에는 상한이
//! 있어서 조작선이 평형 곡선에 핀치되면 무한 반복 대신 `Convergence` 오류를 낸다.

use tracing::{trace, warn};

use super::{OperatingLines, Vertex};
use crate::equilibrium::EquilibriumCurve;
use crate::error::{DesignError, DesignResult};

/// 기본 단수 상한
pub const DEFAULT_MAX_STAGES: usize = 100;

/// 단이 속한 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Rectifying,
    Stripping,
}

/// 한 단: 평형 곡선 꼭짓점과 조작선 꼭짓점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    /// 1부터 시작 (1단이 탑정 쪽)
    pub number: usize,
    /// 수평 이동 끝점 (x', y)
    pub equilibrium: Vertex,
    /// 수직 이동 끝점 (x', y')
    pub operating: Vertex,
    pub section: Section,
}

/// 계단 작도 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Staircase {
    pub start: Vertex,
    pub stages: Vec<Stage>,
    /// 탈거부 조작선으로 처음 넘어간 단 번호
    pub feed_stage: usize,
}

impl Staircase {
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// 그리기용 꼭짓점 목록. 시작점 다음에 평형/조작선 꼭짓점이 번갈아 온다.
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut out = Vec::with_capacity(1 + 2 * self.stages.len());
        out.push(self.start);
        for stage in &self.stages {
            out.push(stage.equilibrium);
            out.push(stage.operating);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepperState {
    AtDistillate,
    Stepping,
    Done,
}

/// 계단 작도기.
#[derive(Debug, Clone, Copy)]
pub struct StageStepper {
    pub distillate: f64,
    pub bottoms: f64,
    pub max_stages: usize,
}

impl StageStepper {
    pub fn new(distillate: f64, bottoms: f64) -> Self {
        Self {
            distillate,
            bottoms,
            max_stages: DEFAULT_MAX_STAGES,
        }
    }

    pub fn with_max_stages(mut self, max_stages: usize) -> Self {
        self.max_stages = max_stages;
        self
    }

    /// 평형 곡선과 조작선 사이를 계단식으로 내려가며 단을 센다.
    pub fn run(
        &self,
        curve: &impl EquilibriumCurve,
        lines: &OperatingLines,
    ) -> DesignResult<Staircase> {
        let start = Vertex::new(self.distillate, self.distillate);
        let mut current = start;
        let mut stages: Vec<Stage> = Vec::new();
        let mut feed_stage: Option<usize> = None;
        let mut state = StepperState::AtDistillate;

        loop {
            state = match state {
                StepperState::AtDistillate => {
                    if self.distillate <= self.bottoms {
                        return Err(DesignError::parameter(
                            "x_D",
                            self.distillate,
                            "유출물 조성은 탑저 조성보다 커야 합니다.",
                        ));
                    }
                    if self.max_stages == 0 {
                        return Err(DesignError::parameter(
                            "max_stages",
                            0.0,
                            "단수 상한은 1 이상이어야 합니다.",
                        ));
                    }
                    StepperState::Stepping
                }
                StepperState::Stepping => {
                    if stages.len() >= self.max_stages {
                        return Err(DesignError::Convergence(format!(
                            "{}단 안에 x_W={}에 도달하지 못했습니다 (현재 x={:.6}). 조작선이 평형 곡선에 핀치됩니다. 환류 배수를 늘리세요.",
                            self.max_stages, self.bottoms, current.x
                        )));
                    }

                    let x_next = curve.liquid_for_vapor(current.y)?;
                    if x_next >= current.x {
                        return Err(DesignError::Convergence(format!(
                            "계단이 내려가지 않습니다 (x={:.6} -> {:.6}). 평형 곡선이 y=x 선 위에 있어야 합니다.",
                            current.x, x_next
                        )));
                    }

                    // 공급점과 정확히 같으면 탈거부에 속한다.
                    let section = if x_next <= lines.feed_point.x {
                        Section::Stripping
                    } else {
                        Section::Rectifying
                    };
                    let number = stages.len() + 1;
                    if section == Section::Stripping && feed_stage.is_none() {
                        feed_stage = Some(number);
                    }
                    let line = match section {
                        Section::Rectifying => &lines.rectifying,
                        Section::Stripping => &lines.stripping,
                    };
                    let y_next = line.y_at(x_next);

                    let stage = Stage {
                        number,
                        equilibrium: Vertex::new(x_next, current.y),
                        operating: Vertex::new(x_next, y_next),
                        section,
                    };
                    trace!(stage = number, x = x_next, y = y_next, ?section, "단");
                    stages.push(stage);
                    current = stage.operating;

                    if x_next <= self.bottoms {
                        StepperState::Done
                    } else {
                        StepperState::Stepping
                    }
                }
                StepperState::Done => break,
            };
        }

        if stages.len() * 10 >= self.max_stages * 9 {
            warn!(
                stages = stages.len(),
                max = self.max_stages,
                "단수가 상한에 근접했습니다."
            );
        }

        // 공급점이 (x_W, x_D) 밖이면 어느 단도 탈거부로 넘어가지 않는다.
        let feed_stage = feed_stage.ok_or(DesignError::InvalidGeometry(
            "계단이 공급점을 지나지 않았습니다. 공급점이 탑저 조성과 유출물 조성 사이에 있어야 합니다.",
        ))?;
        Ok(Staircase {
            start,
            stages,
            feed_stage,
        })
    }
}

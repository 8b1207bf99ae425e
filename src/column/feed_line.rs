use tracing::debug;

use super::Vertex;
use crate::equilibrium::EquilibriumCurve;
use crate::error::{DesignError, DesignResult};
use crate::numeric;

/// q 값이 이 오차 안에서 1이면 포화액 공급(수직 q선)으로 본다.
pub const SATURATED_LIQUID_TOLERANCE: f64 = 1e-9;

/// 공급선(q선). (x_F, x_F)를 지나고 기울기 q/(q-1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedLine {
    composition: f64,
    thermal_condition: f64,
}

impl FeedLine {
    /// `composition`은 (0, 1) 안이어야 하고 `thermal_condition`(q)은 유한해야 한다.
    pub fn new(composition: f64, thermal_condition: f64) -> DesignResult<Self> {
        if !(composition > 0.0 && composition < 1.0) {
            return Err(DesignError::parameter(
                "x_F",
                composition,
                "공급 조성은 0과 1 사이여야 합니다.",
            ));
        }
        if !thermal_condition.is_finite() {
            return Err(DesignError::parameter(
                "q",
                thermal_condition,
                "q 값이 유한하지 않습니다.",
            ));
        }
        Ok(Self {
            composition,
            thermal_condition,
        })
    }

    pub fn composition(&self) -> f64 {
        self.composition
    }

    pub fn thermal_condition(&self) -> f64 {
        self.thermal_condition
    }

    /// 포화액 공급이면 q선이 x = x_F 수직선이 된다.
    pub fn is_vertical(&self) -> bool {
        (self.thermal_condition - 1.0).abs() < SATURATED_LIQUID_TOLERANCE
    }

    /// 기울기 q/(q-1). 수직선이면 `None`.
    pub fn slope(&self) -> Option<f64> {
        (!self.is_vertical()).then(|| self.thermal_condition / (self.thermal_condition - 1.0))
    }

    /// y 절편 -x_F/(q-1). 수직선이면 `None`.
    pub fn intercept(&self) -> Option<f64> {
        (!self.is_vertical()).then(|| -self.composition / (self.thermal_condition - 1.0))
    }

    pub fn y_at(&self, x: f64) -> Option<f64> {
        Some(self.slope()? * x + self.intercept()?)
    }

    /// q선과 평형 곡선의 교점(핀치점)을 찾는다.
    ///
    /// q < 1 이면 [lo, x_F], q > 1 이면 [x_F, hi] 구간에서 근을 찾는다.
    /// 교점이 없으면 `Convergence` 오류.
    pub fn intersect_equilibrium(&self, curve: &impl EquilibriumCurve) -> DesignResult<Vertex> {
        let (lo, hi) = curve.domain();
        let x_f = self.composition;
        if !(lo..=hi).contains(&x_f) {
            return Err(DesignError::Convergence(format!(
                "공급 조성 x_F={x_f}가 평형 데이터 범위 [{lo}, {hi}] 밖이라 q선 교점을 찾을 수 없습니다."
            )));
        }

        let pinch = match (self.slope(), self.intercept()) {
            (Some(slope), Some(intercept)) => {
                let (a, b) = if self.thermal_condition < 1.0 {
                    (lo, x_f)
                } else {
                    (x_f, hi)
                };
                let x = numeric::bisect(
                    |x| {
                        curve
                            .evaluate(x)
                            .map(|y| y - (slope * x + intercept))
                            .unwrap_or(f64::NAN)
                    },
                    a,
                    b,
                    "q선-평형 곡선 교점",
                )?;
                Vertex::new(x, curve.evaluate(x)?)
            }
            _ => Vertex::new(x_f, curve.evaluate(x_f)?),
        };
        debug!(x = pinch.x, y = pinch.y, q = self.thermal_condition, "핀치점");
        Ok(pinch)
    }
}

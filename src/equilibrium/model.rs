use tracing::debug;

use super::data::EquilibriumPoint;
use super::interpolation::{Interpolant, InterpolationMethod, Spline};
use crate::error::{DesignError, DesignResult};
use crate::numeric;

/// 단 계산이 평형 곡선에 요구하는 능력.
///
/// 보간 방식과 무관하게 `evaluate`와 `domain`만으로 작도가 이루어진다.
pub trait EquilibriumCurve {
    /// 액상 조성 x에 대한 기상 조성 y. 범위 밖이면 `Domain` 오류.
    fn evaluate(&self, x: f64) -> DesignResult<f64>;

    /// 평가 가능한 x 범위 `(lo, hi)`.
    fn domain(&self) -> (f64, f64);

    /// 주어진 기상 조성 y와 평형인 액상 조성 x를 찾는다.
    fn liquid_for_vapor(&self, y: f64) -> DesignResult<f64> {
        let (lo, hi) = self.domain();
        numeric::bisect(
            |x| self.evaluate(x).map(|v| v - y).unwrap_or(f64::NAN),
            lo,
            hi,
            "평형 곡선 역산",
        )
    }
}

/// 이산 평형 데이터와 그 보간기.
///
/// 생성 후에는 변경되지 않는다.
#[derive(Debug, Clone)]
pub struct EquilibriumModel {
    points: Vec<EquilibriumPoint>,
    spline: Spline,
}

impl EquilibriumModel {
    /// 평형 점들로 모델을 만든다.
    ///
    /// 점이 2개 미만이거나, 값이 [0, 1]을 벗어나거나, 정렬 후 x가 엄격히
    /// 증가하지 않으면 `InvalidData` 오류를 낸다.
    pub fn build(
        points: impl IntoIterator<Item = EquilibriumPoint>,
        method: InterpolationMethod,
    ) -> DesignResult<Self> {
        let mut points: Vec<EquilibriumPoint> = points.into_iter().collect();
        if points.len() < 2 {
            return Err(DesignError::InvalidData(format!(
                "평형 점은 2개 이상이어야 합니다 (현재 {}개).",
                points.len()
            )));
        }
        if let Some(p) = points
            .iter()
            .find(|p| !(0.0..=1.0).contains(&p.x) || !(0.0..=1.0).contains(&p.y))
        {
            return Err(DesignError::InvalidData(format!(
                "몰분율은 0~1 범위여야 합니다: ({}, {})",
                p.x, p.y
            )));
        }
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        if let Some(w) = points.windows(2).find(|w| w[1].x <= w[0].x) {
            return Err(DesignError::InvalidData(format!(
                "x 값이 중복됩니다: {}",
                w[0].x
            )));
        }

        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        let spline = Spline::build(method, &xs, &ys);
        debug!(
            points = points.len(),
            method = ?method,
            lo = xs[0],
            hi = xs[xs.len() - 1],
            "평형 모델 생성"
        );
        Ok(Self { points, spline })
    }

    pub fn points(&self) -> &[EquilibriumPoint] {
        &self.points
    }

    pub fn method(&self) -> InterpolationMethod {
        self.spline.method()
    }

    /// 곡선을 그리기 위해 범위 전체를 `count`개 등간격으로 표본화한다.
    pub fn sample(&self, count: usize) -> Vec<EquilibriumPoint> {
        let (lo, hi) = self.domain();
        match count {
            0 => Vec::new(),
            1 => vec![EquilibriumPoint::new(lo, self.spline.value(lo))],
            _ => {
                let step = (hi - lo) / (count - 1) as f64;
                (0..count)
                    .map(|i| {
                        // 마지막 점은 반올림 오차 없이 hi에 맞춘다.
                        let x = if i == count - 1 { hi } else { lo + step * i as f64 };
                        EquilibriumPoint::new(x, self.spline.value(x))
                    })
                    .collect()
            }
        }
    }
}

impl EquilibriumCurve for EquilibriumModel {
    fn evaluate(&self, x: f64) -> DesignResult<f64> {
        let (lo, hi) = self.domain();
        if !(lo..=hi).contains(&x) {
            return Err(DesignError::Domain { x, lo, hi });
        }
        Ok(self.spline.value(x))
    }

    fn domain(&self) -> (f64, f64) {
        (self.points[0].x, self.points[self.points.len() - 1].x)
    }
}

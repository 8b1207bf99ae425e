use serde::{Deserialize, Serialize};

use crate::error::{DesignError, DesignResult};

/// 기-액 평형 한 점. 경성분(light component)의 몰분율.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumPoint {
    /// 액상 몰분율
    pub x: f64,
    /// 기상 몰분율
    pub y: f64,
}

impl EquilibriumPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for EquilibriumPoint {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

/// 1 atm 벤젠-톨루엔 평형 데이터.
// 순성분 끝점 (0,0), (1,1)을 포함해야 단 계산이 x_W까지 내려갈 수 있다.
pub const BENZENE_TOLUENE_1ATM: [EquilibriumPoint; 11] = [
    EquilibriumPoint::new(0.0, 0.0),
    EquilibriumPoint::new(0.1, 0.22),
    EquilibriumPoint::new(0.2, 0.39),
    EquilibriumPoint::new(0.3, 0.52),
    EquilibriumPoint::new(0.4, 0.63),
    EquilibriumPoint::new(0.5, 0.72),
    EquilibriumPoint::new(0.6, 0.80),
    EquilibriumPoint::new(0.7, 0.86),
    EquilibriumPoint::new(0.8, 0.92),
    EquilibriumPoint::new(0.9, 0.96),
    EquilibriumPoint::new(1.0, 1.0),
];

/// 일정 상대휘발도 α로 평형 데이터를 만든다.
///
/// y = αx / (1 + (α - 1)x) 를 [0, 1] 등간격 `samples`개 점에서 계산한다.
pub fn relative_volatility_points(alpha: f64, samples: usize) -> DesignResult<Vec<EquilibriumPoint>> {
    if !alpha.is_finite() || alpha <= 1.0 {
        return Err(DesignError::parameter(
            "alpha",
            alpha,
            "상대휘발도는 1보다 커야 합니다.",
        ));
    }
    if samples < 2 {
        return Err(DesignError::parameter(
            "samples",
            samples as f64,
            "점 개수는 2 이상이어야 합니다.",
        ));
    }
    let last = (samples - 1) as f64;
    Ok((0..samples)
        .map(|i| {
            let x = i as f64 / last;
            EquilibriumPoint::new(x, alpha * x / (1.0 + (alpha - 1.0) * x))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volatility_curve_spans_unit_square() {
        let pts = relative_volatility_points(2.5, 21).expect("points");
        assert_eq!(pts.len(), 21);
        assert_eq!(pts[0], EquilibriumPoint::new(0.0, 0.0));
        assert!((pts[20].y - 1.0).abs() < 1e-12);
        assert!(pts[1..20].iter().all(|p| p.y > p.x));
    }

    #[test]
    fn volatility_of_one_is_rejected() {
        assert!(relative_volatility_points(1.0, 10).is_err());
        assert!(relative_volatility_points(2.0, 1).is_err());
    }
}

use tracing::debug;

use super::{FeedLine, Vertex};
use crate::equilibrium::EquilibriumCurve;
use crate::error::{DesignError, DesignResult};

/// 핀치점이 y=x 선과 이 거리 안이면 45° 핀치로 본다.
pub const DIAGONAL_PINCH_TOLERANCE: f64 = 1e-9;

/// 최소 환류 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumReflux {
    pub ratio: f64,
    /// q선과 평형 곡선의 교점
    pub pinch: Vertex,
}

/// R_min = (x_D - y_p) / (y_p - x_p).
///
/// 핀치점이 45° 선 위에 있으면 `PinchOnDiagonal`, R_min이 0 이하이면
/// (핀치가 유출물 조성보다 위) `InvalidGeometry` 오류를 낸다.
pub fn minimum_reflux(
    feed: &FeedLine,
    curve: &impl EquilibriumCurve,
    distillate: f64,
) -> DesignResult<MinimumReflux> {
    let pinch = feed.intersect_equilibrium(curve)?;
    let gap = pinch.y - pinch.x;
    if gap.abs() < DIAGONAL_PINCH_TOLERANCE {
        return Err(DesignError::PinchOnDiagonal { x: pinch.x });
    }
    let ratio = (distillate - pinch.y) / gap;
    if !(ratio > 0.0) {
        return Err(DesignError::InvalidGeometry(
            "최소 환류비가 0 이하입니다. 핀치점이 유출물 조성보다 위에 있거나 평형 곡선이 y=x 아래에 있습니다.",
        ));
    }
    debug!(r_min = ratio, "최소 환류비");
    Ok(MinimumReflux { ratio, pinch })
}

/// 운전 환류비 R = multiplier × R_min. multiplier는 1보다 커야 한다.
pub fn operating_reflux(minimum: f64, multiplier: f64) -> DesignResult<f64> {
    if !(multiplier > 1.0) || !multiplier.is_finite() {
        return Err(DesignError::parameter(
            "R_multiplier",
            multiplier,
            "운전 환류비는 최소 환류비보다 커야 하므로 배수는 1보다 커야 합니다.",
        ));
    }
    if !(minimum > 0.0) {
        return Err(DesignError::parameter(
            "R_min",
            minimum,
            "최소 환류비는 양수여야 합니다.",
        ));
    }
    Ok(multiplier * minimum)
}

use tracing::debug;

use super::{FeedLine, Vertex};
use crate::error::{DesignError, DesignResult};

/// 두 직선 기울기 차이가 이보다 작으면 평행으로 본다.
pub const PARALLEL_TOLERANCE: f64 = 1e-12;

/// y = slope·x + intercept, 유효 구간 [x_low, x_high].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingLine {
    pub slope: f64,
    pub intercept: f64,
    pub x_low: f64,
    pub x_high: f64,
}

impl OperatingLine {
    /// 직선 식의 값. 유효 구간 밖에서도 계산한다 (마지막 단의 수직 이동).
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// 정류부·탈거부 조작선과 그 교점(공급점).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingLines {
    pub rectifying: OperatingLine,
    pub stripping: OperatingLine,
    pub feed_point: Vertex,
}

/// 정류부 조작선 y = R/(R+1)·x + x_D/(R+1) 의 기울기와 절편.
fn rectifying_coefficients(reflux: f64, distillate: f64) -> (f64, f64) {
    (reflux / (reflux + 1.0), distillate / (reflux + 1.0))
}

/// 정류부 조작선과 q선의 교점을 대수적으로 구한다.
pub fn feed_point(reflux: f64, distillate: f64, feed: &FeedLine) -> DesignResult<Vertex> {
    let (r_slope, r_intercept) = rectifying_coefficients(reflux, distillate);
    let x = match (feed.slope(), feed.intercept()) {
        (Some(q_slope), Some(q_intercept)) => {
            let denom = q_slope - r_slope;
            if denom.abs() < PARALLEL_TOLERANCE {
                return Err(DesignError::InvalidGeometry(
                    "정류부 조작선과 q선이 평행합니다.",
                ));
            }
            (r_intercept - q_intercept) / denom
        }
        _ => feed.composition(),
    };
    Ok(Vertex::new(x, r_slope * x + r_intercept))
}

/// 정류부·탈거부 조작선을 만든다.
///
/// 탈거부 조작선은 (x_W, x_W)와 공급점을 지난다.
pub fn build_operating_lines(
    reflux: f64,
    distillate: f64,
    bottoms: f64,
    feed: &FeedLine,
) -> DesignResult<OperatingLines> {
    if !(reflux > 0.0) {
        return Err(DesignError::parameter(
            "R",
            reflux,
            "환류비는 양수여야 합니다.",
        ));
    }
    let feed_point = feed_point(reflux, distillate, feed)?;
    let (r_slope, r_intercept) = rectifying_coefficients(reflux, distillate);
    let rectifying = OperatingLine {
        slope: r_slope,
        intercept: r_intercept,
        x_low: feed_point.x,
        x_high: distillate,
    };

    // 공급점은 (x_W, x_D) 안에 있어야 탈거부 조작선의 유효 구간이 뒤집히지 않는다.
    let run = feed_point.x - bottoms;
    if run < PARALLEL_TOLERANCE || feed_point.x >= distillate {
        return Err(DesignError::InvalidGeometry(
            "공급점이 탑저 조성과 유출물 조성 사이에 있지 않아 탈거부 조작선을 정의할 수 없습니다.",
        ));
    }
    let s_slope = (feed_point.y - bottoms) / run;
    let stripping = OperatingLine {
        slope: s_slope,
        intercept: bottoms - s_slope * bottoms,
        x_low: bottoms,
        x_high: feed_point.x,
    };
    debug!(
        feed_x = feed_point.x,
        feed_y = feed_point.y,
        rect_slope = r_slope,
        strip_slope = s_slope,
        "조작선"
    );
    Ok(OperatingLines {
        rectifying,
        stripping,
        feed_point,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturated_liquid_feed_point_sits_on_feed_composition() {
        let feed = FeedLine::new(0.4, 1.0).expect("feed");
        let p = feed_point(2.0, 0.95, &feed).expect("point");
        assert_eq!(p.x, 0.4);
        assert!((p.y - (2.0 / 3.0 * 0.4 + 0.95 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn feed_point_lies_on_both_lines() {
        let feed = FeedLine::new(0.5, 0.5).expect("feed");
        let p = feed_point(1.8, 0.95, &feed).expect("point");
        let q_y = feed.y_at(p.x).expect("q line");
        assert!((p.y - q_y).abs() < 1e-12);
    }

    #[test]
    fn parallel_lines_are_rejected() {
        // q/(q-1) = R/(R+1) = 0.5 -> q = -1, R = 1
        let feed = FeedLine::new(0.5, -1.0).expect("feed");
        let err = feed_point(1.0, 0.95, &feed).unwrap_err();
        assert!(matches!(err, DesignError::InvalidGeometry(_)));
    }

    #[test]
    fn stripping_line_meets_diagonal_at_bottoms() {
        let feed = FeedLine::new(0.4, 1.0).expect("feed");
        let lines = build_operating_lines(2.0, 0.95, 0.05, &feed).expect("lines");
        assert!((lines.stripping.y_at(0.05) - 0.05).abs() < 1e-12);
        assert!((lines.rectifying.y_at(0.95) - 0.95).abs() < 1e-12);
        assert!((lines.stripping.y_at(0.4) - lines.feed_point.y).abs() < 1e-12);
    }

    #[test]
    fn feed_point_below_bottoms_is_rejected() {
        // 포화증기 공급 y = 0.25 와 R = 2 정류부 조작선은 x = -0.1 에서 만난다.
        let feed = FeedLine::new(0.25, 0.0).expect("feed");
        let err = build_operating_lines(2.0, 0.95, 0.2, &feed).unwrap_err();
        assert!(matches!(err, DesignError::InvalidGeometry(_)));
    }
}

//! 평형 곡선 보간기.
//!
//! 두 방식 모두 매듭점을 정확히 지나고 1차 도함수가 연속(C¹)이다.
//! 범위 검사는 [`super::EquilibriumModel`]이 담당하며 여기서는 하지 않는다.

use serde::{Deserialize, Serialize};

/// 매끄러운 1변수 보간 능력.
pub trait Interpolant {
    /// 매듭 구간 안의 x에서 값을 계산한다.
    fn value(&self, x: f64) -> f64;
}

/// 보간 방식 선택.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMethod {
    /// 자연 3차 스플라인 (양 끝 2차 도함수 0)
    #[default]
    NaturalCubic,
    /// 단조 3차 Hermite (Fritsch-Carlson)
    MonotoneCubic,
}

/// 선택된 보간기를 담는다.
#[derive(Debug, Clone)]
pub enum Spline {
    Natural(NaturalCubicSpline),
    Monotone(MonotoneCubic),
}

impl Spline {
    /// `xs`는 엄격히 증가하고 길이가 2 이상이라고 가정한다.
    pub(crate) fn build(method: InterpolationMethod, xs: &[f64], ys: &[f64]) -> Self {
        match method {
            InterpolationMethod::NaturalCubic => Spline::Natural(NaturalCubicSpline::new(xs, ys)),
            InterpolationMethod::MonotoneCubic => Spline::Monotone(MonotoneCubic::new(xs, ys)),
        }
    }

    pub fn method(&self) -> InterpolationMethod {
        match self {
            Spline::Natural(_) => InterpolationMethod::NaturalCubic,
            Spline::Monotone(_) => InterpolationMethod::MonotoneCubic,
        }
    }
}

impl Interpolant for Spline {
    fn value(&self, x: f64) -> f64 {
        match self {
            Spline::Natural(s) => s.value(x),
            Spline::Monotone(s) => s.value(x),
        }
    }
}

fn segment_index(xs: &[f64], x: f64) -> usize {
    xs.partition_point(|&k| k <= x)
        .saturating_sub(1)
        .min(xs.len() - 2)
}

/// 자연 3차 스플라인.
#[derive(Debug, Clone)]
pub struct NaturalCubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// 각 매듭의 2차 도함수
    m: Vec<f64>,
}

impl NaturalCubicSpline {
    pub(crate) fn new(xs: &[f64], ys: &[f64]) -> Self {
        let n = xs.len();
        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let mut m = vec![0.0; n];

        if n > 2 {
            // 내부 매듭 1..n-1 에 대한 삼중대각 계를 Thomas 알고리즘으로 푼다.
            let size = n - 2;
            let mut c_prime = vec![0.0; size];
            let mut d_prime = vec![0.0; size];
            for k in 0..size {
                let i = k + 1;
                let lower = h[i - 1];
                let diag = 2.0 * (h[i - 1] + h[i]);
                let upper = h[i];
                let rhs = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
                if k == 0 {
                    c_prime[k] = upper / diag;
                    d_prime[k] = rhs / diag;
                } else {
                    let denom = diag - lower * c_prime[k - 1];
                    c_prime[k] = upper / denom;
                    d_prime[k] = (rhs - lower * d_prime[k - 1]) / denom;
                }
            }
            for k in (0..size).rev() {
                let next = if k + 1 < size { m[k + 2] } else { 0.0 };
                m[k + 1] = d_prime[k] - c_prime[k] * next;
            }
        }

        Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            m,
        }
    }
}

impl Interpolant for NaturalCubicSpline {
    fn value(&self, x: f64) -> f64 {
        let i = segment_index(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let t0 = self.xs[i + 1] - x;
        let t1 = x - self.xs[i];
        (self.m[i] * t0.powi(3) + self.m[i + 1] * t1.powi(3)) / (6.0 * h)
            + (self.ys[i] / h - self.m[i] * h / 6.0) * t0
            + (self.ys[i + 1] / h - self.m[i + 1] * h / 6.0) * t1
    }
}

/// 단조 구간별 3차 Hermite 보간 (Fritsch-Carlson 기울기).
#[derive(Debug, Clone)]
pub struct MonotoneCubic {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// 각 매듭의 1차 도함수
    d: Vec<f64>,
}

impl MonotoneCubic {
    pub(crate) fn new(xs: &[f64], ys: &[f64]) -> Self {
        let n = xs.len();
        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let delta: Vec<f64> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();
        let mut d = vec![0.0; n];

        if n == 2 {
            d[0] = delta[0];
            d[1] = delta[0];
        } else {
            for i in 1..n - 1 {
                if delta[i - 1] * delta[i] > 0.0 {
                    let w1 = 2.0 * h[i] + h[i - 1];
                    let w2 = h[i] + 2.0 * h[i - 1];
                    d[i] = (w1 + w2) / (w1 / delta[i - 1] + w2 / delta[i]);
                }
            }
            d[0] = end_slope(h[0], h[1], delta[0], delta[1]);
            d[n - 1] = end_slope(h[n - 2], h[n - 3], delta[n - 2], delta[n - 3]);
        }

        Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            d,
        }
    }
}

/// 끝점 기울기. 3점 비대칭 공식에 단조성 보정을 건다.
fn end_slope(h0: f64, h1: f64, del0: f64, del1: f64) -> f64 {
    let d = ((2.0 * h0 + h1) * del0 - h0 * del1) / (h0 + h1);
    if d * del0 <= 0.0 {
        0.0
    } else if del0 * del1 <= 0.0 && d.abs() > (3.0 * del0).abs() {
        3.0 * del0
    } else {
        d
    }
}

impl Interpolant for MonotoneCubic {
    fn value(&self, x: f64) -> f64 {
        let i = segment_index(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;
        h00 * self.ys[i] + h10 * h * self.d[i] + h01 * self.ys[i + 1] + h11 * h * self.d[i + 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];
    const YS: [f64; 5] = [0.0, 0.45, 0.70, 0.87, 1.0];

    #[test]
    fn natural_spline_reproduces_straight_line() {
        let ys: Vec<f64> = XS.iter().map(|x| 2.0 * x + 1.0).collect();
        let s = NaturalCubicSpline::new(&XS, &ys);
        for x in [0.1, 0.33, 0.6, 0.95] {
            assert!((s.value(x) - (2.0 * x + 1.0)).abs() < 1e-12);
        }
    }

    #[test]
    fn natural_spline_end_curvature_is_zero() {
        let s = NaturalCubicSpline::new(&XS, &YS);
        assert_eq!(s.m[0], 0.0);
        assert_eq!(s.m[4], 0.0);
        assert!(s.m[2] < 0.0);
    }

    #[test]
    fn monotone_cubic_stays_monotone() {
        let s = MonotoneCubic::new(&XS, &YS);
        let mut prev = s.value(0.0);
        for i in 1..=200 {
            let v = s.value(i as f64 / 200.0);
            assert!(v >= prev, "not monotone at step {i}");
            prev = v;
        }
    }

    #[test]
    fn two_point_splines_are_linear() {
        let n = NaturalCubicSpline::new(&[0.0, 1.0], &[0.0, 0.5]);
        let m = MonotoneCubic::new(&[0.0, 1.0], &[0.0, 0.5]);
        assert!((n.value(0.4) - 0.2).abs() < 1e-12);
        assert!((m.value(0.4) - 0.2).abs() < 1e-12);
    }
}
